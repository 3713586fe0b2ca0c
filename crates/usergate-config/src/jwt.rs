use std::env;

/// Signing secret used when `JWT_SECRET` is not set. Only fit for local development.
pub const DEFAULT_SECRET: &str = "usergate-dev-secret-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access-token lifetime in seconds. `None` issues tokens without an `exp` claim.
    pub access_token_expiry: Option<i64>,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, falling back to the development secret");
            DEFAULT_SECRET.to_string()
        });

        Self {
            secret,
            access_token_expiry: parse_expiry(env::var("JWT_ACCESS_EXPIRY").ok().as_deref()),
        }
    }

    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: None,
        }
    }

    pub fn with_expiry(mut self, seconds: i64) -> Self {
        self.access_token_expiry = (seconds > 0).then_some(seconds);
        self
    }
}

fn parse_expiry(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|secs| *secs > 0)
}
