//! Bearer token encoding and verification.
//!
//! Tokens are HS256 JWTs: three dot-separated base64url segments whose
//! payload is [`Claims`]. A token is accepted only if
//!
//! - it parses as a JWT signed with HS256,
//! - its signature verifies under the configured secret,
//! - its payload carries an integer `userId`, and
//! - its `exp`, when present, is not in the past.
//!
//! Every other outcome is [`ErrorKind::TokenInvalid`](usergate_core::ErrorKind::TokenInvalid).

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use usergate_config::JwtConfig;
use usergate_core::AppError;

use crate::claims::Claims;

/// Issues and decodes access tokens under a single signing secret.
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_token_expiry: Option<i64>,
}

impl TokenCodec {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional; it is still enforced whenever a token carries one.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        Self {
            encoding: EncodingKey::from_secret(jwt_config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            validation,
            access_token_expiry: jwt_config.access_token_expiry,
        }
    }

    /// Encodes `user_id` into a signed token.
    ///
    /// Without a configured lifetime the output is a pure function of the
    /// user id and the secret.
    pub fn issue(&self, user_id: i64) -> Result<String, AppError> {
        let exp = self
            .access_token_expiry
            .map(|secs| {
                Utc::now()
                    .timestamp()
                    .checked_add(secs)
                    .and_then(|ts| usize::try_from(ts).ok())
                    .ok_or_else(|| {
                        AppError::internal(anyhow::anyhow!(
                            "Access token expiry of {} seconds is out of range",
                            secs
                        ))
                    })
            })
            .transpose()?;

        let claims = Claims { user_id, exp };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
    }

    /// Verifies `token` and returns the user id it was issued for.
    pub fn decode(&self, token: &str) -> Result<i64, AppError> {
        if token.trim().is_empty() {
            return Err(AppError::token_invalid("Invalid or expired token"));
        }

        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.user_id)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "token rejected");
                AppError::token_invalid("Invalid or expired token")
            })
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}
