use std::sync::Arc;

use anyhow::Context;
use usergate_auth::{IdentityResolver, RoleStore, TokenCodec};
use usergate_config::{CorsConfig, JwtConfig};
use usergate_db::{InMemoryStore, MIGRATOR, PgStore, UserStore, init_db_pool};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub roles: Arc<dyn RoleStore>,
    pub identity: IdentityResolver,
    pub tokens: TokenCodec,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        jwt_config: &JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            identity: IdentityResolver::new(roles.clone()),
            tokens: TokenCodec::new(jwt_config),
            users,
            roles,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    let cors_config = CorsConfig::from_env();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL not set, users are kept in memory and lost on restart");
        let store = Arc::new(InMemoryStore::new());
        return Ok(AppState::new(store.clone(), store, &jwt_config, cors_config));
    };

    let pool = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Connected to PostgreSQL");

    let store = Arc::new(PgStore::new(pool));
    Ok(AppState::new(store.clone(), store, &jwt_config, cors_config))
}
