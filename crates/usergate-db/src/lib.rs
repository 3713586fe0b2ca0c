//! # Usergate DB
//!
//! Storage collaborators for the Usergate API.
//!
//! - [`store`]: the [`UserStore`] trait (the role side is
//!   [`usergate_auth::RoleStore`])
//! - [`postgres`]: [`PgStore`], backed by SQLx and PostgreSQL
//! - [`memory`]: [`InMemoryStore`], for tests and local runs without a database
//!
//! # Example
//!
//! ```ignore
//! use usergate_db::{PgStore, init_db_pool};
//!
//! let pool = init_db_pool(&database_url).await?;
//! usergate_db::MIGRATOR.run(&pool).await?;
//! let store = PgStore::new(pool);
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryStore;
pub use postgres::PgStore;
pub use store::UserStore;

pub use sqlx::PgPool;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Connects a PostgreSQL pool to `database_url`.
///
/// Call once at startup; the pool is cheap to clone and is shared by every
/// request through [`PgStore`].
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
