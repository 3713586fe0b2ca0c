//! # Usergate Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and access-token lifetime
//! - [`cors`]: allowed CORS origins
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use usergate_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
