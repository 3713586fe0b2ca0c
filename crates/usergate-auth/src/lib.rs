//! # Usergate Auth
//!
//! The authentication/authorization core of the Usergate API.
//!
//! - [`claims`]: the token payload (`{"userId": <integer>}`)
//! - [`jwt`]: [`TokenCodec`], issuing and decoding HS256 bearer tokens
//! - [`principal`]: the per-request authenticated identity
//! - [`resolver`]: [`IdentityResolver`] and the [`RoleStore`] collaborator
//! - [`policy`]: ownership/role checks producing an [`AuthorizationDecision`]
//!
//! Roles never travel inside the token. They are looked up on every request,
//! so a promotion or revocation applies to the very next call.
//!
//! # Example
//!
//! ```ignore
//! use usergate_auth::{Capability, TokenCodec, authorize};
//! use usergate_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env());
//! let token = codec.issue(1)?;
//! let user_id = codec.decode(&token)?;
//!
//! let principal = resolver.resolve_principal(user_id).await?;
//! authorize(Some(&principal), 1, Capability::SelfOnly).into_result()?;
//! ```

pub mod claims;
pub mod jwt;
pub mod policy;
pub mod principal;
pub mod resolver;

pub use claims::Claims;
pub use jwt::TokenCodec;
pub use policy::{AuthorizationDecision, Capability, DenialReason, authorize};
pub use principal::{Principal, ROLE_ADMIN, ROLE_USER};
pub use resolver::{IdentityResolver, RoleStore};
