//! Request middleware and extractors.
//!
//! - [`auth`]: the authentication gate and the [`auth::CurrentPrincipal`]
//!   extractor
//!
//! # Authentication Flow
//!
//! 1. [`auth::authenticate`] runs for every route. Without an
//!    `Authorization` header the request continues anonymously.
//! 2. With one, the header must be `Bearer <token>` and the token must
//!    decode; otherwise the request ends with 401.
//! 3. The decoded user id is resolved to a [`usergate_auth::Principal`]
//!    (with current roles) and stored in the request extensions.
//! 4. Handlers read it through [`auth::CurrentPrincipal`] and call
//!    [`auth::CurrentPrincipal::authorize`] with the capability they need.
//!    Anonymous callers are turned away with 401 before the path id is
//!    parsed.
//!
//! ```ignore
//! async fn delete_user(
//!     principal: CurrentPrincipal,
//!     id: Result<ValidatedPath<i64>, AppError>,
//! ) -> Result<StatusCode, AppError> {
//!     principal.require()?;
//!     let ValidatedPath(id) = id?;
//!     principal.authorize(id, Capability::AdminOnly)?;
//!     // ...
//! }
//! ```

pub mod auth;
