//! # Usergate Core
//!
//! Core types shared by every Usergate crate:
//!
//! - [`errors`]: the error taxonomy and its HTTP translation
//! - [`password`]: bcrypt password hashing and verification
//! - [`store`]: the error type returned by storage collaborators
//!
//! # Example
//!
//! ```ignore
//! use usergate_core::{AppError, hash_password};
//!
//! let hash = hash_password("secret")?;
//! return Err(AppError::forbidden("Access denied"));
//! ```

pub mod errors;
pub mod password;
pub mod store;

pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, verify_password};
pub use store::StoreError;
