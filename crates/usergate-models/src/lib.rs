//! # Usergate Models
//!
//! Domain models and request/response DTOs.
//!
//! - [`users`]: the stored [`User`] record, registration and update DTOs, and
//!   the public [`UserResponse`] shape
//! - [`session`]: login request and token response
//! - [`validation`]: custom field validators shared by the DTOs

pub mod session;
pub mod users;
pub mod validation;

pub use session::{LoginDto, SessionResponse};
pub use users::{CreateUserDto, NewUser, UpdateUserDto, User, UserResponse};
