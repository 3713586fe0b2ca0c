//! User data models and DTOs.
//!
//! - [`User`]: the stored record, including the password hash
//! - [`NewUser`]: a record about to be inserted (no id yet)
//! - [`CreateUserDto`] / [`UpdateUserDto`]: validated request bodies
//! - [`UserResponse`]: what clients see; never carries the password hash

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use usergate_core::{AppError, verify_password};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::not_blank;

/// A user record as held by the user store.
///
/// Deleted users are kept with `deleted = true` so their email stays taken.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub deleted: bool,
}

impl User {
    /// Checks `password` against the stored hash.
    pub fn authenticate(&self, password: &str) -> Result<bool, AppError> {
        if self.deleted {
            return Ok(false);
        }
        verify_password(password, &self.password_hash)
    }

    pub fn change_profile(&mut self, name: String, password_hash: String) {
        self.name = name;
        self.password_hash = password_hash;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Registration body for `POST /users`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    #[validate(length(min = 4, max = 1024, message = "password must be 4 to 1024 characters"))]
    pub password: String,
}

/// Profile update body for `PATCH /users/{id}`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    #[validate(length(min = 4, max = 1024, message = "password must be 4 to 1024 characters"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}
