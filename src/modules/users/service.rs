use anyhow::Context;
use usergate_auth::{ROLE_USER, RoleStore};
use usergate_core::{AppError, StoreError, hash_password};
use usergate_db::UserStore;
use usergate_models::{CreateUserDto, NewUser, UpdateUserDto, User};

/// Returned when an update targets an id with no active user. It reads the
/// same as an ownership denial so callers cannot probe which ids exist.
const UPDATE_DENIED: &str = "Access denied. You can only act on your own account";

pub struct UserService;

impl UserService {
    pub async fn register(
        users: &dyn UserStore,
        roles: &dyn RoleStore,
        dto: CreateUserDto,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let user = users
            .create(NewUser {
                name: dto.name,
                email: dto.email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateEmail(email) => {
                    AppError::bad_request(format!("Email {} is already registered", email))
                }
                other => {
                    AppError::internal(anyhow::Error::new(other).context("Failed to insert user"))
                }
            })?;

        roles
            .assign_role(user.id, ROLE_USER)
            .await
            .context("Failed to assign default role")?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    pub async fn get_user(users: &dyn UserStore, id: i64) -> Result<User, AppError> {
        users
            .find(id)
            .await
            .context("Failed to fetch user by ID")?
            .ok_or_else(|| AppError::not_found(format!("User with id {} not found", id)))
    }

    /// Replaces name and password of user `id`. Callers must have
    /// authorized the request already.
    pub async fn update_user(
        users: &dyn UserStore,
        id: i64,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let mut user = users
            .find(id)
            .await
            .context("Failed to fetch user by ID")?
            .ok_or_else(|| AppError::forbidden(UPDATE_DENIED))?;

        let password_hash = hash_password(&dto.password)?;
        user.change_profile(dto.name, password_hash);

        let updated = users
            .save(&user)
            .await
            .context("Failed to update user")?
            .ok_or_else(|| AppError::forbidden(UPDATE_DENIED))?;

        tracing::info!(user_id = id, "user updated");
        Ok(updated)
    }

    pub async fn delete_user(users: &dyn UserStore, id: i64) -> Result<(), AppError> {
        let deleted = users.delete(id).await.context("Failed to delete user")?;

        if !deleted {
            return Err(AppError::not_found(format!("User with id {} not found", id)));
        }

        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}
