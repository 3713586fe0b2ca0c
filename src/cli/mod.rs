use anyhow::{Context, bail};
use usergate_auth::{ROLE_ADMIN, ROLE_USER, RoleStore};
use usergate_core::{StoreError, hash_password};
use usergate_db::UserStore;
use usergate_models::{NewUser, User};

/// Creates a user holding both `USER` and `ADMIN`.
pub async fn create_admin(
    users: &dyn UserStore,
    roles: &dyn RoleStore,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    if name.trim().is_empty() || email.trim().is_empty() {
        bail!("Name and email are required");
    }
    if password.len() < 4 {
        bail!("Password must be at least 4 characters");
    }

    let password_hash = hash_password(password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.error))?;

    let user = users
        .create(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail(_) => {
                anyhow::anyhow!("User with this email already exists")
            }
            other => anyhow::Error::new(other).context("Failed to insert user"),
        })?;

    for role in [ROLE_USER, ROLE_ADMIN] {
        roles
            .assign_role(user.id, role)
            .await
            .with_context(|| format!("Failed to assign role {}", role))?;
    }

    Ok(user)
}
