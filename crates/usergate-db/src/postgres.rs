use async_trait::async_trait;
use sqlx::PgPool;
use usergate_auth::RoleStore;
use usergate_core::StoreError;
use usergate_models::{NewUser, User};

use crate::store::UserStore;

/// PostgreSQL-backed user and role store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error, email: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return StoreError::DuplicateEmail(email.to_string());
    }
    StoreError::backend(err)
}

#[async_trait]
impl UserStore for PgStore {
    async fn find(&self, id: i64) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, deleted
            FROM users
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, deleted
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, deleted
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &user.email))
    }

    async fn save(&self, user: &User) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, password_hash = $3, updated_at = NOW()
            WHERE id = $1 AND deleted = FALSE
            RETURNING id, name, email, password_hash, deleted
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl RoleStore for PgStore {
    async fn user_roles(&self, user_id: i64) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM user_roles WHERE user_id = $1 ORDER BY name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn assign_role(&self, user_id: i64, role: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, name)
            VALUES ($1, $2)
            ON CONFLICT (user_id, name) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(role)
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        tracing::debug!(user_id, role, "role assigned");
        Ok(())
    }

    async fn revoke_role(&self, user_id: i64, role: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND name = $2")
            .bind(user_id)
            .bind(role)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        tracing::debug!(user_id, role, "role revoked");
        Ok(())
    }
}
