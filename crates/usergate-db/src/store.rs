use async_trait::async_trait;
use usergate_core::StoreError;
use usergate_models::{NewUser, User};

/// Persistence for user records.
///
/// Absence is reported as `None`/`false`, never as an error; errors are
/// reserved for backend failures and uniqueness violations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Active (not deleted) user with `id`.
    async fn find(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// User registered under `email`, deleted or not.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Inserts `user` and returns it with its assigned id.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Writes name and password hash of an active user. `None` if no active
    /// user has `user.id`.
    async fn save(&self, user: &User) -> Result<Option<User>, StoreError>;

    /// Marks the active user `id` deleted. `false` if there was none.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
