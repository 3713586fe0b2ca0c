//! In-process user and role storage.
//!
//! Used by the test suite and by `usergate` when no `DATABASE_URL` is
//! configured. Data lives for the lifetime of the process.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use usergate_auth::RoleStore;
use usergate_core::StoreError;
use usergate_models::{NewUser, User};

use crate::store::UserStore;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    roles: BTreeMap<i64, BTreeSet<String>>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `user` under its own id, replacing any existing record.
    pub async fn insert(&self, user: User) {
        let mut inner = self.inner.write().await;
        inner.last_id = inner.last_id.max(user.id);
        inner.users.insert(user.id, user);
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).filter(|u| !u.deleted).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        inner.last_id += 1;
        let created = User {
            id: inner.last_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            deleted: false,
        };
        inner.users.insert(created.id, created.clone());

        Ok(created)
    }

    async fn save(&self, user: &User) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.write().await;

        match inner.users.get_mut(&user.id) {
            Some(existing) if !existing.deleted => {
                existing.name = user.name.clone();
                existing.password_hash = user.password_hash.clone();
                Ok(Some(existing.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;

        match inner.users.get_mut(&id) {
            Some(existing) if !existing.deleted => {
                existing.deleted = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl RoleStore for InMemoryStore {
    async fn user_roles(&self, user_id: i64) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .roles
            .get(&user_id)
            .map(|roles| roles.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn assign_role(&self, user_id: i64, role: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .roles
            .entry(user_id)
            .or_default()
            .insert(role.to_string());
        Ok(())
    }

    async fn revoke_role(&self, user_id: i64, role: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(roles) = inner.roles.get_mut(&user_id) {
            roles.remove(role);
        }
        Ok(())
    }
}
