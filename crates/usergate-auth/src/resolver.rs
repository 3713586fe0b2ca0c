//! Role resolution for decoded identities.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use usergate_core::StoreError;

use crate::principal::Principal;

/// Read/write access to user role assignments.
///
/// Implementations must be safe for concurrent use; the authentication gate
/// calls [`RoleStore::user_roles`] once per authenticated request.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Current role names of `user_id`. Unknown users have no roles.
    async fn user_roles(&self, user_id: i64) -> Result<Vec<String>, StoreError>;

    /// Grants `role` to `user_id`. Granting a role twice is a no-op.
    async fn assign_role(&self, user_id: i64, role: &str) -> Result<(), StoreError>;

    /// Withdraws `role` from `user_id`. Withdrawing a missing role is a no-op.
    async fn revoke_role(&self, user_id: i64, role: &str) -> Result<(), StoreError>;
}

/// Turns a decoded user id into a [`Principal`] with its current roles.
///
/// Roles are never cached: every call hits the [`RoleStore`], so promotions
/// and revocations apply to the next request.
#[derive(Clone)]
pub struct IdentityResolver {
    roles: Arc<dyn RoleStore>,
}

impl IdentityResolver {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    pub async fn resolve(&self, user_id: i64) -> Result<BTreeSet<String>, StoreError> {
        Ok(self.roles.user_roles(user_id).await?.into_iter().collect())
    }

    pub async fn resolve_principal(&self, user_id: i64) -> Result<Principal, StoreError> {
        let roles = self.resolve(user_id).await?;
        Ok(Principal { user_id, roles })
    }
}
