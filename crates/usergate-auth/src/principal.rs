//! The authenticated identity attached to a request.

use std::collections::BTreeSet;

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

/// Identity derived from a valid bearer token for the lifetime of one request.
///
/// Built fresh by the authentication gate on every request and never
/// persisted or shared between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub roles: BTreeSet<String>,
}

impl Principal {
    pub fn new<I, R>(user_id: i64, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            user_id,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    pub fn owns(&self, target_id: i64) -> bool {
        self.user_id == target_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_deduplicated() {
        let principal = Principal::new(1, ["USER", "USER", "ADMIN"]);
        assert_eq!(principal.roles.len(), 2);
        assert!(principal.is_admin());
        assert!(principal.has_role(ROLE_USER));
    }

    #[test]
    fn test_role_match_is_exact() {
        let principal = Principal::new(1, ["admin"]);
        assert!(!principal.is_admin());
    }

    #[test]
    fn test_owns() {
        let principal = Principal::new(1, Vec::<String>::new());
        assert!(principal.owns(1));
        assert!(!principal.owns(99));
    }
}
