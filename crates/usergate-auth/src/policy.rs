//! Per-route authorization decisions.
//!
//! Protected handlers call [`authorize`] explicitly with the request's
//! principal (if any), the user id taken from the route path, and the
//! capability the operation requires. The decision depends on those three
//! inputs only; whether the target user actually exists is checked later,
//! and only once access has been granted.

use usergate_core::AppError;

use crate::principal::Principal;

/// What an operation demands of the caller relative to the target user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Caller must be the target user.
    SelfOnly,
    /// Caller must be the target user or hold `ADMIN`.
    SelfOrAdmin,
    /// Caller must hold `ADMIN`; owning the target grants nothing.
    AdminOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    None,
    Unauthenticated,
    ForbiddenNotOwner,
    ForbiddenNotAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationDecision {
    pub allowed: bool,
    pub reason: DenialReason,
}

impl AuthorizationDecision {
    pub const ALLOW: Self = Self {
        allowed: true,
        reason: DenialReason::None,
    };

    pub fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }

    /// Converts the decision into the error the boundary responds with.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.allowed {
            return Ok(());
        }

        match self.reason {
            DenialReason::Unauthenticated => {
                Err(AppError::unauthorized("Authentication required"))
            }
            DenialReason::ForbiddenNotOwner => Err(AppError::forbidden(
                "Access denied. You can only act on your own account",
            )),
            DenialReason::ForbiddenNotAdmin => Err(AppError::forbidden(
                "Access denied. Administrator role required",
            )),
            DenialReason::None => Err(AppError::forbidden("Access denied")),
        }
    }
}

pub fn authorize(
    principal: Option<&Principal>,
    target_id: i64,
    capability: Capability,
) -> AuthorizationDecision {
    let Some(principal) = principal else {
        return AuthorizationDecision::deny(DenialReason::Unauthenticated);
    };

    let allowed = match capability {
        Capability::SelfOnly => principal.owns(target_id),
        Capability::SelfOrAdmin => principal.owns(target_id) || principal.is_admin(),
        Capability::AdminOnly => principal.is_admin(),
    };

    if allowed {
        return AuthorizationDecision::ALLOW;
    }

    match capability {
        Capability::AdminOnly => AuthorizationDecision::deny(DenialReason::ForbiddenNotAdmin),
        Capability::SelfOnly | Capability::SelfOrAdmin => {
            AuthorizationDecision::deny(DenialReason::ForbiddenNotOwner)
        }
    }
}
