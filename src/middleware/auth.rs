use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header, request::Parts},
    middleware::Next,
    response::Response,
};
use usergate_auth::{Capability, Principal, authorize};
use usergate_core::AppError;

use crate::state::AppState;

/// Authentication gate applied to every route.
///
/// Requests without an `Authorization` header pass through anonymously.
/// A header that is not a decodable bearer token ends the request with
/// 401. Otherwise the caller's current roles are resolved and the
/// resulting [`Principal`] is attached to the request.
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/users", init_users_router())
///     .layer(middleware::from_fn_with_state(state.clone(), authenticate));
/// ```
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = match req.headers().get(header::AUTHORIZATION) {
        None => return Ok(next.run(req).await),
        Some(value) => {
            let token = bearer_token(value).inspect_err(|e| {
                tracing::warn!(reason = %e.error, "rejected authorization header");
            })?;
            state.tokens.decode(token).inspect_err(|e| {
                tracing::warn!(reason = %e.error, "rejected bearer token");
            })?
        }
    };

    let principal = state.identity.resolve_principal(user_id).await?;
    tracing::debug!(user_id, roles = ?principal.roles, "request authenticated");

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

/// Extracts the token from a `Bearer <token>` header value.
pub fn bearer_token(value: &HeaderValue) -> Result<&str, AppError> {
    let value = value
        .to_str()
        .map_err(|_| AppError::token_invalid("Invalid authorization header"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::token_invalid("Invalid authorization header format"))?
        .trim();

    if token.is_empty() {
        return Err(AppError::token_invalid("Missing bearer token"));
    }

    Ok(token)
}

/// The principal attached by [`authenticate`], if any.
///
/// Never rejects: anonymous requests get `CurrentPrincipal(None)` and the
/// handler decides what that means through [`CurrentPrincipal::authorize`].
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Option<Principal>);

impl CurrentPrincipal {
    /// Fails with 401 when the request carried no credential.
    pub fn require(&self) -> Result<&Principal, AppError> {
        self.0
            .as_ref()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }

    pub fn authorize(&self, target_id: i64, capability: Capability) -> Result<(), AppError> {
        let decision = authorize(self.0.as_ref(), target_id, capability);
        if !decision.allowed {
            tracing::warn!(
                user_id = ?self.0.as_ref().map(|p| p.user_id),
                target_id,
                ?capability,
                reason = ?decision.reason,
                "authorization denied"
            );
        }
        decision.into_result()
    }
}

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentPrincipal(parts.extensions.get::<Principal>().cloned()))
    }
}
