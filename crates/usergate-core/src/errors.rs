//! Application error type and its HTTP translation.
//!
//! Every failure that can reach a client is an [`AppError`] tagged with an
//! [`ErrorKind`]. The kind alone decides the response status; the wrapped
//! [`anyhow::Error`] carries the client-facing message (or, for
//! [`ErrorKind::Internal`], detail that is logged and never returned).

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failure taxonomy of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bearer token failed signature, structure or expiry checks.
    TokenInvalid,
    /// No usable principal where one is required.
    Unauthenticated,
    /// Principal present but lacking ownership or role.
    Forbidden,
    /// Target id has no backing record.
    ResourceNotFound,
    /// Request body failed parsing or field validation.
    ValidationFailed,
    /// Credentials presented to the session endpoint were rejected.
    LoginFailed,
    /// Anything else: collaborator failures, encoding bugs.
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::TokenInvalid | ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::ResourceNotFound => StatusCode::NOT_FOUND,
            ErrorKind::ValidationFailed | ErrorKind::LoginFailed => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, Error::msg(message.into()))
    }

    pub fn token_invalid(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::TokenInvalid, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Unauthenticated, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::ResourceNotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::ValidationFailed, message)
    }

    pub fn login_failed(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::LoginFailed, message)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self.kind {
            ErrorKind::Internal => {
                tracing::error!(error = ?self.error, "internal error");
                "Internal server error".to_string()
            }
            _ => self.error.to_string(),
        };

        let body = Json(json!({
            "error": message
        }));

        (self.kind.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
