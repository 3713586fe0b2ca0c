use crate::modules::session::service::SessionService;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use usergate_core::AppError;
use usergate_models::{LoginDto, SessionResponse};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/session",
    request_body = LoginDto,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 400, description = "Invalid body or credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Session"
)]
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let access_token = SessionService::login(state.users.as_ref(), &state.tokens, dto).await?;
    Ok((StatusCode::CREATED, Json(SessionResponse { access_token })))
}
