use crate::middleware::auth::CurrentPrincipal;
use crate::modules::session::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use usergate_auth::Capability;
use usergate_core::AppError;
use usergate_models::{CreateUserDto, UpdateUserDto, UserResponse};

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid body or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = UserService::register(state.users.as_ref(), state.roles.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Get a user profile (owner or admin)
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, principal, id))]
pub async fn get_user(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    id: Result<ValidatedPath<i64>, AppError>,
) -> Result<Json<UserResponse>, AppError> {
    principal.require()?;
    let ValidatedPath(id) = id?;
    principal.authorize(id, Capability::SelfOrAdmin)?;

    let user = UserService::get_user(state.users.as_ref(), id).await?;
    Ok(Json(user.into()))
}

/// Update your own name and password
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid body or malformed user id", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, principal, id, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    id: Result<ValidatedPath<i64>, AppError>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<UserResponse>, AppError> {
    principal.require()?;
    let ValidatedPath(id) = id?;
    principal.authorize(id, Capability::SelfOnly)?;

    let user = UserService::update_user(state.users.as_ref(), id, dto).await?;
    Ok(Json(user.into()))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - administrator role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, principal, id))]
pub async fn delete_user(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    id: Result<ValidatedPath<i64>, AppError>,
) -> Result<StatusCode, AppError> {
    principal.require()?;
    let ValidatedPath(id) = id?;
    principal.authorize(id, Capability::AdminOnly)?;

    UserService::delete_user(state.users.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
