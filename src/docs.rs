use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::session::controller::ErrorResponse;
use usergate_models::{CreateUserDto, LoginDto, SessionResponse, UpdateUserDto, UserResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::session::controller::create_session,
        crate::modules::health::controller::health_check,
    ),
    components(
        schemas(
            CreateUserDto,
            UpdateUserDto,
            UserResponse,
            LoginDto,
            SessionResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User registration and profile management"),
        (name = "Session", description = "Login and token issuance"),
        (name = "Health", description = "Service liveness")
    ),
    info(
        title = "Usergate API",
        version = "0.1.0",
        description = "User management API with bearer-token authentication and per-request role resolution.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
