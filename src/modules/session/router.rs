use crate::modules::session::controller::create_session;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_session_router() -> Router<AppState> {
    Router::new().route("/", post(create_session))
}
