use crate::modules::users::controller::{create_user, delete_user, get_user, update_user};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/{id}", get(get_user).patch(update_user).delete(delete_user))
}
