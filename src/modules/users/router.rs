use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_user, get_user, teacher_students};

pub fn init_users_add_router() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

pub fn init_users_get_router() -> Router<AppState> {
    Router::new()
        .route("/user", get(get_user).post(get_user))
        .route(
            "/teacher_students",
            get(teacher_students).post(teacher_students),
        )
}
