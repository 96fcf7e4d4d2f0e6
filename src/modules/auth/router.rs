use axum::{
    Router,
    routing::{delete, post},
};

use crate::state::AppState;

use super::controller::{
    current_user, delete_current_user, is_admin, login, logout, register, reset_password,
};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/reset", post(reset_password))
        .route("/currentUser", post(current_user).get(current_user))
        .route("/is_admin", post(is_admin).get(is_admin))
}

/// Mounted under `/api/delete`.
pub fn init_auth_delete_router() -> Router<AppState> {
    Router::new().route("/user/currentUser", delete(delete_current_user))
}
