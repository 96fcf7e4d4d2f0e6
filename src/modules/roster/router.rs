use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{get_teacher, import_teachers, link_teacher, list_teachers, unlink_teacher};

pub fn init_roster_add_router() -> Router<AppState> {
    Router::new()
        .route("/semester/teacher", post(link_teacher))
        .route("/teachers", post(import_teachers))
}

pub fn init_roster_get_router() -> Router<AppState> {
    Router::new()
        .route("/teacher", get(get_teacher).post(get_teacher))
        .route("/teachers", get(list_teachers).post(list_teachers))
}

pub fn init_roster_delete_router() -> Router<AppState> {
    Router::new().route(
        "/semester/teacher",
        delete(unlink_teacher).post(unlink_teacher),
    )
}
