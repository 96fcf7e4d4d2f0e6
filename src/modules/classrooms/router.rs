use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{add_classroom_student, create_classroom, delete_classroom, get_classroom};

pub fn init_classrooms_add_router() -> Router<AppState> {
    Router::new()
        .route("/classroom", post(create_classroom))
        .route("/classroom/student", post(add_classroom_student))
}

pub fn init_classrooms_get_router() -> Router<AppState> {
    Router::new().route("/classroom", get(get_classroom).post(get_classroom))
}

pub fn init_classrooms_delete_router() -> Router<AppState> {
    Router::new().route("/classroom", delete(delete_classroom))
}
