use axum::{
    Router,
    routing::{delete, post},
};

use crate::state::AppState;

use super::controller::{create_teacher, delete_teacher};

pub fn init_teachers_add_router() -> Router<AppState> {
    Router::new().route("/teacher", post(create_teacher))
}

pub fn init_teachers_delete_router() -> Router<AppState> {
    Router::new().route("/teacher", delete(delete_teacher))
}
