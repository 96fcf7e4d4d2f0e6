use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{add_semester_school, get_school, semester_schools};

pub fn init_schools_add_router() -> Router<AppState> {
    Router::new().route("/semester/schools", post(add_semester_school))
}

pub fn init_schools_get_router() -> Router<AppState> {
    Router::new()
        .route("/semester/schools", get(semester_schools).post(semester_schools))
        .route("/school", get(get_school).post(get_school))
}
