use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    add_semester_student, create_semester, delete_semester, get_semester, list_semesters,
    remove_semester_student, semester_students,
};

pub fn init_semesters_add_router() -> Router<AppState> {
    Router::new()
        .route("/semester", post(create_semester))
        .route("/semester/student", post(add_semester_student))
}

pub fn init_semesters_get_router() -> Router<AppState> {
    Router::new()
        .route("/semester", get(get_semester).post(get_semester))
        .route("/semesters", get(list_semesters).post(list_semesters))
        .route("/users", get(semester_students).post(semester_students))
}

pub fn init_semesters_delete_router() -> Router<AppState> {
    Router::new()
        .route("/semester", delete(delete_semester))
        .route("/semester/student", delete(remove_semester_student))
}
