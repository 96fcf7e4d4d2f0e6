use axum::extract::State;
use tracing::instrument;

use rollcall_core::{AppError, ApiResponse};
use rollcall_models::Semester;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    CreateSemesterRequest, SemesterIdRequest, SemesterStudentRequest, SemesterStudentsResponse,
};
use super::service::SemesterService;

/// Create or replace a semester
#[utoipa::path(
    post,
    path = "/api/add/semester",
    request_body = CreateSemesterRequest,
    responses(
        (status = 200, description = "Semester written", body = Semester),
        (status = 400, description = "Missing fields or malformed dates", body = ErrorResponse)
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn create_semester(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSemesterRequest>,
) -> Result<ApiResponse<Semester>, AppError> {
    let semester = SemesterService::create_semester(&*state.store, &dto).await?;
    Ok(ApiResponse::data(semester).with_submission(&dto))
}

/// Get a semester
#[utoipa::path(
    post,
    path = "/api/get/semester",
    request_body = SemesterIdRequest,
    responses(
        (status = 200, description = "Semester", body = Semester),
        (status = 404, description = "Semester not found", body = ErrorResponse)
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn get_semester(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SemesterIdRequest>,
) -> Result<ApiResponse<Semester>, AppError> {
    let semester = SemesterService::get_semester(&*state.store, &dto.semester_id).await?;
    Ok(ApiResponse::data(semester))
}

/// List every semester
#[utoipa::path(
    get,
    path = "/api/get/semesters",
    responses(
        (status = 200, description = "All semesters", body = Vec<Semester>)
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn list_semesters(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Semester>>, AppError> {
    let semesters = SemesterService::list_semesters(&*state.store).await?;
    Ok(ApiResponse::data(semesters))
}

/// Delete a semester document
#[utoipa::path(
    delete,
    path = "/api/delete/semester",
    request_body = SemesterIdRequest,
    responses(
        (status = 200, description = "Semester removed"),
        (status = 400, description = "Missing semester_id", body = ErrorResponse)
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn delete_semester(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SemesterIdRequest>,
) -> Result<ApiResponse<()>, AppError> {
    SemesterService::delete_semester(&*state.store, &dto.semester_id).await?;
    Ok(ApiResponse::message("Semester successfully removed.").with_submission(&dto))
}

/// Enroll a student in a semester
#[utoipa::path(
    post,
    path = "/api/add/semester/student",
    request_body = SemesterStudentRequest,
    responses(
        (status = 200, description = "Student linked"),
        (status = 404, description = "Semester or user not found", body = ErrorResponse)
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn add_semester_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SemesterStudentRequest>,
) -> Result<ApiResponse<()>, AppError> {
    SemesterService::add_student(&*state.store, &dto).await?;
    Ok(ApiResponse::message("Student successfully added to semester.").with_submission(&dto))
}

/// Remove a student from a semester
#[utoipa::path(
    delete,
    path = "/api/delete/semester/student",
    request_body = SemesterStudentRequest,
    responses(
        (status = 200, description = "Student unlinked"),
        (status = 404, description = "Semester or user not found", body = ErrorResponse)
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn remove_semester_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SemesterStudentRequest>,
) -> Result<ApiResponse<()>, AppError> {
    SemesterService::remove_student(&*state.store, &dto).await?;
    Ok(ApiResponse::message("Student successfully removed from semester.").with_submission(&dto))
}

/// Profiles of a semester's students
#[utoipa::path(
    post,
    path = "/api/get/users",
    request_body = SemesterIdRequest,
    responses(
        (status = 200, description = "Semester students", body = SemesterStudentsResponse),
        (status = 404, description = "Semester not found", body = ErrorResponse)
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn semester_students(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SemesterIdRequest>,
) -> Result<ApiResponse<SemesterStudentsResponse>, AppError> {
    let response = SemesterService::semester_students(&*state.store, &dto.semester_id).await?;
    Ok(ApiResponse::data(response))
}
