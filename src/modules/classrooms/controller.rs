use axum::extract::State;
use tracing::instrument;

use rollcall_core::{AppError, ApiResponse};
use rollcall_models::Classroom;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    ClassroomIdRequest, ClassroomIdResponse, ClassroomStudentRequest, CreateClassroomRequest,
};
use super::service::ClassroomService;

/// Create a classroom for a semester and teacher
#[utoipa::path(
    post,
    path = "/api/add/classroom",
    request_body = CreateClassroomRequest,
    responses(
        (status = 200, description = "Classroom written", body = ClassroomIdResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn create_classroom(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassroomRequest>,
) -> Result<ApiResponse<ClassroomIdResponse>, AppError> {
    let classroom_id = ClassroomService::create_classroom(&*state.store, &dto).await?;
    Ok(ApiResponse::data(ClassroomIdResponse { classroom_id }).with_submission(&dto))
}

/// Add a student to a classroom
#[utoipa::path(
    post,
    path = "/api/add/classroom/student",
    request_body = ClassroomStudentRequest,
    responses(
        (status = 200, description = "Student added"),
        (status = 404, description = "Classroom or user not found", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn add_classroom_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ClassroomStudentRequest>,
) -> Result<ApiResponse<()>, AppError> {
    ClassroomService::add_student(&*state.store, &dto).await?;
    Ok(ApiResponse::message("Student successfully added to classroom.").with_submission(&dto))
}

/// Get a classroom
#[utoipa::path(
    post,
    path = "/api/get/classroom",
    request_body = ClassroomIdRequest,
    responses(
        (status = 200, description = "Classroom", body = Classroom),
        (status = 404, description = "Classroom not found", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_classroom(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ClassroomIdRequest>,
) -> Result<ApiResponse<Classroom>, AppError> {
    let classroom = ClassroomService::get_classroom(&*state.store, &dto.classroom_id).await?;
    Ok(ApiResponse::data(classroom))
}

/// Delete a classroom document
#[utoipa::path(
    delete,
    path = "/api/delete/classroom",
    request_body = ClassroomIdRequest,
    responses(
        (status = 200, description = "Classroom removed"),
        (status = 400, description = "Missing classroom_id", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn delete_classroom(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ClassroomIdRequest>,
) -> Result<ApiResponse<()>, AppError> {
    ClassroomService::delete_classroom(&*state.store, &dto.classroom_id).await?;
    Ok(ApiResponse::message("Classroom successfully removed.").with_submission(&dto))
}
