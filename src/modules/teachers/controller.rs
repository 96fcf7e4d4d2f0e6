use axum::extract::State;
use tracing::instrument;

use rollcall_core::{AppError, ApiResponse};
use rollcall_models::Teacher;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateTeacherRequest, TeacherIdRequest};
use super::service::TeacherService;

/// Create or replace a teacher document
#[utoipa::path(
    post,
    path = "/api/add/teacher",
    request_body = CreateTeacherRequest,
    responses(
        (status = 200, description = "Teacher written", body = Teacher),
        (status = 400, description = "Missing fields or invalid ID", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherRequest>,
) -> Result<ApiResponse<Teacher>, AppError> {
    let submission = dto.clone();
    let teacher = TeacherService::create_teacher(&*state.store, dto).await?;
    Ok(ApiResponse::data(teacher).with_submission(&submission))
}

/// Delete a teacher document
#[utoipa::path(
    delete,
    path = "/api/delete/teacher",
    request_body = TeacherIdRequest,
    responses(
        (status = 200, description = "Teacher removed"),
        (status = 400, description = "Missing teacher_id", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TeacherIdRequest>,
) -> Result<ApiResponse<()>, AppError> {
    TeacherService::delete_teacher(&*state.store, &dto.teacher_id).await?;
    Ok(ApiResponse::message("Teacher successfully removed.").with_submission(&dto))
}
