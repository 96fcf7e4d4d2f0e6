use axum::extract::State;
use tracing::instrument;

use rollcall_core::{AppError, ApiResponse};

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    ImportSummary, ImportTeachersRequest, LinkTeacherRequest, LinkTeacherResponse,
    SemesterTeacherRequest, TeacherListRequest, TeacherListResponse, TeacherRecordRequest,
    TeacherRecordResponse,
};
use super::service::{RosterService, TeacherLink};

/// Link a teacher, school and classroom into a semester
#[utoipa::path(
    post,
    path = "/api/add/semester/teacher",
    request_body = LinkTeacherRequest,
    responses(
        (status = 200, description = "Teacher linked", body = LinkTeacherResponse),
        (status = 400, description = "Missing fields or invalid IDs", body = ErrorResponse),
        (status = 404, description = "Semester or school not found", body = ErrorResponse)
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn link_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LinkTeacherRequest>,
) -> Result<ApiResponse<LinkTeacherResponse>, AppError> {
    let submission = dto.clone();
    let link = TeacherLink::try_from(dto)?;
    let response = RosterService::link_teacher(&*state.store, &link).await?;

    Ok(ApiResponse::data(response)
        .with_message("Teacher successfully added to semester.")
        .with_submission(&submission))
}

/// Import every teacher of a spreadsheet view into a semester
#[utoipa::path(
    post,
    path = "/api/add/teachers",
    request_body = ImportTeachersRequest,
    responses(
        (status = 200, description = "Import finished", body = ImportSummary),
        (status = 404, description = "Semester or view not found", body = ErrorResponse),
        (status = 500, description = "Provider error; earlier teachers stay linked", body = ErrorResponse)
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn import_teachers(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ImportTeachersRequest>,
) -> Result<ApiResponse<ImportSummary>, AppError> {
    let view = dto.view.as_deref().unwrap_or(&state.default_view);
    let summary = RosterService::import_teachers(
        &*state.store,
        &*state.roster,
        &state.roster_fields,
        &dto.semester_id,
        view,
    )
    .await?;

    Ok(ApiResponse::data(summary).with_submission(&dto))
}

/// Remove a teacher from a semester
#[utoipa::path(
    delete,
    path = "/api/delete/semester/teacher",
    request_body = SemesterTeacherRequest,
    responses(
        (status = 200, description = "Teacher unlinked"),
        (status = 404, description = "Semester or teacher not found", body = ErrorResponse)
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn unlink_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SemesterTeacherRequest>,
) -> Result<ApiResponse<()>, AppError> {
    RosterService::unlink_teacher(&*state.store, &dto.semester_id, &dto.teacher_id).await?;
    Ok(ApiResponse::message("Teacher successfully removed from semester.").with_submission(&dto))
}

/// Get a teacher's spreadsheet record
#[utoipa::path(
    post,
    path = "/api/get/teacher",
    request_body = TeacherRecordRequest,
    responses(
        (status = 200, description = "Spreadsheet record", body = TeacherRecordResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TeacherRecordRequest>,
) -> Result<ApiResponse<TeacherRecordResponse>, AppError> {
    let teacher = RosterService::find_teacher(&*state.roster, &dto.teacher_id).await?;
    Ok(ApiResponse::data(TeacherRecordResponse { teacher }))
}

/// List the spreadsheet records of a view
#[utoipa::path(
    post,
    path = "/api/get/teachers",
    request_body = TeacherListRequest,
    responses(
        (status = 200, description = "Spreadsheet records", body = TeacherListResponse),
        (status = 404, description = "View not found", body = ErrorResponse)
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn list_teachers(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TeacherListRequest>,
) -> Result<ApiResponse<TeacherListResponse>, AppError> {
    let view = dto.view.as_deref().unwrap_or(&state.default_view);
    let teacher_list = RosterService::list_teachers(&*state.roster, view).await?;
    Ok(ApiResponse::data(TeacherListResponse { teacher_list }))
}
