use axum::extract::State;
use tracing::instrument;

use rollcall_core::{AppError, ApiResponse};
use rollcall_models::School;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::semesters::model::SemesterIdRequest;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{AddSemesterSchoolRequest, SchoolIdRequest, SchoolIdResponse};
use super::service::SchoolService;

/// Add a school to a semester
#[utoipa::path(
    post,
    path = "/api/add/semester/schools",
    request_body = AddSemesterSchoolRequest,
    responses(
        (status = 200, description = "School linked; ID derived from the address", body = SchoolIdResponse),
        (status = 404, description = "Semester not found", body = ErrorResponse)
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn add_semester_school(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AddSemesterSchoolRequest>,
) -> Result<ApiResponse<SchoolIdResponse>, AppError> {
    let school_id = SchoolService::add_semester_school(&*state.store, &dto).await?;
    Ok(ApiResponse::data(SchoolIdResponse { school_id }).with_submission(&dto))
}

/// Schools of a semester
#[utoipa::path(
    post,
    path = "/api/get/semester/schools",
    request_body = SemesterIdRequest,
    responses(
        (status = 200, description = "Semester schools", body = Vec<School>),
        (status = 404, description = "Semester not found", body = ErrorResponse)
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn semester_schools(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SemesterIdRequest>,
) -> Result<ApiResponse<Vec<School>>, AppError> {
    let schools = SchoolService::semester_schools(&*state.store, &dto.semester_id).await?;
    Ok(ApiResponse::data(schools))
}

/// Get a school
#[utoipa::path(
    post,
    path = "/api/get/school",
    request_body = SchoolIdRequest,
    responses(
        (status = 200, description = "School", body = School),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn get_school(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SchoolIdRequest>,
) -> Result<ApiResponse<School>, AppError> {
    let school = SchoolService::get_school(&*state.store, &dto.school_id).await?;
    Ok(ApiResponse::data(school))
}
