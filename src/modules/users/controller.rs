use axum::extract::State;
use tracing::instrument;

use rollcall_core::{AppError, ApiResponse};
use rollcall_models::{User, UserSummary};

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateUserRequest, UserIdRequest};
use super::service::UserService;

/// Create or replace a user profile
#[utoipa::path(
    post,
    path = "/api/add/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Profile written", body = User),
        (status = 400, description = "Missing fields or invalid ID", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserRequest>,
) -> Result<ApiResponse<User>, AppError> {
    let user = UserService::create_user(&*state.store, &dto).await?;
    Ok(ApiResponse::data(user).with_submission(&dto))
}

/// Get a user profile
#[utoipa::path(
    post,
    path = "/api/get/user",
    request_body = UserIdRequest,
    responses(
        (status = 200, description = "Profile", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error.", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UserIdRequest>,
) -> Result<ApiResponse<User>, AppError> {
    let user = UserService::get_user(&*state.store, &dto.user_id).await?;
    Ok(ApiResponse::data(user))
}

/// Every user profile
#[utoipa::path(
    get,
    path = "/api/get/teacher_students",
    responses(
        (status = 200, description = "All profiles", body = Vec<UserSummary>)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn teacher_students(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<UserSummary>>, AppError> {
    let users = UserService::list_users(&*state.store).await?;
    Ok(ApiResponse::data(users))
}
