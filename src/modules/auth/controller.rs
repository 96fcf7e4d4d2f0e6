use axum::extract::State;
use tracing::instrument;
use utoipa::ToSchema;

use rollcall_core::{AppError, ApiResponse};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    AuthResponse, CurrentUserResponse, IsAdminResponse, LoginRequest, RegisterRequest,
    ResetRequest,
};
use super::service::AuthService;

/// Error envelope, as rendered by `AppError`.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

/// Register a new account and its profile
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing fields or email already registered", body = ErrorResponse),
        (status = 500, description = "Identity provider error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<ApiResponse<AuthResponse>, AppError> {
    let response = AuthService::register(&*state.store, &*state.identity, dto).await?;
    Ok(ApiResponse::data(response))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; token is the account UID", body = AuthResponse),
        (status = 401, description = "Incorrect credentials", body = ErrorResponse),
        (status = 404, description = "Account has no profile document", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<AuthResponse>, AppError> {
    let response = AuthService::login(&*state.store, &*state.identity, dto).await?;
    Ok(ApiResponse::data(response))
}

/// Revoke the caller's sessions
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Sessions revoked"),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<()>, AppError> {
    AuthService::logout(&*state.identity, &auth_user).await?;
    Ok(ApiResponse::message("Logged out successfully."))
}

/// Send a password reset email
#[utoipa::path(
    post,
    path = "/api/auth/reset",
    request_body = ResetRequest,
    responses(
        (status = 200, description = "Reset email sent"),
        (status = 404, description = "No account for this email", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ResetRequest>,
) -> Result<ApiResponse<()>, AppError> {
    AuthService::send_password_reset(&*state.identity, &dto.email).await?;
    Ok(ApiResponse::message("Password reset email sent.").with_submission(&dto))
}

/// The signed-in account
#[utoipa::path(
    post,
    path = "/api/auth/currentUser",
    responses(
        (status = 200, description = "Current account", body = CurrentUserResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<CurrentUserResponse>, AppError> {
    let response = AuthService::current_user(&*state.store, &auth_user).await?;
    Ok(ApiResponse::data(response))
}

/// Whether the signed-in account carries the admin claim
#[utoipa::path(
    post,
    path = "/api/auth/is_admin",
    responses(
        (status = 200, description = "Admin flag", body = IsAdminResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument]
pub async fn is_admin(auth_user: AuthUser) -> ApiResponse<IsAdminResponse> {
    ApiResponse::data(IsAdminResponse {
        uid: auth_user.uid().to_string(),
        is_admin: auth_user.is_admin(),
    })
}

/// Delete the signed-in account and its profile
#[utoipa::path(
    delete,
    path = "/api/delete/user/currentUser",
    responses(
        (status = 200, description = "Account and profile deleted"),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Deletion failed", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<()>, AppError> {
    AuthService::delete_current_user(&*state.store, &*state.identity, &auth_user).await?;
    Ok(ApiResponse::message(format!("Deleted user {}", auth_user.uid())))
}
