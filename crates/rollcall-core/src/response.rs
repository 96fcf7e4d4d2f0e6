//! Response envelope shared by every route.
//!
//! Successful responses look like:
//!
//! ```text
//! { "status": "success", "message": "...", "data": { ... }, "submission": { ... } }
//! ```
//!
//! `message`, `data` and `submission` are omitted when empty. Error responses
//! are rendered by [`AppError`](crate::AppError) with `status: "error"`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Echo of the request body, as the add/delete routes return it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
            submission: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_submission<S: Serialize>(mut self, submission: &S) -> Self {
        self.submission = serde_json::to_value(submission).ok();
        self
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
            submission: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
