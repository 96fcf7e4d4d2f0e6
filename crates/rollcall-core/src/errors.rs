use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::response::ResponseStatus;

/// Message returned in place of provider details on sensitive endpoints.
pub const MASKED_MESSAGE: &str = "Internal server error.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    /// When set, rendered instead of `error` so provider details stay in the logs.
    pub public_message: Option<String>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            public_message: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// Pre-existing resources are reported as 400, the same as other caller mistakes.
    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// Missing required fields, listed in the order they were declared.
    pub fn missing_fields(fields: &[&str]) -> Self {
        let noun = if fields.len() == 1 { "field" } else { "fields" };
        Self::bad_request(anyhow::anyhow!(
            "Missing required {}: {}.",
            noun,
            fields.join(", ")
        ))
    }

    /// Hides the message of server errors behind [`MASKED_MESSAGE`].
    pub fn masked(mut self) -> Self {
        if self.status.is_server_error() {
            self.public_message = Some(MASKED_MESSAGE.to_string());
        }
        self
    }

    pub fn message(&self) -> String {
        self.public_message
            .clone()
            .unwrap_or_else(|| self.error.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = %self.error, "Request failed");
        }

        let body = Json(json!({
            "status": ResponseStatus::Error,
            "message": self.message(),
        }));

        (self.status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let (status, body) = body_json(AppError::not_found(anyhow::anyhow!("Classroom not found"))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Classroom not found");
    }

    #[tokio::test]
    async fn test_masked_hides_server_error_details() {
        let error = AppError::internal(anyhow::anyhow!("PERMISSION_DENIED: missing scope")).masked();
        let (status, body) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], MASKED_MESSAGE);
    }

    #[test]
    fn test_masked_keeps_client_errors() {
        let error = AppError::not_found(anyhow::anyhow!("User not found.")).masked();
        assert_eq!(error.message(), "User not found.");
    }

    #[test]
    fn test_missing_fields_message() {
        let one = AppError::missing_fields(&["semester_id"]);
        assert_eq!(one.status, StatusCode::BAD_REQUEST);
        assert_eq!(one.message(), "Missing required field: semester_id.");

        let many = AppError::missing_fields(&["semester_id", "teacher_id"]);
        assert_eq!(
            many.message(),
            "Missing required fields: semester_id, teacher_id."
        );
    }

    #[test]
    fn test_conflict_is_bad_request() {
        assert_eq!(
            AppError::conflict(anyhow::anyhow!("exists")).status,
            StatusCode::BAD_REQUEST
        );
    }
}
