use rollcall_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid document ID: {0}")]
    InvalidPath(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document already exists: {0}")]
    AlreadyExists(String),

    #[error("Malformed document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid Firestore endpoint: {0}")]
    Endpoint(String),

    #[error("Firestore request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Firestore returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Could not obtain Firestore credentials: {0}")]
    Credentials(#[from] rollcall_auth::TokenError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidPath(_) | StoreError::AlreadyExists(_) => AppError::bad_request(err),
            StoreError::NotFound(_) => AppError::not_found(err),
            _ => AppError::internal(err),
        }
    }
}
