use rollcall_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("View not found: {0}")]
    ViewNotFound(String),

    #[error("Invalid Airtable endpoint: {0}")]
    Endpoint(String),

    #[error("Airtable request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Airtable returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::ViewNotFound(_) => AppError::not_found(err),
            _ => AppError::internal(err),
        }
    }
}
