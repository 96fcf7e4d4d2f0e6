use rollcall_core::AppError;

/// Message returned for duplicate registrations.
pub const EMAIL_EXISTS_MESSAGE: &str =
    "Bad request. Check if the user account exists already, or check server connection.";

/// Error type for identity provider operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("The email address is already in use by another account")]
    EmailExists,

    #[error("Incorrect credentials. Try again.")]
    InvalidCredential,

    #[error("There is no account for this email address")]
    EmailNotFound,

    #[error("The user account has been disabled")]
    UserDisabled,

    #[error("No account exists for uid {0}")]
    AccountNotFound(String),

    #[error("Weak password: {0}")]
    WeakPassword(String),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Identity provider credentials error: {0}")]
    Credentials(#[from] TokenError),

    #[error("Identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Identity provider error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::EmailExists => {
                AppError::conflict(anyhow::anyhow!(EMAIL_EXISTS_MESSAGE))
            }
            IdentityError::InvalidCredential | IdentityError::UserDisabled => {
                AppError::unauthorized(err)
            }
            IdentityError::EmailNotFound | IdentityError::AccountNotFound(_) => {
                AppError::not_found(err)
            }
            IdentityError::WeakPassword(_) | IdentityError::InvalidEmail => {
                AppError::bad_request(err)
            }
            IdentityError::Credentials(_)
            | IdentityError::Transport(_)
            | IdentityError::Api { .. } => AppError::internal(err),
        }
    }
}

/// Error type for OAuth access token acquisition.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid service account key: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),

    #[error("Token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Token endpoint rejected the assertion ({status}): {body}")]
    Rejected { status: u16, body: String },
}
