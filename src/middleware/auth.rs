use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use rollcall_auth::AccountRecord;
use rollcall_core::AppError;

use crate::state::AppState;

pub const NOT_LOGGED_IN: &str = "You are not logged in!";

/// The caller identified by `Authorization: Bearer <uid>`.
///
/// The UID handed out by register and login is looked up with the identity
/// provider's admin API; unknown and disabled accounts are rejected.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AccountRecord);

impl AuthUser {
    pub fn uid(&self) -> &str {
        &self.0.uid
    }

    pub fn email(&self) -> &str {
        self.0.email.as_deref().unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }
}

fn not_logged_in() -> AppError {
    AppError::unauthorized(anyhow!(NOT_LOGGED_IN))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty() && !token.contains('/'))
            .ok_or_else(not_logged_in)?;

        let record = state
            .identity
            .lookup(token)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| {
                debug!("Bearer token does not match an account");
                not_logged_in()
            })?;

        if record.disabled {
            debug!(user.id = %record.uid, "Rejected disabled account");
            return Err(not_logged_in());
        }

        Ok(AuthUser(record))
    }
}
