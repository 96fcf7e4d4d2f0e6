use async_trait::async_trait;

use crate::{Account, AccountRecord, IdentityError};

/// Account operations the route handlers need from the identity service.
///
/// The first three mirror the password-based client API; the rest require
/// admin credentials.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fails with [`IdentityError::EmailExists`] when the email is taken.
    async fn create_account(&self, email: &str, password: &str) -> Result<Account, IdentityError>;

    /// Fails with [`IdentityError::InvalidCredential`] on unknown email or wrong password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Account, IdentityError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError>;

    /// `None` when no account has this UID.
    async fn lookup(&self, uid: &str) -> Result<Option<AccountRecord>, IdentityError>;

    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError>;

    /// Invalidates refresh tokens issued before now.
    async fn revoke_sessions(&self, uid: &str) -> Result<(), IdentityError>;
}
