//! Process-local identity provider.
//!
//! Behaves like Firebase Auth for the operations the API uses: emails are
//! unique case-insensitively, passwords shorter than six characters are
//! rejected, and wrong passwords and unknown emails fail the same way.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{Account, AccountRecord, IdentityError, IdentityProvider};

const MIN_PASSWORD_LEN: usize = 6;
// Lowest cost bcrypt accepts; these hashes never leave the process.
const HASH_COST: u32 = 4;

#[derive(Debug, Clone)]
struct StoredAccount {
    record: AccountRecord,
    password_hash: String,
    revoked_at: Option<i64>,
}

#[derive(Debug, Default)]
pub struct MemoryIdentity {
    accounts: RwLock<HashMap<String, StoredAccount>>,
    reset_requests: RwLock<Vec<String>>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the `admin` custom claim.
    pub async fn set_admin(&self, uid: &str, admin: bool) -> Result<(), IdentityError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(uid)
            .ok_or_else(|| IdentityError::AccountNotFound(uid.to_string()))?;

        account
            .record
            .custom_claims
            .insert("admin".to_string(), serde_json::Value::Bool(admin));
        Ok(())
    }

    pub async fn set_disabled(&self, uid: &str, disabled: bool) -> Result<(), IdentityError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(uid)
            .ok_or_else(|| IdentityError::AccountNotFound(uid.to_string()))?;

        account.record.disabled = disabled;
        Ok(())
    }

    /// Emails that requested a password reset, oldest first.
    pub async fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.read().await.clone()
    }

    /// When the sessions of `uid` were last revoked, as a Unix timestamp.
    pub async fn revoked_at(&self, uid: &str) -> Option<i64> {
        self.accounts
            .read()
            .await
            .get(uid)
            .and_then(|account| account.revoked_at)
    }

    fn find_by_email<'a>(
        accounts: &'a HashMap<String, StoredAccount>,
        email: &str,
    ) -> Option<&'a StoredAccount> {
        let email = normalize_email(email);
        accounts
            .values()
            .find(|account| account.record.email.as_deref() == Some(email.as_str()))
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    #[instrument(skip(self, password))]
    async fn create_account(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        let normalized = normalize_email(email);
        if normalized.is_empty() || !normalized.contains('@') {
            return Err(IdentityError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(IdentityError::WeakPassword(
                "Password should be at least 6 characters".to_string(),
            ));
        }

        let mut accounts = self.accounts.write().await;
        if Self::find_by_email(&accounts, &normalized).is_some() {
            return Err(IdentityError::EmailExists);
        }

        let password_hash = bcrypt::hash(password, HASH_COST)
            .map_err(|e| IdentityError::Api {
                status: 500,
                message: e.to_string(),
            })?;

        let mut uid = Uuid::new_v4().simple().to_string();
        uid.truncate(28);

        let record = AccountRecord {
            uid: uid.clone(),
            email: Some(normalized.clone()),
            ..Default::default()
        };

        accounts.insert(
            uid.clone(),
            StoredAccount {
                record,
                password_hash,
                revoked_at: None,
            },
        );
        debug!(user.id = %uid, "Account created");

        Ok(Account {
            uid,
            email: normalized,
        })
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        let accounts = self.accounts.read().await;
        let account =
            Self::find_by_email(&accounts, email).ok_or(IdentityError::InvalidCredential)?;

        let valid = bcrypt::verify(password, &account.password_hash).unwrap_or(false);
        if !valid {
            return Err(IdentityError::InvalidCredential);
        }
        if account.record.disabled {
            return Err(IdentityError::UserDisabled);
        }

        Ok(Account {
            uid: account.record.uid.clone(),
            email: account.record.email.clone().unwrap_or_default(),
        })
    }

    #[instrument(skip(self))]
    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        let accounts = self.accounts.read().await;
        if Self::find_by_email(&accounts, email).is_none() {
            return Err(IdentityError::EmailNotFound);
        }

        self.reset_requests
            .write()
            .await
            .push(normalize_email(email));
        Ok(())
    }

    async fn lookup(&self, uid: &str) -> Result<Option<AccountRecord>, IdentityError> {
        Ok(self
            .accounts
            .read()
            .await
            .get(uid)
            .map(|account| account.record.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError> {
        self.accounts
            .write()
            .await
            .remove(uid)
            .map(|_| ())
            .ok_or_else(|| IdentityError::AccountNotFound(uid.to_string()))
    }

    async fn revoke_sessions(&self, uid: &str) -> Result<(), IdentityError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(uid)
            .ok_or_else(|| IdentityError::AccountNotFound(uid.to_string()))?;

        account.revoked_at = Some(chrono::Utc::now().timestamp());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_sign_in() {
        let identity = MemoryIdentity::new();
        let created = identity
            .create_account("Ada@Example.com", "hunter22")
            .await
            .unwrap();

        let signed_in = identity.sign_in("ada@example.com", "hunter22").await.unwrap();

        assert_eq!(created, signed_in);
        assert_eq!(signed_in.email, "ada@example.com");
        assert_eq!(signed_in.uid.len(), 28);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let identity = MemoryIdentity::new();
        identity.create_account("ada@example.com", "hunter22").await.unwrap();

        let err = identity
            .create_account("ADA@example.com", "another1")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::EmailExists));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let identity = MemoryIdentity::new();
        identity.create_account("ada@example.com", "hunter22").await.unwrap();

        assert!(matches!(
            identity.sign_in("ada@example.com", "wrong-pass").await,
            Err(IdentityError::InvalidCredential)
        ));
        assert!(matches!(
            identity.sign_in("bob@example.com", "hunter22").await,
            Err(IdentityError::InvalidCredential)
        ));
    }

    #[tokio::test]
    async fn test_weak_password_is_rejected() {
        let identity = MemoryIdentity::new();
        assert!(matches!(
            identity.create_account("ada@example.com", "12345").await,
            Err(IdentityError::WeakPassword(_))
        ));
    }

    #[tokio::test]
    async fn test_disabled_account_cannot_sign_in() {
        let identity = MemoryIdentity::new();
        let account = identity.create_account("ada@example.com", "hunter22").await.unwrap();
        identity.set_disabled(&account.uid, true).await.unwrap();

        assert!(matches!(
            identity.sign_in("ada@example.com", "hunter22").await,
            Err(IdentityError::UserDisabled)
        ));
    }

    #[tokio::test]
    async fn test_password_reset_requires_account() {
        let identity = MemoryIdentity::new();
        identity.create_account("ada@example.com", "hunter22").await.unwrap();

        identity.send_password_reset("ada@example.com").await.unwrap();
        assert!(matches!(
            identity.send_password_reset("bob@example.com").await,
            Err(IdentityError::EmailNotFound)
        ));
        assert_eq!(identity.reset_requests().await, vec!["ada@example.com"]);
    }

    #[tokio::test]
    async fn test_delete_and_lookup() {
        let identity = MemoryIdentity::new();
        let account = identity.create_account("ada@example.com", "hunter22").await.unwrap();

        assert!(identity.lookup(&account.uid).await.unwrap().is_some());
        identity.delete_account(&account.uid).await.unwrap();
        assert!(identity.lookup(&account.uid).await.unwrap().is_none());
        assert!(matches!(
            identity.delete_account(&account.uid).await,
            Err(IdentityError::AccountNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_revoke_sessions_records_timestamp() {
        let identity = MemoryIdentity::new();
        let account = identity.create_account("ada@example.com", "hunter22").await.unwrap();

        assert!(identity.revoked_at(&account.uid).await.is_none());
        identity.revoke_sessions(&account.uid).await.unwrap();
        assert!(identity.revoked_at(&account.uid).await.is_some());
    }
}
