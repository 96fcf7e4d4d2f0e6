//! Firebase Auth over the Identity Toolkit REST API.
//!
//! Password sign-up, sign-in and reset emails go through the public
//! `accounts:*` endpoints with the web API key. Lookup, delete and session
//! revocation go through the project-scoped admin endpoints with an OAuth
//! bearer token.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use rollcall_config::FirebaseConfig;

use crate::{AccessTokenProvider, Account, AccountRecord, IdentityError, IdentityProvider};

const LIVE_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

pub struct FirebaseIdentity {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    project_id: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl std::fmt::Debug for FirebaseIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseIdentity")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    local_id: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Default, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<UserInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfo {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    #[serde(default)]
    disabled: bool,
    /// JSON object serialized as a string.
    custom_attributes: Option<String>,
}

impl From<UserInfo> for AccountRecord {
    fn from(info: UserInfo) -> Self {
        let custom_claims = info
            .custom_attributes
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();

        AccountRecord {
            uid: info.local_id,
            email: info.email,
            display_name: info.display_name,
            disabled: info.disabled,
            custom_claims,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Maps Identity Toolkit error codes such as `WEAK_PASSWORD : Password should be...`.
fn map_error(status: u16, message: &str) -> IdentityError {
    let (code, detail) = match message.split_once(" : ") {
        Some((code, detail)) => (code.trim(), detail.trim()),
        None => (message.trim(), ""),
    };

    match code {
        "EMAIL_EXISTS" => IdentityError::EmailExists,
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" => IdentityError::InvalidCredential,
        "EMAIL_NOT_FOUND" => IdentityError::EmailNotFound,
        "USER_DISABLED" => IdentityError::UserDisabled,
        "USER_NOT_FOUND" => IdentityError::AccountNotFound(String::new()),
        "WEAK_PASSWORD" => IdentityError::WeakPassword(detail.to_string()),
        "MISSING_PASSWORD" => IdentityError::WeakPassword("Password is required".to_string()),
        "INVALID_EMAIL" | "MISSING_EMAIL" => IdentityError::InvalidEmail,
        _ => IdentityError::Api {
            status,
            message: message.to_string(),
        },
    }
}

impl FirebaseIdentity {
    pub fn new(
        http: reqwest::Client,
        config: &FirebaseConfig,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let base_url = match &config.auth_emulator_host {
            Some(host) => format!("http://{}/identitytoolkit.googleapis.com", host),
            None => LIVE_BASE_URL.to_string(),
        };

        Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            project_id: config.project_id.clone(),
            tokens,
        }
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn send<R: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<R, IdentityError> {
        metrics::counter!(
            "provider_calls_total",
            "provider" => "firebase_auth",
            "operation" => operation
        )
        .increment(1);

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        let err = map_error(status.as_u16(), &message);
        debug!(operation, status = %status.as_u16(), error = %err, "Identity Toolkit call failed");
        Err(err)
    }

    async fn call_public<B: Serialize, R: DeserializeOwned>(
        &self,
        operation: &'static str,
        body: &B,
    ) -> Result<R, IdentityError> {
        let url = format!("{}/v1/accounts:{}", self.base_url, operation);
        let request = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body);

        self.send(operation, request).await
    }

    async fn call_admin<B: Serialize, R: DeserializeOwned>(
        &self,
        operation: &'static str,
        body: &B,
    ) -> Result<R, IdentityError> {
        let token = self.tokens.access_token().await?;
        let url = format!(
            "{}/v1/projects/{}/accounts:{}",
            self.base_url, self.project_id, operation
        );
        let request = self.http.post(url).bearer_auth(token).json(body);

        self.send(operation, request).await
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentity {
    #[instrument(skip(self, password))]
    async fn create_account(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        let response: PasswordResponse = self
            .call_public(
                "signUp",
                &json!({ "email": email, "password": password, "returnSecureToken": true }),
            )
            .await?;

        Ok(Account {
            uid: response.local_id,
            email: response.email,
        })
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        let response: PasswordResponse = self
            .call_public(
                "signInWithPassword",
                &json!({ "email": email, "password": password, "returnSecureToken": true }),
            )
            .await
            .map_err(|err| match err {
                IdentityError::EmailNotFound => IdentityError::InvalidCredential,
                other => other,
            })?;

        Ok(Account {
            uid: response.local_id,
            email: response.email,
        })
    }

    #[instrument(skip(self))]
    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        let _: serde_json::Value = self
            .call_public(
                "sendOobCode",
                &json!({ "requestType": "PASSWORD_RESET", "email": email }),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn lookup(&self, uid: &str) -> Result<Option<AccountRecord>, IdentityError> {
        let result: Result<LookupResponse, IdentityError> = self
            .call_admin("lookup", &json!({ "localId": [uid] }))
            .await;

        match result {
            Ok(response) => Ok(response.users.into_iter().next().map(AccountRecord::from)),
            Err(IdentityError::AccountNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError> {
        let _: serde_json::Value = self
            .call_admin("delete", &json!({ "localId": uid }))
            .await
            .map_err(|err| match err {
                IdentityError::AccountNotFound(_) => IdentityError::AccountNotFound(uid.to_string()),
                other => other,
            })?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_sessions(&self, uid: &str) -> Result<(), IdentityError> {
        let valid_since = Utc::now().timestamp().to_string();
        let result: Result<serde_json::Value, IdentityError> = self
            .call_admin("update", &json!({ "localId": uid, "validSince": valid_since }))
            .await;

        if let Err(err) = &result {
            warn!(user.id = %uid, error = %err, "Failed to revoke sessions");
        }
        result.map(|_| ())
    }
}
