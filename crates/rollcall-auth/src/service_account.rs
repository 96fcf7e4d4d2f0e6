//! OAuth access tokens for Google APIs.
//!
//! Admin-side Firestore and Identity Toolkit calls authenticate with a
//! short-lived access token obtained through the JWT bearer grant: an RS256
//! assertion signed with the service account key is exchanged at the token
//! endpoint. Tokens are cached and refreshed a minute before they expire.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use rollcall_config::ServiceAccountConfig;

use crate::TokenError;

/// Scopes covering Firestore and the Identity Toolkit admin endpoints.
pub const SCOPES: &str = "https://www.googleapis.com/auth/datastore \
https://www.googleapis.com/auth/identitytoolkit \
https://www.googleapis.com/auth/firebase";

const ASSERTION_LIFETIME_SECS: i64 = 3600;
const REFRESH_MARGIN: Duration = Duration::from_secs(60);
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Source of bearer tokens for admin API calls.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, TokenError>;
}

/// A fixed token, e.g. `owner` for the Firebase emulators.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, TokenError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    sub: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    ASSERTION_LIFETIME_SECS as u64
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Access tokens minted from a service account key.
pub struct ServiceAccountTokens {
    http: reqwest::Client,
    client_email: String,
    private_key_id: String,
    key: EncodingKey,
    token_uri: String,
    cached: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for ServiceAccountTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountTokens")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountTokens {
    /// Parses the key up front so a malformed PEM fails at startup.
    pub fn new(http: reqwest::Client, config: &ServiceAccountConfig) -> Result<Self, TokenError> {
        let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())?;

        Ok(Self {
            http,
            client_email: config.client_email.clone(),
            private_key_id: config.private_key_id.clone(),
            key,
            token_uri: config.token_uri.clone(),
            cached: Mutex::new(None),
        })
    }

    fn assertion(&self) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            sub: &self.client_email,
            scope: SCOPES,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        if !self.private_key_id.is_empty() {
            header.kid = Some(self.private_key_id.clone());
        }

        Ok(encode(&header, &claims, &self.key)?)
    }

    #[instrument(skip(self), fields(token_uri = %self.token_uri))]
    async fn exchange(&self) -> Result<CachedToken, TokenError> {
        let assertion = self.assertion()?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TokenError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        debug!(expires_in = %token.expires_in, "Obtained service account access token");

        Ok(CachedToken {
            token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokens {
    async fn access_token(&self) -> Result<String, TokenError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() + REFRESH_MARGIN < token.expires_at {
                return Ok(token.token.clone());
            }
        }

        let fresh = self.exchange().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);

        Ok(token)
    }
}
