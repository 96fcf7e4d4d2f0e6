//! Firebase configuration.
//!
//! Two credential sets are involved:
//!
//! - the web API key (`FIREBASE_API_KEY`), used for password sign-up,
//!   sign-in and reset-email calls that the client SDK would make
//! - the service account (`FIREBASE_ADMIN_*`), used for Firestore and for
//!   admin account operations (lookup, delete, session revocation)
//!
//! When `FIRESTORE_EMULATOR_HOST` / `FIREBASE_AUTH_EMULATOR_HOST` are set the
//! clients talk to the local emulators and no service account is needed.

use crate::{ConfigError, env_opt, env_or, require_vars};

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Clone, Debug)]
pub struct ServiceAccountConfig {
    pub project_id: String,
    pub private_key_id: String,
    /// PEM-encoded RSA key; `\n` escapes from `.env` files are expanded.
    pub private_key: String,
    pub client_email: String,
    pub token_uri: String,
}

impl ServiceAccountConfig {
    pub fn from_env() -> Self {
        Self {
            project_id: env_or("FIREBASE_ADMIN_PROJECT_ID", ""),
            private_key_id: env_or("FIREBASE_ADMIN_PRIVATE_KEY_ID", ""),
            private_key: env_or("FIREBASE_ADMIN_PRIVATE_KEY", "").replace("\\n", "\n"),
            client_email: env_or("FIREBASE_ADMIN_CLIENT_EMAIL", ""),
            token_uri: env_or("FIREBASE_ADMIN_TOKEN_URI", DEFAULT_TOKEN_URI),
        }
    }

    pub fn require(&self) -> Result<(), ConfigError> {
        require_vars(&[
            ("FIREBASE_ADMIN_PRIVATE_KEY", &self.private_key),
            ("FIREBASE_ADMIN_CLIENT_EMAIL", &self.client_email),
        ])
    }
}

#[derive(Clone, Debug)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub firestore_emulator_host: Option<String>,
    pub auth_emulator_host: Option<String>,
    pub service_account: ServiceAccountConfig,
}

impl FirebaseConfig {
    pub fn from_env() -> Self {
        let service_account = ServiceAccountConfig::from_env();
        let project_id = env_opt("FIREBASE_PROJECT_ID")
            .unwrap_or_else(|| service_account.project_id.clone());

        Self {
            api_key: env_or("FIREBASE_API_KEY", ""),
            project_id,
            database_id: env_or("FIRESTORE_DATABASE_ID", "(default)"),
            firestore_emulator_host: env_opt("FIRESTORE_EMULATOR_HOST"),
            auth_emulator_host: env_opt("FIREBASE_AUTH_EMULATOR_HOST"),
            service_account,
        }
    }

    /// True when both Firestore and Auth run against emulators.
    pub fn emulated(&self) -> bool {
        self.firestore_emulator_host.is_some() && self.auth_emulator_host.is_some()
    }

    /// Checks the variables needed to reach the live services.
    pub fn require(&self) -> Result<(), ConfigError> {
        require_vars(&[("FIREBASE_PROJECT_ID", &self.project_id)])?;

        if self.auth_emulator_host.is_none() {
            require_vars(&[("FIREBASE_API_KEY", &self.api_key)])?;
        }

        if !self.emulated() {
            self.service_account.require()?;
        }

        Ok(())
    }
}
