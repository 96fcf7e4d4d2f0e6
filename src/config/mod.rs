//! Application configuration.
//!
//! Gathers the per-concern config structs from `rollcall-config` and checks
//! that the credentials needed by the selected providers are present.
//!
//! # Environment Variables
//!
//! - `ROLLCALL_PROVIDERS`: `firebase` (default) or `memory`
//! - `HOST`, `PORT`, `ALLOWED_ORIGINS`, `PROVIDER_TIMEOUT_SECS`, `METRICS_ENABLED`
//! - `FIREBASE_*`, `FIRESTORE_*`: see [`FirebaseConfig`]
//! - `AIRTABLE_*`: see [`AirtableConfig`]

use rollcall_config::{
    AirtableConfig, ConfigError, CorsConfig, FirebaseConfig, ProviderMode, ServerConfig,
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub firebase: FirebaseConfig,
    pub airtable: AirtableConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env(),
            firebase: FirebaseConfig::from_env(),
            airtable: AirtableConfig::from_env(),
        })
    }

    /// In `firebase` mode every remote credential must be set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.providers == ProviderMode::Firebase {
            self.firebase.require()?;
            self.airtable.require()?;
        }
        Ok(())
    }
}
