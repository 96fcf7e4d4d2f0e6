//! # Rollcall Config
//!
//! Configuration types for the Rollcall API.
//!
//! Every structure is loaded from environment variables with `from_env()`:
//!
//! - [`server`]: Listen address, provider selection, timeouts, metrics toggle
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`firebase`]: Firebase web API key, project, emulator hosts, service account
//! - [`airtable`]: Airtable credentials, table, view and field names
//!
//! # Example
//!
//! ```ignore
//! use rollcall_config::{AirtableConfig, FirebaseConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let firebase = FirebaseConfig::from_env();
//! firebase.require()?;
//! ```

pub mod airtable;
pub mod cors;
pub mod error;
pub mod firebase;
pub mod server;

// Re-export commonly used types at crate root
pub use airtable::{AirtableConfig, AirtableFieldNames};
pub use cors::CorsConfig;
pub use error::ConfigError;
pub use firebase::{FirebaseConfig, ServiceAccountConfig};
pub use server::{ProviderMode, ServerConfig};

/// Reads a variable, treating unset and blank values alike.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

/// Fails with every variable whose value is empty.
pub(crate) fn require_vars(vars: &[(&'static str, &str)]) -> Result<(), ConfigError> {
    let missing: Vec<&'static str> = vars
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Missing(missing.join(", ")))
    }
}
