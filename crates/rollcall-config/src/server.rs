use std::str::FromStr;

use crate::{ConfigError, env_opt, env_or};

/// Which provider implementations back the document store, identity and roster clients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderMode {
    /// Firestore, Firebase Auth and Airtable over HTTPS.
    #[default]
    Firebase,
    /// Process-local stores, for development and tests.
    Memory,
}

impl FromStr for ProviderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "firebase" | "remote" => Ok(Self::Firebase),
            "memory" | "in-memory" => Ok(Self::Memory),
            _ => Err(ConfigError::Invalid {
                key: "ROLLCALL_PROVIDERS",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub providers: ProviderMode,
    /// Connect plus request timeout applied by every provider HTTP client.
    pub provider_timeout_secs: u64,
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            providers: ProviderMode::Firebase,
            provider_timeout_secs: 30,
            metrics_enabled: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let providers = match env_opt("ROLLCALL_PROVIDERS") {
            Some(value) => value.parse()?,
            None => ProviderMode::default(),
        };

        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_opt("PORT").and_then(|s| s.parse().ok()).unwrap_or(3000),
            providers,
            provider_timeout_secs: env_opt("PROVIDER_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            metrics_enabled: env_opt("METRICS_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_mode_parsing() {
        assert_eq!("memory".parse::<ProviderMode>().unwrap(), ProviderMode::Memory);
        assert_eq!("Firebase".parse::<ProviderMode>().unwrap(), ProviderMode::Firebase);
        assert!("sqlite".parse::<ProviderMode>().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
