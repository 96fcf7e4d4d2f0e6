/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
