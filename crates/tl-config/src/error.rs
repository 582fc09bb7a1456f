//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration value is missing.
    #[error(
        "Configuration value '{section}.{field}' is not set (pass --{flag} or set {env})"
    )]
    NotConfigured {
        section: &'static str,
        field: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
