//! Error types for settings loading and configuration output.
//!
//! Resolving a configuration is total; these errors only come from the
//! surrounding I/O: reading `rinki.toml`, compiling user-supplied file
//! patterns and serializing the result.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config value for `{field}`: {message}")]
    InvalidValue { field: String, message: String },

    #[error("invalid file pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Settings extraction errors (rinki.toml / RINKI_* variables)
    #[error("failed to load project settings: {0}")]
    Settings(#[from] figment::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
