use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be parsed.
    ///
    /// Unset variables fall back to defaults; only malformed values are rejected.
    #[error("Invalid value '{value}' for environment variable {key}")]
    InvalidEnvVar { key: String, value: String },
}
