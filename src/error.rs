use thiserror::Error;

/// Unified error type for release-bump operations
#[derive(Error, Debug)]
pub enum ReleaseBumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Changelog error: {0}")]
    Changelog(String),

    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-bump
pub type Result<T> = std::result::Result<T, ReleaseBumpError>;

impl ReleaseBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Version(msg.into())
    }

    /// Create a changelog error with context
    pub fn changelog(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Changelog(msg.into())
    }
}
