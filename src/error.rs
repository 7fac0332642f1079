use thiserror::Error;

/// Unified error type for version detection
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Invalid version '{raw}': {reason}")]
    InvalidVersion { raw: String, reason: String },

    #[error("Invalid increment argument: {0}")]
    InvalidIncrement(String),

    #[error("Invalid pre-release identifier: '{0}'")]
    InvalidPrereleaseId(String),

    #[error("Not a conventional commit: {0}")]
    Commit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results in detect-next-version
pub type Result<T> = std::result::Result<T, DetectError>;

impl DetectError {
    /// Create a version error carrying the offending input
    pub fn invalid_version(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        DetectError::InvalidVersion {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        DetectError::Commit(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DetectError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        DetectError::Tag(msg.into())
    }
}
