use thiserror::Error;

/// Unified error type for version-gate operations
#[derive(Error, Debug)]
pub enum VersionGateError {
    #[error("Cannot compute a version from a detached HEAD without an external reference: check out a named branch or supply the reference via --ref or the configured environment variable")]
    MissingReference,

    #[error("Branch '{0}' does not match the expected '<type>/<details>' pattern")]
    PatternMismatch(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-gate
pub type Result<T> = std::result::Result<T, VersionGateError>;

impl VersionGateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionGateError::Config(msg.into())
    }

    /// Create a pattern-mismatch error for a branch name
    pub fn pattern_mismatch(branch: impl Into<String>) -> Self {
        VersionGateError::PatternMismatch(branch.into())
    }
}
