//! Error types for mirror-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop the CLI before the first pass
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from mirror-core
    #[error(transparent)]
    Core(#[from] mirror_core::Error),

    /// Diagnostics subscriber could not be installed
    #[error("Failed to initialise diagnostics: {message}")]
    Diagnostics { message: String },
}

impl CliError {
    pub fn diagnostics(message: impl Into<String>) -> Self {
        Self::Diagnostics {
            message: message.into(),
        }
    }
}
