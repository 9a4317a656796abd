//! Error types for winrepo-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the process with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error raised while running a command
    #[error(transparent)]
    Core(#[from] winrepo_core::Error),

    /// Error from the server client
    #[error(transparent)]
    Client(#[from] winrepo_client::Error),

    /// Error loading the admin configuration
    #[error(transparent)]
    Meta(#[from] winrepo_meta::Error),

    /// Arguments could not be converted
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
