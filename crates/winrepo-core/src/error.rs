//! Error types for winrepo-core

/// Result type for command execution
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a command does not handle itself
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument was not supplied
    #[error("Missing required argument --{name}")]
    MissingArgument { name: String },

    /// An argument had the wrong shape
    #[error("Invalid value for --{name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// Error from winrepo-meta
    #[error(transparent)]
    Meta(#[from] winrepo_meta::Error),

    /// Error from the repository server
    #[error(transparent)]
    Client(#[from] winrepo_client::Error),

    /// JSON conversion error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
