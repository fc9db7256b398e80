//! Console error types.

use thiserror::Error;

/// Errors raised by the navigation console.
///
/// The sidebar itself has no failure modes of its own; every variant here
/// originates in a collaborator (store, router, dialog, template engine) and
/// is passed through to the caller unchanged.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("role store I/O failed: {0}")]
    StoreIo(#[from] std::io::Error),

    #[error("role store is corrupt: {0}")]
    StoreFormat(#[from] serde_json::Error),

    #[error("navigation to {path} rejected: {reason}")]
    Navigation { path: String, reason: String },

    #[error("confirm dialog failed: {0}")]
    Dialog(String),

    #[error("template rendering failed")]
    Template(#[from] tera::Error),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Result type alias using ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
