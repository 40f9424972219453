//! Backend failure model.

use thiserror::Error;

/// Result type returned by every backend operation.
pub type ErpResult<T> = Result<T, ErpError>;

/// Failure raised by the ERP backend.
///
/// Each kind only carries a human-readable message; the HTTP layer decides
/// which status code a kind maps to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErpError {
    /// The backend could not be reached.
    #[error("{0}")]
    Connection(String),

    /// The requested resource does not exist in the backend.
    #[error("{0}")]
    NotFound(String),

    /// The backend rejected or failed the operation (business rule violation).
    #[error("{0}")]
    Operation(String),
}

impl ErpError {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Connection(msg) | Self::NotFound(msg) | Self::Operation(msg) => msg,
        }
    }
}
