//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DeviceHubError`] via `From`.

use std::fmt;

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum DeviceHubError {
    /// A request referenced something that fails a domain check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Stored additional properties are not valid JSON.
    #[error("malformed additional properties")]
    MalformedProperties(#[from] serde_json::Error),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No device type with the requested name exists.
    #[error("Invalid device type name.")]
    InvalidDeviceTypeName,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// Identifier that was requested, rendered as text.
    pub id: String,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with ID {} not found.", self.entity, self.id)
    }
}

impl std::error::Error for NotFoundError {}
