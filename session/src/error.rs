//! Session error types.

use stratum_core::BranchError;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur at the session boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A mutation or read targets an entity no schema describes.
    /// Surfaced at append/read time, never deferred to fold time.
    #[error("Unknown entity: {name}")]
    UnknownEntity { name: String },

    /// The session is finalized: no further mutations are accepted and
    /// only already-derived next states may be read.
    #[error("Session is finalized")]
    Closed,

    /// A branch operation failed during the fold.
    #[error(transparent)]
    Branch(#[from] BranchError),
}

impl SessionError {
    pub fn unknown_entity(name: impl Into<String>) -> Self {
        Self::UnknownEntity { name: name.into() }
    }
}
