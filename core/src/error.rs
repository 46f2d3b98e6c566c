//! Common error types for Stratum.

use crate::RecordId;
use thiserror::Error;

/// Errors that can occur during branch operations.
#[derive(Debug, Error)]
pub enum BranchError {
    /// Insert collision: the id is already present in the branch.
    #[error("Duplicate id {id} in branch for entity {entity}")]
    DuplicateId { entity: String, id: RecordId },
}

impl BranchError {
    pub fn duplicate_id(entity: impl Into<String>, id: RecordId) -> Self {
        Self::DuplicateId {
            entity: entity.into(),
            id,
        }
    }
}

/// Result type for branch operations.
pub type BranchResult<T> = Result<T, BranchError>;
