//! Mutation record types.

use stratum_core::{IdSelector, Record, Updater};

/// The operation a mutation record carries.
#[derive(Debug, Clone)]
pub enum MutationOp {
    /// Insert a new record. An id may be supplied in the payload;
    /// otherwise one is assigned when the record folds into its branch.
    Create { payload: Record },
    /// Merge an updater into the selected records.
    Update {
        selector: IdSelector,
        updater: Updater,
    },
    /// Remove the selected records.
    Delete { selector: IdSelector },
}

/// An immutable mutation record targeting one entity.
#[derive(Debug, Clone)]
pub struct Mutation {
    /// Name of the entity this record targets.
    pub entity: String,
    /// The operation to apply.
    pub op: MutationOp,
}

impl Mutation {
    /// Build a Create record.
    pub fn create(entity: impl Into<String>, payload: Record) -> Self {
        Self {
            entity: entity.into(),
            op: MutationOp::Create { payload },
        }
    }

    /// Build an Update record.
    pub fn update(
        entity: impl Into<String>,
        selector: impl Into<IdSelector>,
        updater: impl Into<Updater>,
    ) -> Self {
        Self {
            entity: entity.into(),
            op: MutationOp::Update {
                selector: selector.into(),
                updater: updater.into(),
            },
        }
    }

    /// Build a Delete record.
    pub fn delete(entity: impl Into<String>, selector: impl Into<IdSelector>) -> Self {
        Self {
            entity: entity.into(),
            op: MutationOp::Delete {
                selector: selector.into(),
            },
        }
    }
}
