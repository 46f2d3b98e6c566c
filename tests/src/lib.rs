//! Shared fixtures for Stratum integration scenarios.

pub mod fixtures;

/// Common imports for scenario tests.
pub mod prelude {
    pub use crate::fixtures::*;
    pub use std::collections::HashMap;
    pub use stratum_branch::Branch;
    pub use stratum_core::{record, IdSelector, Record, RecordId, Updater, Value};
    pub use stratum_entity::Entity;
    pub use stratum_mutation::{Mutation, MutationLog, MutationOp};
    pub use stratum_registry::{
        FieldKind, Registry, RegistryBuilder, Schema, SchemaError, SELF_TARGET,
    };
    pub use stratum_session::{Session, SessionError};
}
