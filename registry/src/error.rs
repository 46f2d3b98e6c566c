//! Schema error types.

use thiserror::Error;

/// Result type for schema resolution.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while resolving schema declarations. All of these are
/// fatal at build time; none are recovered silently.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate entity name: {name}")]
    DuplicateEntity { name: String },

    #[error("Invalid identifier: {name}")]
    InvalidName { name: String },

    #[error("Field {field} on entity {entity} targets unknown entity {target}")]
    UnknownTarget {
        entity: String,
        field: String,
        target: String,
    },

    #[error("Field {field} on entity {entity} names unknown through-entity {through}")]
    UnknownThrough {
        entity: String,
        field: String,
        through: String,
    },

    #[error("Through-entity name collision: {name}")]
    ThroughCollision { name: String },

    #[error("Id attribute of entity {entity} is declared as a relational field")]
    RelationalIdAttribute { entity: String },
}

impl SchemaError {
    pub fn duplicate_entity(name: impl Into<String>) -> Self {
        Self::DuplicateEntity { name: name.into() }
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn unknown_target(
        entity: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::UnknownTarget {
            entity: entity.into(),
            field: field.into(),
            target: target.into(),
        }
    }

    pub fn unknown_through(
        entity: impl Into<String>,
        field: impl Into<String>,
        through: impl Into<String>,
    ) -> Self {
        Self::UnknownThrough {
            entity: entity.into(),
            field: field.into(),
            through: through.into(),
        }
    }

    pub fn through_collision(name: impl Into<String>) -> Self {
        Self::ThroughCollision { name: name.into() }
    }

    pub fn relational_id_attribute(entity: impl Into<String>) -> Self {
        Self::RelationalIdAttribute {
            entity: entity.into(),
        }
    }
}
