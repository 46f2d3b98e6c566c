//! Stratum Registry
//!
//! Schema declaration and resolution.
//!
//! Responsibilities:
//! - Describe entities: id attribute plus a field-kind map
//! - Validate declarations (identifier shape, relation targets)
//! - Synthesize one through-entity per many-to-many field
//! - Provide immutable schema lookup to the rest of the engine
//!
//! # Module Structure
//!
//! - `schema` - Schema descriptors and field kinds
//! - `builder` - RegistryBuilder with validation and relation synthesis
//! - `registry` - Immutable Registry lookup
//! - `error` - Schema error types

mod builder;
mod error;
mod registry;
mod schema;

pub use builder::{EntityBuilder, RegistryBuilder};
pub use error::{SchemaError, SchemaResult};
pub use registry::Registry;
pub use schema::{FieldKind, Schema, SELF_TARGET};
