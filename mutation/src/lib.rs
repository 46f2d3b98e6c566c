//! Stratum Mutation
//!
//! Typed mutation records and the append-only log.
//!
//! A mutation record is an immutable instruction (Create/Update/Delete)
//! tagged with the entity it targets. The log preserves append order;
//! order within one entity's subsequence is the application order, order
//! across entities carries no meaning. The log performs no validation of
//! its own - shape checks happen at the session boundary before append,
//! so replaying an accepted log is error-free by construction (insert
//! collisions excepted, which are data, not shape).
//!
//! # Module Structure
//!
//! - `record` - Mutation and MutationOp
//! - `log` - the append-only MutationLog

mod log;
mod record;

pub use log::MutationLog;
pub use record::{Mutation, MutationOp};
