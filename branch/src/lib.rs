//! Stratum Branch
//!
//! The branch algebra: pure operations over one entity's normalized
//! table. A branch is an immutable value; every operation returns a new
//! branch and never touches its receiver, so branches can live inside an
//! immutable state container and be shared freely across cycles.

mod branch;

pub use branch::{Branch, Records};
