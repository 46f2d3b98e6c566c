//! The updater applied by branch-level updates.
//!
//! An update merges a partial record into an existing one. The partial
//! record is either given directly (`Patch`) or derived from the current
//! record (`Compute`).

use crate::Record;
use std::fmt;
use std::sync::Arc;

/// Function form of an updater. Must be pure: the session fold may run it
/// more than once against the same record and expects identical output.
pub type ComputeFn = Arc<dyn Fn(&Record) -> Record + Send + Sync>;

/// Produces the partial record an update merges into an existing record.
#[derive(Clone)]
pub enum Updater {
    /// A partial record merged field-by-field.
    Patch(Record),
    /// Derives the partial record from the current record.
    Compute(ComputeFn),
}

impl Updater {
    /// Wrap a closure as a compute updater.
    pub fn compute<F>(f: F) -> Self
    where
        F: Fn(&Record) -> Record + Send + Sync + 'static,
    {
        Updater::Compute(Arc::new(f))
    }

    /// Resolve this updater against the current record, yielding the
    /// partial record to merge.
    pub fn resolve(&self, current: &Record) -> Record {
        match self {
            Updater::Patch(patch) => patch.clone(),
            Updater::Compute(f) => f(current),
        }
    }
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updater::Patch(patch) => f.debug_tuple("Patch").field(patch).finish(),
            Updater::Compute(_) => f.debug_tuple("Compute").field(&"<fn>").finish(),
        }
    }
}

impl From<Record> for Updater {
    fn from(patch: Record) -> Self {
        Updater::Patch(patch)
    }
}
