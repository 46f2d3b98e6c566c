//! The append-only mutation log.

use crate::record::Mutation;

/// Ordered sequence of mutation records for one cycle.
///
/// Append-only: records are immutable once appended and the sequence is
/// never reordered or coalesced. The log is implicitly partitioned by
/// target entity; [`MutationLog::for_entity`] yields one partition in
/// original append order.
#[derive(Debug, Clone, Default)]
pub struct MutationLog {
    /// All recorded mutations, in append order.
    entries: Vec<Mutation>,
}

impl MutationLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mutation record. O(1) amortized.
    pub fn append(&mut self, mutation: Mutation) {
        self.entries.push(mutation);
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[Mutation] {
        &self.entries
    }

    /// The subsequence targeting one entity, in append order.
    pub fn for_entity<'a>(&'a self, entity: &str) -> impl Iterator<Item = &'a Mutation> + 'a {
        let entity = entity.to_string();
        self.entries.iter().filter(move |m| m.entity == entity)
    }

    /// Number of recorded mutations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
