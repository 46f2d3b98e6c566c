//! The normalized table of one entity type.

use std::collections::HashMap;
use stratum_core::{BranchError, BranchResult, IdSelector, Record, RecordId, Updater, Value};
use stratum_registry::Schema;

/// One entity's normalized table within a state snapshot.
///
/// `id_order` is first-insertion order and is the externally observable
/// ordering contract: deleting and re-inserting an id places it at the
/// end again. `next_auto_id` is the fresh-id source for inserts that
/// supply no id; it ratchets past any caller-supplied integer id so
/// fresh ids never collide within a branch lineage.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Record ids in first-insertion order, no duplicates.
    id_order: Vec<RecordId>,
    /// Records by id.
    records: HashMap<RecordId, Record>,
    /// Next engine-assigned integer id.
    next_auto_id: i64,
}

impl Branch {
    /// Create the default (empty) branch state.
    pub fn new() -> Self {
        Self {
            id_order: Vec::new(),
            records: HashMap::new(),
            next_auto_id: 1,
        }
    }

    /// Insert a record, returning the resulting branch.
    ///
    /// If the payload carries no usable id under the schema's id
    /// attribute, a fresh integer id is assigned and stored into the
    /// record. An id already present in the branch is a
    /// [`BranchError::DuplicateId`]; insert never reassigns an existing
    /// record's id.
    pub fn insert(&self, schema: &Schema, payload: Record) -> BranchResult<Branch> {
        let mut next = self.clone();
        let mut payload = payload;

        let id = match payload
            .get(&schema.id_attribute)
            .and_then(RecordId::from_value)
        {
            Some(id) => id,
            None => {
                let id = RecordId::Int(next.next_auto_id);
                payload.insert(schema.id_attribute.clone(), Value::Int(next.next_auto_id));
                id
            }
        };

        if let RecordId::Int(i) = id {
            next.next_auto_id = next.next_auto_id.max(i + 1);
        }

        if next.records.contains_key(&id) {
            return Err(BranchError::duplicate_id(&schema.name, id));
        }

        next.id_order.push(id.clone());
        next.records.insert(id, payload);
        Ok(next)
    }

    /// Merge an updater into every selected record, returning the
    /// resulting branch.
    ///
    /// Selected ids absent from the branch are skipped: a delayed update
    /// against an already-deleted row is a no-op, not a failure. The id
    /// attribute is never merged; ids are assigned once at insert.
    /// `id_order` is unchanged.
    pub fn update(&self, schema: &Schema, selector: &IdSelector, updater: &Updater) -> Branch {
        let mut next = self.clone();

        for id in selector.iter() {
            if let Some(current) = next.records.get(id) {
                let partial = updater.resolve(current);
                let mut merged = current.clone();
                for (field, value) in partial {
                    if field == schema.id_attribute {
                        continue;
                    }
                    merged.insert(field, value);
                }
                next.records.insert(id.clone(), merged);
            }
        }

        next
    }

    /// Remove every selected record, returning the resulting branch.
    /// Selected ids absent from the branch are skipped.
    pub fn delete(&self, selector: &IdSelector) -> Branch {
        let mut next = self.clone();

        let mut removed = false;
        for id in selector.iter() {
            if next.records.remove(id).is_some() {
                removed = true;
            }
        }
        if removed {
            let Branch {
                id_order, records, ..
            } = &mut next;
            id_order.retain(|id| records.contains_key(id));
        }

        next
    }

    /// Look up a record by id. Absence is a normal outcome, not an error.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.get(id)
    }

    /// The id sequence in insertion order, as an owned copy.
    pub fn id_list(&self) -> Vec<RecordId> {
        self.id_order.clone()
    }

    /// All records in insertion order.
    pub fn records_in_order(&self) -> Vec<&Record> {
        self.iter().collect()
    }

    /// Lazily iterate records in insertion order. Restartable: each call
    /// walks from the start.
    pub fn iter(&self) -> Records<'_> {
        Records {
            branch: self,
            pos: 0,
        }
    }

    /// Check if an id is present.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.contains_key(id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.id_order.len()
    }

    /// True if the branch holds no records.
    pub fn is_empty(&self) -> bool {
        self.id_order.is_empty()
    }
}

impl Default for Branch {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over a branch's records in insertion order.
pub struct Records<'a> {
    branch: &'a Branch,
    pos: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.branch.id_order.len() {
            let id = &self.branch.id_order[self.pos];
            self.pos += 1;
            if let Some(record) = self.branch.records.get(id) {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.branch.id_order.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Records<'a> {}
