//! Identity types for Stratum records.
//!
//! A record id is whatever value the caller stored under a schema's id
//! attribute: an integer (possibly engine-assigned) or a string. Ids are
//! immutable once assigned and are the only key into a branch's table.

use crate::Value;
use std::fmt;

/// The id of one record within a branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordId {
    /// Integer id (the engine-assigned kind).
    Int(i64),
    /// String id (always caller-supplied).
    Str(String),
}

impl RecordId {
    /// Extract a record id from a field value, if the value is id-shaped.
    pub fn from_value(value: &Value) -> Option<RecordId> {
        match value {
            Value::Int(i) => Some(RecordId::Int(*i)),
            Value::Str(s) => Some(RecordId::Str(s.clone())),
            _ => None,
        }
    }

    /// Get the integer form, if this is an integer id.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RecordId::Int(i) => Some(*i),
            RecordId::Str(_) => None,
        }
    }

    /// Get the string form, if this is a string id.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordId::Int(_) => None,
            RecordId::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{}", i),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(i: i64) -> Self {
        RecordId::Int(i)
    }
}

impl From<i32> for RecordId {
    fn from(i: i32) -> Self {
        RecordId::Int(i as i64)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Str(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Str(s)
    }
}

/// Addresses one or more records in an update or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSelector {
    /// A single record.
    One(RecordId),
    /// A set of records, applied in declared order.
    Many(Vec<RecordId>),
}

impl IdSelector {
    /// Iterate the selected ids in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        match self {
            IdSelector::One(id) => std::slice::from_ref(id).iter(),
            IdSelector::Many(ids) => ids.iter(),
        }
    }

    /// Number of ids selected.
    pub fn len(&self) -> usize {
        match self {
            IdSelector::One(_) => 1,
            IdSelector::Many(ids) => ids.len(),
        }
    }

    /// True if no ids are selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RecordId> for IdSelector {
    fn from(id: RecordId) -> Self {
        IdSelector::One(id)
    }
}

impl From<Vec<RecordId>> for IdSelector {
    fn from(ids: Vec<RecordId>) -> Self {
        IdSelector::Many(ids)
    }
}

impl From<i64> for IdSelector {
    fn from(i: i64) -> Self {
        IdSelector::One(RecordId::Int(i))
    }
}

impl From<&str> for IdSelector {
    fn from(s: &str) -> Self {
        IdSelector::One(RecordId::Str(s.to_string()))
    }
}
