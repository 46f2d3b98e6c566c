//! Schema descriptors.

use std::collections::HashMap;

/// Literal target marking a relation that points back at its own entity.
pub const SELF_TARGET: &str = "this";

/// The kind of one field within a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain attribute; holds a scalar value.
    Attribute,
    /// Foreign key; holds the id of a record in the target entity's branch.
    ForeignKey {
        /// Target entity name, or [`SELF_TARGET`].
        target: String,
    },
    /// Many-to-many relation, materialized as a through-entity.
    ManyToMany {
        /// Target entity name, or [`SELF_TARGET`].
        target: String,
        /// Explicitly declared through-entity, if any. When absent, the
        /// registry builder synthesizes one.
        through: Option<String>,
    },
}

impl FieldKind {
    /// Returns true if this field holds a relation (foreign key or
    /// many-to-many).
    pub fn is_relational(&self) -> bool {
        !matches!(self, FieldKind::Attribute)
    }

    /// The target entity name for relational kinds.
    pub fn target(&self) -> Option<&str> {
        match self {
            FieldKind::Attribute => None,
            FieldKind::ForeignKey { target } => Some(target),
            FieldKind::ManyToMany { target, .. } => Some(target),
        }
    }
}

/// Descriptor for one entity: its id attribute and field kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Entity name.
    pub name: String,
    /// Name of the id attribute. Assigned once at declaration, never
    /// reassigned, and never itself a relational field.
    pub id_attribute: String,
    /// Field kinds by field name. The id attribute does not appear here.
    pub fields: HashMap<String, FieldKind>,
    /// True for through-entities produced by relation synthesis.
    pub synthetic: bool,
}

impl Schema {
    /// Create a plain schema descriptor (no synthesis involved).
    pub fn new(name: impl Into<String>, id_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_attribute: id_attribute.into(),
            fields: HashMap::new(),
            synthetic: false,
        }
    }

    /// Get a field's kind by name.
    pub fn field(&self, name: &str) -> Option<&FieldKind> {
        self.fields.get(name)
    }

    /// Check if this schema declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All field names (excluding the id attribute).
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|s| s.as_str())
    }

    /// Resolve a relational target against this schema: [`SELF_TARGET`]
    /// means the entity itself.
    pub fn resolve_target<'a>(&'a self, target: &'a str) -> &'a str {
        if target == SELF_TARGET {
            &self.name
        } else {
            target
        }
    }
}

/// Deterministic name of the through-entity synthesized for a
/// many-to-many field.
pub(crate) fn through_name(owner: &str, field: &str) -> String {
    format!("{}__{}", owner, field)
}

/// Deterministic name of the through-entity's foreign key back at the
/// owning entity.
pub(crate) fn from_field_name(owner: &str) -> String {
    format!("from_{}", owner)
}

/// Deterministic name of the through-entity's foreign key at the target
/// entity.
pub(crate) fn to_field_name(target: &str) -> String {
    format!("to_{}", target)
}
