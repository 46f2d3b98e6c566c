//! RegistryBuilder for constructing an immutable Registry.
//!
//! Declarations are collected per entity, then `build` validates the set
//! as a whole and synthesizes one through-entity per many-to-many field
//! that does not name an explicit through-entity.

use crate::error::{SchemaError, SchemaResult};
use crate::registry::Registry;
use crate::schema::{from_field_name, through_name, to_field_name, FieldKind, Schema, SELF_TARGET};
use std::collections::HashMap;

/// Identifier shape accepted for entity and field names.
const IDENT_PATTERN: &str = "^[A-Za-z_][A-Za-z0-9_]*$";

fn is_valid_identifier(name: &str) -> bool {
    regex_lite::Regex::new(IDENT_PATTERN)
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Declared schemas by name.
    schemas: HashMap<String, Schema>,
    /// Declaration order, for deterministic resolution.
    order: Vec<String>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start declaring an entity. The id attribute defaults to `"id"`.
    pub fn entity(&mut self, name: impl Into<String>) -> EntityBuilder<'_> {
        EntityBuilder {
            builder: self,
            name: name.into(),
            id_attribute: "id".to_string(),
            fields: HashMap::new(),
        }
    }

    /// Build the immutable Registry: validate every declaration, resolve
    /// relation targets, and synthesize through-entities. Deterministic:
    /// the same declarations always produce a structurally identical
    /// registry.
    pub fn build(self) -> SchemaResult<Registry> {
        let mut schemas = self.schemas;
        let order = self.order;

        // Resolve relation targets against the declared set.
        for name in &order {
            let schema = &schemas[name];
            for (field, kind) in &schema.fields {
                let Some(target) = kind.target() else {
                    continue;
                };
                if target != SELF_TARGET && !schemas.contains_key(target) {
                    return Err(SchemaError::unknown_target(name, field, target));
                }
                if let FieldKind::ManyToMany {
                    through: Some(through),
                    ..
                } = kind
                {
                    if !schemas.contains_key(through) {
                        return Err(SchemaError::unknown_through(name, field, through));
                    }
                }
            }
        }

        // Synthesize through-entities in declaration order.
        let mut synthesized: Vec<Schema> = Vec::new();
        for name in &order {
            let schema = &schemas[name];
            // Field order inside one entity must not affect the result;
            // sort so collision reporting is deterministic too.
            let mut m2m: Vec<(&String, &FieldKind)> = schema
                .fields
                .iter()
                .filter(|(_, kind)| matches!(kind, FieldKind::ManyToMany { through: None, .. }))
                .collect();
            m2m.sort_by(|a, b| a.0.cmp(b.0));

            for (field, kind) in m2m {
                let FieldKind::ManyToMany { target, .. } = kind else {
                    continue;
                };
                let target = schema.resolve_target(target);
                let through = synthesize_through(&schema.name, field, target);

                if schemas.contains_key(&through.name)
                    || synthesized.iter().any(|s| s.name == through.name)
                {
                    return Err(SchemaError::through_collision(through.name));
                }
                synthesized.push(through);
            }
        }

        for through in synthesized {
            schemas.insert(through.name.clone(), through);
        }

        Ok(Registry::new(schemas))
    }
}

/// Build the schema of one through-entity: two foreign keys, one back at
/// the owner, one at the target.
fn synthesize_through(owner: &str, field: &str, target: &str) -> Schema {
    let mut fields = HashMap::new();
    fields.insert(
        from_field_name(owner),
        FieldKind::ForeignKey {
            target: owner.to_string(),
        },
    );
    fields.insert(
        to_field_name(target),
        FieldKind::ForeignKey {
            target: target.to_string(),
        },
    );

    Schema {
        name: through_name(owner, field),
        id_attribute: "id".to_string(),
        fields,
        synthetic: true,
    }
}

/// Builder for one entity declaration.
pub struct EntityBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    id_attribute: String,
    fields: HashMap<String, FieldKind>,
}

impl<'a> EntityBuilder<'a> {
    /// Set the id attribute. Assigned once here; the engine never
    /// reassigns it.
    pub fn id_attribute(mut self, name: impl Into<String>) -> Self {
        self.id_attribute = name.into();
        self
    }

    /// Declare a plain attribute field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldKind::Attribute);
        self
    }

    /// Declare a foreign-key field. `target` may be [`SELF_TARGET`].
    pub fn foreign_key(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.insert(
            name.into(),
            FieldKind::ForeignKey {
                target: target.into(),
            },
        );
        self
    }

    /// Declare a many-to-many field; a through-entity will be
    /// synthesized at build time.
    pub fn many_to_many(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.insert(
            name.into(),
            FieldKind::ManyToMany {
                target: target.into(),
                through: None,
            },
        );
        self
    }

    /// Declare a many-to-many field backed by an explicitly declared
    /// through-entity; nothing is synthesized for it.
    pub fn many_to_many_through(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        through: impl Into<String>,
    ) -> Self {
        self.fields.insert(
            name.into(),
            FieldKind::ManyToMany {
                target: target.into(),
                through: Some(through.into()),
            },
        );
        self
    }

    /// Finish declaring this entity.
    pub fn done(mut self) -> SchemaResult<()> {
        if self.builder.schemas.contains_key(&self.name) {
            return Err(SchemaError::duplicate_entity(self.name));
        }
        if !is_valid_identifier(&self.name) {
            return Err(SchemaError::invalid_name(self.name));
        }
        if !is_valid_identifier(&self.id_attribute) {
            return Err(SchemaError::invalid_name(self.id_attribute));
        }
        for field in self.fields.keys() {
            if !is_valid_identifier(field) {
                return Err(SchemaError::invalid_name(field.clone()));
            }
        }

        // The id attribute is implicit; it must never be relational, and
        // a redundant plain declaration is dropped.
        match self.fields.get(&self.id_attribute) {
            Some(kind) if kind.is_relational() => {
                return Err(SchemaError::relational_id_attribute(self.name));
            }
            Some(_) => {
                self.fields.remove(&self.id_attribute);
            }
            None => {}
        }

        let schema = Schema {
            name: self.name.clone(),
            id_attribute: self.id_attribute,
            fields: self.fields,
            synthetic: false,
        };

        self.builder.order.push(self.name.clone());
        self.builder.schemas.insert(self.name, schema);
        Ok(())
    }
}
