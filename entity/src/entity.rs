//! Point-in-time record facade.

use std::fmt;

use stratum_core::{record, Record, RecordId, Updater, Value};
use stratum_mutation::Mutation;
use stratum_registry::Schema;
use stratum_session::{Session, SessionResult};

/// A facade over one record of one entity.
///
/// The snapshot is captured at construction and never re-queried: a
/// facade is a point-in-time view. Writes do not touch the snapshot;
/// they append mutation records addressed by this facade's id, to take
/// effect in the session's next derived branch. Sessions are passed
/// explicitly; a facade holds no session binding of its own.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Name of the entity this record belongs to.
    entity: String,
    /// The record's id, extracted from the snapshot at construction.
    id: RecordId,
    /// The captured field values.
    snapshot: Record,
}

impl Entity {
    /// Wrap a record read out of a branch. Returns None when the record
    /// carries no usable id under the schema's id attribute (never the
    /// case for branch-resident records).
    pub fn from_record(schema: &Schema, record: Record) -> Option<Entity> {
        let id = record
            .get(&schema.id_attribute)
            .and_then(RecordId::from_value)?;

        Some(Entity {
            entity: schema.name.clone(),
            id,
            snapshot: record,
        })
    }

    /// Record a Create mutation for a new record of `entity`. The new
    /// row exists only in the next derived branch; wrap it from there to
    /// obtain its facade.
    pub fn create(
        session: &mut Session<'_>,
        entity: impl Into<String>,
        payload: Record,
    ) -> SessionResult<()> {
        session.add_mutation(Mutation::create(entity, payload))
    }

    /// The entity name.
    pub fn entity_name(&self) -> &str {
        &self.entity
    }

    /// The record's id.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Read a field from the captured snapshot.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.snapshot.get(field)
    }

    /// All captured fields.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.snapshot.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Record a single-field write: appends exactly one Update mutation
    /// addressed by this id.
    pub fn set(
        &self,
        session: &mut Session<'_>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> SessionResult<()> {
        let mut patch = record! {};
        patch.insert(field.into(), value.into());
        self.update(session, patch)
    }

    /// Record a bulk write: all fields merged into a single Update
    /// mutation (one append, not one per field).
    pub fn update(&self, session: &mut Session<'_>, patch: Record) -> SessionResult<()> {
        session.add_mutation(Mutation::update(
            self.entity.clone(),
            self.id.clone(),
            Updater::Patch(patch),
        ))
    }

    /// Record this record's deletion. The facade itself stays readable:
    /// deletion affects future derived branches, never the snapshot.
    pub fn delete(&self, session: &mut Session<'_>) -> SessionResult<()> {
        session.add_mutation(Mutation::delete(self.entity.clone(), self.id.clone()))
    }
}

/// Two facades are equal iff they name the same entity and id; cached
/// snapshots play no part.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity && self.id == other.id
    }
}

impl Eq for Entity {}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.entity, self.id)
    }
}
