//! Session coordinator.

use std::collections::HashMap;

use stratum_branch::Branch;
use stratum_mutation::{Mutation, MutationLog, MutationOp};
use stratum_registry::Registry;

use crate::error::{SessionError, SessionResult};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Accepting appended mutations and state reads.
    Open,
    /// No further mutations; only already-derived next states readable.
    Finalized,
}

/// A pending transaction over one state cycle.
///
/// Owns the mutation log and the per-entity current branches, and derives
/// next branches on demand. Exclusively owned by the logical cycle that
/// opened it; never shared across concurrent cycles.
pub struct Session<'r> {
    /// The registry (shared, immutable).
    registry: &'r Registry,
    /// Current branch per entity, seeded from the injected root state.
    current: HashMap<String, Branch>,
    /// The cycle's mutation log.
    log: MutationLog,
    /// Next branches already derived this cycle. An appended mutation
    /// invalidates its entity's entry so a later derivation sees the
    /// full subsequence.
    derived: HashMap<String, Branch>,
    /// Lifecycle phase.
    phase: Phase,
}

impl<'r> Session<'r> {
    /// Open a session against a root state. Every registry entity gets a
    /// current branch: the root state's where present, the default
    /// (empty) branch otherwise. Root entries naming no registry entity
    /// are dropped.
    pub fn open(registry: &'r Registry, mut root_state: HashMap<String, Branch>) -> Self {
        let mut current = HashMap::new();
        for schema in registry.schemas() {
            let branch = root_state.remove(&schema.name).unwrap_or_default();
            current.insert(schema.name.clone(), branch);
        }

        Self {
            registry,
            current,
            log: MutationLog::new(),
            derived: HashMap::new(),
            phase: Phase::Open,
        }
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// True while the session accepts mutations.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// The current (pre-fold) branch for an entity.
    pub fn current_state(&self, entity: &str) -> SessionResult<&Branch> {
        self.current
            .get(entity)
            .ok_or_else(|| SessionError::unknown_entity(entity))
    }

    /// Append a mutation record to the log.
    ///
    /// Fails with [`SessionError::Closed`] once finalized and with
    /// [`SessionError::UnknownEntity`] when the target has no schema;
    /// shape validation happens here so the later fold never has to.
    pub fn add_mutation(&mut self, mutation: Mutation) -> SessionResult<()> {
        if self.phase == Phase::Finalized {
            return Err(SessionError::Closed);
        }
        if !self.registry.contains(&mutation.entity) {
            return Err(SessionError::unknown_entity(&mutation.entity));
        }

        self.derived.remove(&mutation.entity);
        self.log.append(mutation);
        Ok(())
    }

    /// The recorded mutations targeting one entity, in append order.
    pub fn mutations_for(&self, entity: &str) -> Vec<&Mutation> {
        self.log.for_entity(entity).collect()
    }

    /// The full mutation log.
    pub fn log(&self) -> &MutationLog {
        &self.log
    }

    /// Derive the entity's next branch: its mutation subsequence folded
    /// over its current branch, in append order.
    ///
    /// Deterministic: the same current branch and subsequence always
    /// yield the same result, so a host reducer may re-invoke this with
    /// the same inputs. Once finalized, only subsequences already
    /// derived this cycle are readable.
    pub fn next_state(&mut self, entity: &str) -> SessionResult<Branch> {
        if let Some(derived) = self.derived.get(entity) {
            return Ok(derived.clone());
        }
        if self.phase == Phase::Finalized {
            return Err(SessionError::Closed);
        }

        let schema = self
            .registry
            .get(entity)
            .ok_or_else(|| SessionError::unknown_entity(entity))?;
        let current = self.current_state(entity)?;

        let mut next = current.clone();
        for mutation in self.log.for_entity(entity) {
            next = match &mutation.op {
                MutationOp::Create { payload } => next.insert(schema, payload.clone())?,
                MutationOp::Update { selector, updater } => {
                    next.update(schema, selector, updater)
                }
                MutationOp::Delete { selector } => next.delete(selector),
            };
        }

        self.derived.insert(entity.to_string(), next.clone());
        Ok(next)
    }

    /// Finalize the session: the hosting container has consumed every
    /// next state it needs. Idempotent; a finalized session never
    /// reopens.
    pub fn finalize(&mut self) {
        self.phase = Phase::Finalized;
    }
}
