//! Lookup table from module definitions to generated entities.

use std::collections::HashMap;
use vhdlgen_common::{GenResult, InternalError};
use vhdlgen_ir::SignalId;
use vhdlgen_vhdl::EntityId;

/// Maps each module definition name to the entity generated for it, and
/// each signal of that module to its VHDL name.
///
/// Filled during elaboration and only read afterwards. Entries are never
/// removed or replaced. Module names are Verilog names and compare
/// case-sensitively; the entity names they map to are already unique.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    by_name: HashMap<String, EntityId>,
    signals: HashMap<EntityId, Vec<String>>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the entity for module `name`.
    ///
    /// Registering a name twice is an elaboration bug.
    pub fn register(&mut self, name: &str, entity: EntityId) -> GenResult<()> {
        if let Some(existing) = self.by_name.get(name) {
            return Err(InternalError::new(format!(
                "module `{name}` already has entity #{}",
                existing.as_raw()
            )));
        }
        self.by_name.insert(name.to_string(), entity);
        Ok(())
    }

    /// Records the VHDL names of an entity's signals, indexed by
    /// [`SignalId`] of the scope the entity was derived from.
    pub fn set_signal_names(&mut self, entity: EntityId, names: Vec<String>) -> GenResult<()> {
        if self.signals.contains_key(&entity) {
            return Err(InternalError::new(format!(
                "signal names of entity #{} recorded twice",
                entity.as_raw()
            )));
        }
        self.signals.insert(entity, names);
        Ok(())
    }

    /// Returns the VHDL name of `signal` in `entity`.
    pub fn signal_name(&self, entity: EntityId, signal: SignalId) -> Option<&str> {
        self.signal_names(entity)
            .get(signal.as_raw() as usize)
            .map(String::as_str)
    }

    /// All recorded signal names of `entity`; empty if none were recorded.
    pub fn signal_names(&self, entity: EntityId) -> &[String] {
        self.signals.get(&entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the entity generated for module `name`.
    pub fn lookup(&self, name: &str) -> Option<EntityId> {
        self.by_name.get(name).copied()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
