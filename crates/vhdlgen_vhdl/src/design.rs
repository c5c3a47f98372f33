//! The root of the VHDL tree.

use crate::arch::Architecture;
use crate::entity::Entity;
use crate::ids::{ArchId, EntityId};
use crate::types::TypeDb;
use vhdlgen_common::Arena;

/// Every generated design unit plus the types they use.
///
/// Entity `n` and architecture `n` are always created together, so the
/// arenas stay the same length.
#[derive(Debug, Default)]
pub struct VhdlDesign {
    /// Interned types shared by all expressions and declarations.
    pub types: TypeDb,
    /// Entities in creation order.
    pub entities: Arena<EntityId, Entity>,
    /// Architectures in creation order.
    pub archs: Arena<ArchId, Architecture>,
}

impl VhdlDesign {
    /// Creates an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entity together with its (empty) architecture.
    pub fn new_entity(&mut self, name: &str, derived_from: &str, arch_name: &str) -> EntityId {
        let ent = self.entities.next_id();
        let arch = self.archs.alloc(Architecture::new(self.archs.next_id(), arch_name, ent));
        self.entities.alloc(Entity::new(ent, name, derived_from, arch))
    }

    /// Returns an entity.
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id]
    }

    /// Returns the architecture of an entity.
    pub fn arch_of(&self, id: EntityId) -> &Architecture {
        &self.archs[self.entities[id].arch()]
    }

    /// Borrows an entity and its architecture mutably at the same time.
    pub fn unit_mut(&mut self, id: EntityId) -> (&mut Entity, &mut Architecture) {
        let entity = &mut self.entities[id];
        let arch = &mut self.archs[entity.arch()];
        (entity, arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Decl;

    #[test]
    fn entity_and_arch_are_paired() {
        let mut design = VhdlDesign::new();
        let a = design.new_entity("top", "top", "Behavioural");
        let b = design.new_entity("sub", "top.u0", "rtl");
        assert_eq!(design.entities.len(), 2);
        assert_eq!(design.archs.len(), 2);
        assert_eq!(design.arch_of(b).entity(), b);
        assert_eq!(design.arch_of(b).name(), "rtl");
        assert_eq!(design.entity(a).arch(), design.arch_of(a).id());
    }

    #[test]
    fn unit_mut_splits_borrows() {
        let mut design = VhdlDesign::new();
        let sl = design.types.std_logic();
        let id = design.new_entity("top", "top", "Behavioural");
        let (ent, arch) = design.unit_mut(id);
        ent.requires_package("ieee.std_logic_1164.all");
        arch.add_decl(Decl::signal("q", sl));
        assert_eq!(design.entity(id).packages().len(), 1);
        assert!(design.arch_of(id).has_declaration("q"));
    }
}
