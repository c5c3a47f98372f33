//! Entities: the public face of a generated design unit.

use crate::decl::Decl;
use crate::ids::{ArchId, EntityId};

/// A VHDL entity, paired with exactly one architecture.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    name: String,
    derived_from: String,
    arch: ArchId,
    ports: Vec<Decl>,
    packages: Vec<String>,
}

impl Entity {
    pub(crate) fn new(
        id: EntityId,
        name: impl Into<String>,
        derived_from: impl Into<String>,
        arch: ArchId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            derived_from: derived_from.into(),
            arch,
            ports: Vec::new(),
            packages: Vec::new(),
        }
    }

    /// This entity's own ID.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The entity name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hierarchical path of the source instance this entity was built from.
    ///
    /// Only that instance's processes are translated into the architecture;
    /// other instances of the same module share the result.
    pub fn derived_from(&self) -> &str {
        &self.derived_from
    }

    /// The architecture implementing this entity.
    pub fn arch(&self) -> ArchId {
        self.arch
    }

    /// Ports in declaration order.
    pub fn ports(&self) -> &[Decl] {
        &self.ports
    }

    /// Appends a port.
    pub fn add_port(&mut self, port: Decl) {
        self.ports.push(port);
    }

    /// Packages named in `use` clauses, e.g. `ieee.std_logic_1164.all`.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Records that the design unit needs `package`; repeated calls are no-ops.
    pub fn requires_package(&mut self, package: &str) {
        if !self.packages.iter().any(|p| p == package) {
            self.packages.push(package.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_package_is_idempotent() {
        let mut ent = Entity::new(EntityId::from_raw(0), "top", "top", ArchId::from_raw(0));
        ent.requires_package("ieee.std_logic_1164.all");
        ent.requires_package("std.textio.all");
        ent.requires_package("ieee.std_logic_1164.all");
        assert_eq!(ent.packages(), ["ieee.std_logic_1164.all", "std.textio.all"]);
    }

    #[test]
    fn accessors() {
        let ent = Entity::new(EntityId::from_raw(3), "sub", "top.u0", ArchId::from_raw(3));
        assert_eq!(ent.name(), "sub");
        assert_eq!(ent.derived_from(), "top.u0");
        assert_eq!(ent.arch(), ArchId::from_raw(3));
        assert!(ent.ports().is_empty());
    }
}
