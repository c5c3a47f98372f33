//! Architectures: the declarations and concurrent statements of a design unit.

use crate::decl::Decl;
use crate::error::AstError;
use crate::ids::{ArchId, EntityId};
use crate::stmt::{ConcStmt, Process};

/// The body of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Architecture {
    id: ArchId,
    name: String,
    entity: EntityId,
    decls: Vec<Decl>,
    stmts: Vec<ConcStmt>,
}

impl Architecture {
    pub(crate) fn new(id: ArchId, name: impl Into<String>, entity: EntityId) -> Self {
        Self {
            id,
            name: name.into(),
            entity,
            decls: Vec::new(),
            stmts: Vec::new(),
        }
    }

    /// This architecture's own ID.
    pub fn id(&self) -> ArchId {
        self.id
    }

    /// The architecture name, e.g. `Behavioural`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity this architecture implements.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Declarations in order.
    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// Concurrent statements in order.
    pub fn stmts(&self) -> &[ConcStmt] {
        &self.stmts
    }

    /// Appends a declaration.
    ///
    /// Names must be unique within the architecture, but this is not
    /// checked here: callers that may repeat a name (component declarations
    /// for a module instantiated more than once) test
    /// [`has_declaration`](Self::has_declaration) first.
    pub fn add_decl(&mut self, decl: Decl) {
        debug_assert!(
            !self.has_declaration(decl.name()),
            "duplicate architecture declaration `{}`",
            decl.name()
        );
        self.decls.push(decl);
    }

    /// Returns `true` if anything named `name` is declared.
    pub fn has_declaration(&self, name: &str) -> bool {
        self.get_decl(name).is_some()
    }

    /// Returns `true` if a component named `name` is declared.
    pub fn has_declared_component(&self, name: &str) -> bool {
        self.get_decl(name).is_some_and(Decl::is_component)
    }

    /// Looks up a declaration by name.
    pub fn get_decl(&self, name: &str) -> Option<&Decl> {
        self.decls.iter().find(|d| d.is_named(name))
    }

    /// Attaches a concurrent statement and returns its index.
    ///
    /// This is the only way a statement gets its parent set; a statement
    /// that already has one is rejected.
    pub fn add_stmt(&mut self, mut stmt: ConcStmt) -> Result<usize, AstError> {
        stmt.set_parent(self.id)?;
        self.stmts.push(stmt);
        Ok(self.stmts.len() - 1)
    }

    /// The process at statement index `index`, if that statement is one.
    pub fn process_mut(&mut self, index: usize) -> Option<&mut Process> {
        self.stmts.get_mut(index)?.as_process_mut()
    }

    /// Iterates over the processes in statement order.
    pub fn processes(&self) -> impl Iterator<Item = &Process> {
        self.stmts.iter().filter_map(ConcStmt::as_process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDb;

    fn make_arch() -> Architecture {
        Architecture::new(ArchId::from_raw(0), "Behavioural", EntityId::from_raw(0))
    }

    #[test]
    fn declarations_lookup() {
        let mut db = TypeDb::new();
        let mut arch = make_arch();
        arch.add_decl(Decl::signal("cnt", db.vector(4)));
        assert!(arch.has_declaration("cnt"));
        assert!(arch.has_declaration("CNT"));
        assert!(!arch.has_declared_component("cnt"));
        assert!(arch.get_decl("missing").is_none());
    }

    #[test]
    fn add_stmt_sets_parent() {
        let mut arch = make_arch();
        let idx = arch.add_stmt(ConcStmt::process(Process::new(""))).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(arch.stmts()[0].parent(), Some(ArchId::from_raw(0)));
        assert!(arch.process_mut(idx).is_some());
        assert_eq!(arch.processes().count(), 1);
    }

    #[test]
    fn attached_statement_cannot_move() {
        let mut arch = make_arch();
        arch.add_stmt(ConcStmt::instance("u0", "sub")).unwrap();
        let moved = arch.stmts()[0].clone();
        let mut other = Architecture::new(ArchId::from_raw(1), "Behavioural", EntityId::from_raw(1));
        assert_eq!(other.add_stmt(moved), Err(AstError::ParentAlreadySet));
        assert!(other.stmts().is_empty());
    }

    #[test]
    fn process_mut_skips_instances() {
        let mut arch = make_arch();
        let idx = arch.add_stmt(ConcStmt::instance("u0", "sub")).unwrap();
        assert!(arch.process_mut(idx).is_none());
        assert!(arch.process_mut(5).is_none());
    }
}
