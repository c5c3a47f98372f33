//! Incremental construction of a [`Design`].

use crate::design::Design;
use crate::ids::{ProcessId, ScopeId, SignalId};
use crate::process::{Process, ProcessKind};
use crate::scope::{PortDirection, Scope, ScopeKind, Signal};
use crate::stmt::Statement;
use vhdlgen_common::{Arena, Interner};

/// Builds a [`Design`] while keeping parent/child links and IDs consistent.
pub struct DesignBuilder<'a> {
    interner: &'a Interner,
    design: Design,
}

impl<'a> DesignBuilder<'a> {
    /// Starts an empty design whose names are interned in `interner`.
    pub fn new(interner: &'a Interner) -> Self {
        Self {
            interner,
            design: Design::new(),
        }
    }

    /// Adds a top-level module instance.
    pub fn root_module(&mut self, name: &str, def_name: &str) -> ScopeId {
        let id = self.alloc_scope(None, ScopeKind::Module, name, def_name);
        self.design.roots.push(id);
        id
    }

    /// Adds a module instance below `parent`.
    pub fn module(&mut self, parent: ScopeId, name: &str, def_name: &str) -> ScopeId {
        self.child_scope(parent, ScopeKind::Module, name, def_name)
    }

    /// Adds a nested scope of any kind below `parent`.
    pub fn child_scope(
        &mut self,
        parent: ScopeId,
        kind: ScopeKind,
        name: &str,
        def_name: &str,
    ) -> ScopeId {
        let id = self.alloc_scope(Some(parent), kind, name, def_name);
        self.design.scopes[parent].children.push(id);
        id
    }

    /// Declares an internal signal.
    pub fn signal(&mut self, scope: ScopeId, name: &str, width: u32) -> SignalId {
        self.alloc_signal(scope, name, width, None)
    }

    /// Declares a signal that backs a port.
    pub fn port(
        &mut self,
        scope: ScopeId,
        name: &str,
        width: u32,
        direction: PortDirection,
    ) -> SignalId {
        self.alloc_signal(scope, name, width, Some(direction))
    }

    /// Adds a process to `scope`.
    pub fn process(&mut self, scope: ScopeId, kind: ProcessKind, body: Statement) -> ProcessId {
        let id = self.design.processes.next_id();
        self.design.processes.alloc(Process {
            id,
            kind,
            scope,
            body,
        })
    }

    /// Returns the finished design.
    pub fn finish(self) -> Design {
        self.design
    }

    fn alloc_scope(
        &mut self,
        parent: Option<ScopeId>,
        kind: ScopeKind,
        name: &str,
        def_name: &str,
    ) -> ScopeId {
        let id = self.design.scopes.next_id();
        self.design.scopes.alloc(Scope {
            id,
            kind,
            name: self.interner.get_or_intern(name),
            def_name: self.interner.get_or_intern(def_name),
            parent,
            children: Vec::new(),
            signals: Arena::new(),
        })
    }

    fn alloc_signal(
        &mut self,
        scope: ScopeId,
        name: &str,
        width: u32,
        port: Option<PortDirection>,
    ) -> SignalId {
        let name = self.interner.get_or_intern(name);
        self.design.scopes[scope]
            .signals
            .alloc(Signal { name, width, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_linked_both_ways() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        let u0 = b.module(top, "u0", "sub");
        let design = b.finish();
        assert_eq!(design.scope(top).children, vec![u0]);
        assert_eq!(design.scope(u0).parent, Some(top));
        assert_eq!(interner.resolve(design.scope(u0).def_name), "sub");
    }

    #[test]
    fn signals_and_ports() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        let clk = b.port(top, "clk", 1, PortDirection::Input);
        let cnt = b.signal(top, "cnt", 8);
        let design = b.finish();
        let scope = design.scope(top);
        assert_eq!(scope.signals[clk].port, Some(PortDirection::Input));
        assert_eq!(scope.signals[cnt].width, 8);
        assert_eq!(
            scope.signals.values().filter(|s| s.port.is_some()).count(),
            1
        );
    }

    #[test]
    fn process_records_own_id() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        let p0 = b.process(top, ProcessKind::Initial, Statement::Nop);
        let p1 = b.process(top, ProcessKind::Always, Statement::Nop);
        let design = b.finish();
        assert_eq!(design.process(p1).id, p1);
        assert_ne!(p0, p1);
    }
}
