//! Hierarchical scopes and the signals declared in them.

use crate::ids::{ScopeId, SignalId};
use serde::{Deserialize, Serialize};
use vhdlgen_common::{Arena, Ident};

/// What kind of construct a scope came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    /// An instance of a module.
    Module,
    /// A task body.
    Task,
    /// A function body.
    Function,
    /// A named `begin … end` block.
    Begin,
    /// A named `fork … join` block.
    Fork,
}

/// Direction of a module port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// Data flows into the module.
    Input,
    /// Data flows out of the module.
    Output,
    /// Bidirectional.
    InOut,
}

/// A net or variable declared in a scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// The declared name.
    pub name: Ident,
    /// Width in bits; `1` is a scalar.
    pub width: u32,
    /// Set when the signal backs a port of its module.
    #[serde(default)]
    pub port: Option<PortDirection>,
}

/// One node of the instance hierarchy.
///
/// Every instantiation of a module gets its own scope. All instances of the
/// same module share a definition name (`def_name`) but differ in their
/// simple `name` and therefore in their qualified path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scope {
    /// This scope's own ID.
    pub id: ScopeId,
    /// The scope kind.
    pub kind: ScopeKind,
    /// The instance (or block) name.
    pub name: Ident,
    /// The definition name, e.g. the module name for a module instance.
    pub def_name: Ident,
    /// The enclosing scope; `None` for a root.
    pub parent: Option<ScopeId>,
    /// Directly nested scopes in declaration order.
    #[serde(default)]
    pub children: Vec<ScopeId>,
    /// Signals declared in this scope.
    #[serde(default)]
    pub signals: Arena<SignalId, Signal>,
}

impl Scope {
    /// Returns `true` for module instance scopes.
    pub fn is_module(&self) -> bool {
        self.kind == ScopeKind::Module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scope() -> Scope {
        let mut signals = Arena::new();
        signals.alloc(Signal {
            name: Ident::from_raw(10),
            width: 1,
            port: Some(PortDirection::Input),
        });
        signals.alloc(Signal {
            name: Ident::from_raw(11),
            width: 8,
            port: None,
        });
        Scope {
            id: ScopeId::from_raw(0),
            kind: ScopeKind::Module,
            name: Ident::from_raw(1),
            def_name: Ident::from_raw(2),
            parent: None,
            children: Vec::new(),
            signals,
        }
    }

    #[test]
    fn module_scope_keeps_signal_order() {
        let scope = make_scope();
        assert!(scope.is_module());
        let names: Vec<_> = scope.signals.values().map(|s| s.name.as_raw()).collect();
        assert_eq!(names, vec![10, 11]);
        assert_eq!(scope.signals[SignalId::from_raw(0)].port, Some(PortDirection::Input));
    }

    #[test]
    fn signal_port_defaults_to_none() {
        let sig: Signal = serde_json::from_str(r#"{"name":3,"width":4}"#).unwrap();
        assert!(sig.port.is_none());
        assert_eq!(sig.width, 4);
    }
}
