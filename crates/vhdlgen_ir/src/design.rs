//! Top-level container of the source IR.

use crate::ids::{ProcessId, ScopeId, SignalId};
use crate::process::Process;
use crate::scope::{Scope, Signal};
use serde::{Deserialize, Serialize};
use vhdlgen_common::{Arena, GenResult, Interner, InternalError};

/// The whole source design: the scope forest and every process in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Design {
    /// All scopes, parents before children.
    pub scopes: Arena<ScopeId, Scope>,
    /// All processes, in the order the front end produced them.
    pub processes: Arena<ProcessId, Process>,
    /// Scopes with no parent, i.e. the top-level instances.
    pub roots: Vec<ScopeId>,
}

impl Design {
    /// Creates an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a scope.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    /// Returns a process.
    pub fn process(&self, id: ProcessId) -> &Process {
        &self.processes[id]
    }

    /// Returns a signal of a scope, or `None` if the ID is out of range.
    pub fn signal(&self, scope: ScopeId, signal: SignalId) -> Option<&Signal> {
        self.scopes.try_get(scope)?.signals.try_get(signal)
    }

    /// Returns the dot-separated hierarchical path of a scope, e.g. `top.u0`.
    pub fn qualified_name(&self, id: ScopeId, interner: &Interner) -> String {
        let mut parts = Vec::new();
        let mut cur = Some(id);
        while let Some(sid) = cur {
            let scope = self.scope(sid);
            parts.push(interner.resolve(scope.name));
            cur = scope.parent;
        }
        parts.reverse();
        parts.join(".")
    }

    /// Returns every module scope, depth-first and parents first, starting
    /// from the roots in order.
    pub fn module_scopes(&self) -> Vec<ScopeId> {
        let mut out = Vec::new();
        let mut stack: Vec<ScopeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let scope = self.scope(id);
            if scope.is_module() {
                out.push(id);
            }
            stack.extend(scope.children.iter().rev().copied());
        }
        out
    }

    /// Returns the nearest enclosing module scope of `id` (itself included).
    pub fn enclosing_module(&self, id: ScopeId) -> Option<ScopeId> {
        let mut cur = Some(id);
        while let Some(sid) = cur {
            let scope = self.scope(sid);
            if scope.is_module() {
                return Some(sid);
            }
            cur = scope.parent;
        }
        None
    }

    /// Checks that the design is a well-formed scope forest.
    ///
    /// Every stored ID must point inside its arena and each scope and
    /// process must record its own position. Parent and child links must
    /// agree, roots have no parent, and every scope is reached exactly once
    /// from the roots, so walking parents or children always terminates.
    /// Signals must be at least one bit wide.
    ///
    /// A design deserialized from disk is checked once up front so the rest
    /// of the pipeline may index without bounds checks.
    pub fn check_links(&self) -> GenResult<()> {
        for (id, scope) in self.scopes.iter() {
            if scope.id != id {
                return Err(InternalError::new(format!(
                    "scope #{} records id #{}",
                    id.as_raw(),
                    scope.id.as_raw()
                )));
            }
            if let Some(parent) = scope.parent {
                let parent_scope = self.linked(id, parent)?;
                if !parent_scope.children.contains(&id) {
                    return Err(InternalError::new(format!(
                        "scope #{} names #{} as parent but is not one of its children",
                        id.as_raw(),
                        parent.as_raw()
                    )));
                }
            }
            for &child in &scope.children {
                if self.linked(id, child)?.parent != Some(id) {
                    return Err(InternalError::new(format!(
                        "child #{} of scope #{} records a different parent",
                        child.as_raw(),
                        id.as_raw()
                    )));
                }
            }
            for (sig_id, signal) in scope.signals.iter() {
                if signal.width == 0 {
                    return Err(InternalError::new(format!(
                        "signal #{} of scope #{} has zero width",
                        sig_id.as_raw(),
                        id.as_raw()
                    )));
                }
            }
        }
        self.check_forest()?;
        for (id, proc) in self.processes.iter() {
            if proc.id != id || self.scopes.try_get(proc.scope).is_none() {
                return Err(InternalError::new(format!(
                    "process #{} has a dangling scope or id",
                    id.as_raw()
                )));
            }
        }
        Ok(())
    }

    fn linked(&self, from: ScopeId, to: ScopeId) -> GenResult<&Scope> {
        self.scopes.try_get(to).ok_or_else(|| {
            InternalError::new(format!(
                "scope #{} links to missing scope #{}",
                from.as_raw(),
                to.as_raw()
            ))
        })
    }

    /// Every scope reachable from a parentless root exactly once.
    fn check_forest(&self) -> GenResult<()> {
        let mut seen = vec![false; self.scopes.len()];
        let mut stack = Vec::new();
        for &root in &self.roots {
            let scope = self.scopes.try_get(root).ok_or_else(|| {
                InternalError::new(format!("root scope #{} does not exist", root.as_raw()))
            })?;
            if scope.parent.is_some() {
                return Err(InternalError::new(format!(
                    "root scope #{} has a parent",
                    root.as_raw()
                )));
            }
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let slot = &mut seen[id.as_raw() as usize];
            if *slot {
                return Err(InternalError::new(format!(
                    "scope #{} is reached twice from the roots",
                    id.as_raw()
                )));
            }
            *slot = true;
            stack.extend(self.scope(id).children.iter().copied());
        }
        if let Some(pos) = seen.iter().position(|s| !s) {
            return Err(InternalError::new(format!(
                "scope #{pos} is not reachable from any root"
            )));
        }
        Ok(())
    }
}
