//! Behavioral processes (`initial` and `always` blocks).

use crate::ids::{ProcessId, ScopeId};
use crate::stmt::Statement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a process body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessKind {
    /// Runs once at time zero and never again.
    Initial,
    /// Re-runs forever, usually gated by an event control.
    Always,
}

impl ProcessKind {
    /// The source keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            ProcessKind::Initial => "initial",
            ProcessKind::Always => "always",
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A process with a single root statement, owned by exactly one scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// This process's own ID.
    pub id: ProcessId,
    /// Run-once or triggered.
    pub kind: ProcessKind,
    /// The scope the process is declared in.
    pub scope: ScopeId,
    /// The root statement of the body.
    pub body: Statement,
}
