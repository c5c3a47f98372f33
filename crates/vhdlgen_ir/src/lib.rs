//! The source-side intermediate representation consumed by the translator.
//!
//! A [`Design`] is a forest of hierarchical [`Scope`]s (module instances,
//! tasks, named blocks) plus the behavioral [`Process`]es that live in them.
//! The translator only ever reads it; it is produced by a front end (or
//! deserialized from a [`DesignFile`]) and built in tests with
//! [`DesignBuilder`].

#![warn(missing_docs)]

pub mod builder;
pub mod design;
pub mod expr;
pub mod file;
pub mod ids;
pub mod process;
pub mod scope;
pub mod stmt;

pub use builder::DesignBuilder;
pub use design::Design;
pub use expr::{BinaryOp, Expr, UnaryOp};
pub use file::DesignFile;
pub use ids::{ProcessId, ScopeId, SignalId};
pub use process::{Process, ProcessKind};
pub use scope::{PortDirection, Scope, ScopeKind, Signal};
pub use stmt::{Edge, Event, Statement};
