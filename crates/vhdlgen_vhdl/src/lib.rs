//! VHDL abstract syntax tree and text emission.
//!
//! The tree is rooted in a [`VhdlDesign`], which owns every [`Entity`] and
//! [`Architecture`] in arenas and interns every type in a [`TypeDb`].
//! Entities and architectures are paired 1:1 and refer to each other by ID.
//! Concurrent statements are owned by their architecture and remember it as
//! a non-owning [`ArchId`] back-reference, set once when they are attached.
//!
//! Rendering is done by [`emit::emit_design`], a match over the closed node
//! families below.

#![warn(missing_docs)]

pub mod arch;
pub mod decl;
pub mod design;
pub mod emit;
pub mod entity;
pub mod error;
pub mod expr;
pub mod ids;
pub mod names;
pub mod stmt;
pub mod types;

pub use arch::Architecture;
pub use decl::{Decl, DeclKind, PortMode};
pub use design::VhdlDesign;
pub use emit::{emit_design, EmitOptions, Emitter};
pub use entity::Entity;
pub use error::AstError;
pub use expr::{BinaryOp, Expr, UnaryOp, VarRef};
pub use ids::{ArchId, EntityId, TypeId};
pub use names::{legalize, NameSet};
pub use stmt::{ConcStmt, ConcStmtKind, Process, SeqBlock, SeqStmt, WaitKind};
pub use types::{TypeDb, VhdlType};
