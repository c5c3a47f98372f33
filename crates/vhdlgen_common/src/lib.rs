//! Shared foundational types used across the vhdlgen translator.
//!
//! This crate provides interned identifiers for source-side names, the dense
//! [`Arena`] used by both the source IR and the VHDL syntax tree, the
//! four-state bit alphabet shared by source literals and VHDL bit literals,
//! and the internal-error result type.

#![warn(missing_docs)]

pub mod arena;
pub mod ident;
pub mod logic;
pub mod result;

pub use arena::{Arena, ArenaId};
pub use ident::{Ident, Interner};
pub use logic::Logic;
pub use result::{GenResult, InternalError};
