//! VHDL type descriptors and the type database that interns them.
//!
//! Expressions and declarations never own a type; they hold a [`TypeId`]
//! into the design-wide [`TypeDb`], so one descriptor is shared by every
//! node that uses it and outlives all of them.

use crate::ids::TypeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A VHDL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VhdlType {
    /// `std_logic`.
    StdLogic,
    /// `std_logic_vector(width-1 downto 0)`.
    StdLogicVector {
        /// Number of bits; at least one.
        width: u32,
    },
    /// `String`.
    String,
    /// `Boolean`.
    Boolean,
    /// `Integer`.
    Integer,
    /// `Time`.
    Time,
    /// `Line` from `std.textio`.
    Line,
    /// `Text` from `std.textio`, the type of the `Output` file.
    Text,
}

impl VhdlType {
    /// Returns the width of bit types, `None` for everything else.
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            VhdlType::StdLogic => Some(1),
            VhdlType::StdLogicVector { width } => Some(*width),
            _ => None,
        }
    }
}

impl fmt::Display for VhdlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VhdlType::StdLogic => f.write_str("std_logic"),
            VhdlType::StdLogicVector { width } => {
                write!(f, "std_logic_vector({} downto 0)", width.saturating_sub(1))
            }
            VhdlType::String => f.write_str("String"),
            VhdlType::Boolean => f.write_str("Boolean"),
            VhdlType::Integer => f.write_str("Integer"),
            VhdlType::Time => f.write_str("Time"),
            VhdlType::Line => f.write_str("Line"),
            VhdlType::Text => f.write_str("Text"),
        }
    }
}

/// Interned VHDL types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDb {
    types: Vec<VhdlType>,
}

impl TypeDb {
    /// Creates an empty type database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a type, returning the existing ID if it was seen before.
    pub fn intern(&mut self, ty: VhdlType) -> TypeId {
        if let Some(pos) = self.types.iter().position(|t| *t == ty) {
            return TypeId::from_raw(pos as u32);
        }
        let id = TypeId::from_raw(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    /// Returns the type with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not produced by this database.
    pub fn get(&self, id: TypeId) -> &VhdlType {
        &self.types[id.as_raw() as usize]
    }

    /// Renders a type as it appears in declarations.
    pub fn name(&self, id: TypeId) -> String {
        self.get(id).to_string()
    }

    /// `std_logic`.
    pub fn std_logic(&mut self) -> TypeId {
        self.intern(VhdlType::StdLogic)
    }

    /// `std_logic_vector` of `width` bits.
    pub fn vector(&mut self, width: u32) -> TypeId {
        self.intern(VhdlType::StdLogicVector { width })
    }

    /// The type of a signal of `width` bits: `std_logic` for one bit, a
    /// vector otherwise.
    pub fn bits(&mut self, width: u32) -> TypeId {
        if width == 1 {
            self.std_logic()
        } else {
            self.vector(width)
        }
    }

    /// `String`.
    pub fn string(&mut self) -> TypeId {
        self.intern(VhdlType::String)
    }

    /// `Boolean`.
    pub fn boolean(&mut self) -> TypeId {
        self.intern(VhdlType::Boolean)
    }

    /// `Integer`.
    pub fn integer(&mut self) -> TypeId {
        self.intern(VhdlType::Integer)
    }

    /// `Time`.
    pub fn time(&mut self) -> TypeId {
        self.intern(VhdlType::Time)
    }

    /// `Line`.
    pub fn line(&mut self) -> TypeId {
        self.intern(VhdlType::Line)
    }

    /// `Text`.
    pub fn text(&mut self) -> TypeId {
        self.intern(VhdlType::Text)
    }

    /// Returns the number of interned types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types have been interned.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
