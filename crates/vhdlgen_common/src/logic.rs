//! The four-state bit alphabet shared by source literals and VHDL bit literals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single four-state bit value.
///
/// Source literals are spelled with `0`, `1`, `x`/`X`, `z`/`Z`; the VHDL
/// side always renders the canonical upper-case form used by `std_logic`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Logic {
    /// Driven low.
    Zero,
    /// Driven high.
    One,
    /// Unknown.
    X,
    /// High impedance.
    Z,
}

impl Logic {
    /// Parses one bit character, or returns `None` if it is not in the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Logic::Zero),
            '1' => Some(Logic::One),
            'x' | 'X' => Some(Logic::X),
            'z' | 'Z' => Some(Logic::Z),
            _ => None,
        }
    }

    /// Returns the canonical character for this value.
    pub fn to_char(self) -> char {
        match self {
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::X => 'X',
            Logic::Z => 'Z',
        }
    }

    /// Parses a whole bit string, MSB first.
    ///
    /// On failure returns the first character outside the alphabet.
    pub fn parse_bits(text: &str) -> Result<Vec<Logic>, char> {
        text.chars().map(|c| Logic::from_char(c).ok_or(c)).collect()
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
