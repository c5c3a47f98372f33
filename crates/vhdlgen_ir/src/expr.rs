//! Expressions of the source IR.

use crate::ids::SignalId;
use serde::{Deserialize, Serialize};

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Bitwise NOT (`~`).
    Not,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Bitwise AND (`&`).
    And,
    /// Bitwise OR (`|`).
    Or,
    /// Bitwise XOR (`^`).
    Xor,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    Ne,
}

/// A source expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expr {
    /// A signal of the enclosing module.
    Signal(SignalId),
    /// A sized bit literal, MSB first, e.g. `"01x1"`.
    Number(String),
    /// A string literal.
    Str(String),
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
}
