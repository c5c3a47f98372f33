//! Errors raised while building VHDL syntax.

use thiserror::Error;

/// A rejected construction or conversion of a syntax node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// No conversion rule exists from one type to another for this expression.
    #[error("cannot cast expression of type `{from}` to `{to}`")]
    UnsupportedCast {
        /// Rendered source type.
        from: String,
        /// Rendered target type.
        to: String,
    },

    /// A bit literal contained a character outside `0`, `1`, `X`, `Z`.
    #[error("malformed bit literal \"{literal}\": unexpected character `{ch}`")]
    MalformedLiteral {
        /// The literal text as given.
        literal: String,
        /// The first offending character.
        ch: char,
    },

    /// A bit literal with no bits.
    #[error("empty bit literal")]
    EmptyLiteral,

    /// A concurrent statement was attached to a second architecture.
    #[error("concurrent statement already belongs to an architecture")]
    ParentAlreadySet,
}
