//! Errors raised while translating a design.

use thiserror::Error;
use vhdlgen_common::InternalError;
use vhdlgen_vhdl::AstError;

/// Why translation of a design stopped.
///
/// Everything except [`TranslateError::Internal`] means the input uses a
/// construct with no VHDL mapping. `Internal` means an upstream invariant
/// was broken and the input itself may be fine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A statement kind or form has no VHDL counterpart.
    #[error("unsupported statement: {0}")]
    UnsupportedStatement(String),

    /// An expression has no VHDL counterpart.
    #[error("unsupported expression: {0}")]
    UnsupportedExpression(String),

    /// A value cannot be converted to the type its context requires.
    #[error("cannot convert `{from}` to `{to}`")]
    UnsupportedCast {
        /// Rendered source type.
        from: String,
        /// Rendered target type.
        to: String,
    },

    /// A bit literal contained a character outside `0`, `1`, `x`, `z`.
    #[error("malformed literal \"{literal}\": unexpected character `{ch}`")]
    MalformedLiteral {
        /// The literal text.
        literal: String,
        /// The first offending character.
        ch: char,
    },

    /// A signal ID does not exist in the process's module.
    #[error("unknown signal #{signal} in `{scope}`")]
    UnknownSignal {
        /// Qualified name of the module scope.
        scope: String,
        /// Raw signal ID.
        signal: u32,
    },

    /// A broken invariant of an earlier pass.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl TranslateError {
    /// Returns `true` for internal-consistency faults.
    pub fn is_internal(&self) -> bool {
        matches!(self, TranslateError::Internal(_))
    }
}

impl From<AstError> for TranslateError {
    fn from(err: AstError) -> Self {
        match err {
            AstError::UnsupportedCast { from, to } => TranslateError::UnsupportedCast { from, to },
            AstError::MalformedLiteral { literal, ch } => {
                TranslateError::MalformedLiteral { literal, ch }
            }
            AstError::EmptyLiteral => TranslateError::UnsupportedExpression(err.to_string()),
            AstError::ParentAlreadySet => {
                TranslateError::Internal(InternalError::new(err.to_string()))
            }
        }
    }
}
