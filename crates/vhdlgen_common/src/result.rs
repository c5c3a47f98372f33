//! Internal-consistency error type.

/// Result type for operations whose only failure mode is a broken invariant.
pub type GenResult<T> = Result<T, InternalError>;

/// A violated internal invariant, i.e. a bug upstream of the failing call.
///
/// Raised when, for example, a process is found outside a module scope or a
/// module scope was never elaborated into an entity. These abort the whole
/// run; they are never reported as user errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal compiler error: {message}")]
pub struct InternalError {
    /// Description of the violated invariant.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
