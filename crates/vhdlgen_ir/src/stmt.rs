//! Statements of a process body.
//!
//! [`Statement`] is an arbitrarily nested control-flow tree; the translator
//! flattens it into the restricted sequential statement forms of VHDL.

use crate::expr::Expr;
use crate::ids::SignalId;
use serde::{Deserialize, Serialize};

/// A signal edge in an event control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Rising edge (`posedge`).
    Posedge,
    /// Falling edge (`negedge`).
    Negedge,
}

/// One entry of an event control list, e.g. `posedge clk` or plain `a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The signal being watched.
    pub signal: SignalId,
    /// The edge, or `None` for any change.
    #[serde(default)]
    pub edge: Option<Edge>,
}

/// A behavioral statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Statement {
    /// A sequential block.
    Block(Vec<Statement>),
    /// An assignment to a signal of the enclosing module.
    Assign {
        /// The assigned signal.
        target: SignalId,
        /// The assigned value.
        value: Expr,
        /// `true` for `<=`, `false` for `=`.
        #[serde(default)]
        nonblocking: bool,
    },
    /// `#ns body`: a delay in nanoseconds before `body` runs.
    Delay {
        /// The delay in nanoseconds.
        ns: u64,
        /// The delayed statement.
        body: Box<Statement>,
    },
    /// `@(events) body`: suspend until one of the events fires.
    Wait {
        /// The event list.
        events: Vec<Event>,
        /// The statement run after the event.
        body: Box<Statement>,
    },
    /// A two-way conditional.
    If {
        /// The condition.
        condition: Expr,
        /// Taken when the condition holds.
        then_body: Box<Statement>,
        /// Taken otherwise.
        #[serde(default)]
        else_body: Option<Box<Statement>>,
    },
    /// `$display(format, args…)`.
    Display {
        /// The literal text.
        format: String,
        /// Values printed after the text.
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// `$finish`.
    Finish,
    /// An empty statement.
    Nop,
}
