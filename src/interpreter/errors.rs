//! Evaluation error types
//!
//! All evaluation errors are fatal: the run aborts, the error is surfaced to
//! the caller, and the symbol table is left untouched.

use std::fmt;

/// Errors that can occur while evaluating a parsed formula
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An identifier was read before any assignment defined it.
    UndefinedVariable { name: String },

    /// The right operand of a division evaluated to zero. Reported as an
    /// error rather than producing an infinity.
    DivisionByZero,

    /// A numeric literal produced by the parser failed to parse. Internal
    /// consistency failure, not a user error.
    MalformedLiteral { text: String },

    /// The left side of an assignment node was not an identifier. Internal
    /// consistency failure; the parser only builds identifier targets.
    InvalidAssignmentTarget,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{}'", name)
            }
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::MalformedLiteral { text } => {
                write!(f, "Internal error: malformed numeric literal '{}'", text)
            }
            EvalError::InvalidAssignmentTarget => {
                write!(f, "Internal error: assignment target is not an identifier")
            }
        }
    }
}

impl std::error::Error for EvalError {}
