//! Error types for the accumulator engine
//!
//! Every variant of [`CalcError`] is an ordinary, reported outcome of
//! [`Accumulator::apply`](super::Accumulator::apply). None of them is fatal to
//! the session; the shell prints the message and keeps reading.

use thiserror::Error;

/// Failures reported by the accumulator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// No tokens were supplied
    #[error("Invalid input: empty input")]
    EmptyCommand,

    /// The first token does not name a known operation
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// An operation that needs an operand was given none
    #[error("Invalid input: Operation `{op}` requires 1 argument.")]
    MissingArgument { op: String },

    /// The operand could not be parsed as a real number
    #[error("Invalid input: Operation `{op}` requires numeric argument.")]
    InvalidArgument { op: String, arg: String },

    #[error("Invalid input: Operation `Divide` does not accept 0 as argument")]
    DivisionByZero,

    /// `repeat` was given a count below one (or NaN)
    #[error("Invalid input: Operation `repeat` must have positive numeric argument, got {count}")]
    InvalidRepeatCount { count: f64 },

    /// `repeat` asked for more recorded operations than exist
    #[error(
        "Invalid input: Operation `repeat` cannot be executed. Current number of operation is {available}, got {requested}"
    )]
    InsufficientHistory { available: usize, requested: usize },

    /// A replayed entry failed; replay stopped at that entry
    #[error("Error while executing operation: {0}")]
    ReplayFailed(#[source] Box<CalcError>),
}

impl CalcError {
    /// The innermost failure, looking through any `ReplayFailed` wrappers
    pub fn root_cause(&self) -> &CalcError {
        match self {
            CalcError::ReplayFailed(inner) => inner.root_cause(),
            other => other,
        }
    }
}
