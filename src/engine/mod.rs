//! Accumulator engine
//!
//! This module holds the only stateful part of the program:
//! - [`accumulator`]: the running value and the `apply` entry point
//! - [`ops`]: the closed set of operations and their name lookup
//! - [`history`]: the ordered record of applied commands used by `repeat`
//! - [`errors`]: failures reported by `apply`
//!
//! # Execution Model
//!
//! A command is a sequence of tokens: an operation name, matched without
//! regard to case, and for `add`, `subtract`, `multiply`, `divide` and
//! `repeat` a numeric operand. Every successful command other than `repeat`
//! is appended to the history verbatim.
//!
//! `repeat n` requires at least `n` recorded commands and then replays the
//! *entire* history through the same dispatch used for direct commands,
//! appending the replayed commands to the history once they all succeed.

pub mod accumulator;
pub mod errors;
pub mod history;
pub mod ops;

pub use accumulator::Accumulator;
pub use errors::CalcError;
pub use history::{Entry, History};
pub use ops::Operation;
