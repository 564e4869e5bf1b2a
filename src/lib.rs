//! # Introduction
//!
//! Tally is an interactive accumulator: it holds one running `f64`, applies
//! named commands to it a line at a time, and prints the result after each
//! one. Every applied command is remembered so that `repeat` can replay the
//! session so far.
//!
//! ## Pipeline
//!
//! ```text
//! stdin → Session (tokenize, exit) → Accumulator::apply → value | CalcError → stdout | stderr
//! ```
//!
//! 1. [`shell`] — reads lines, splits them into tokens, prints results and
//!    errors. Holds no arithmetic.
//! 2. [`engine`] — the [`engine::Accumulator`], its [`engine::History`] and
//!    the closed [`engine::Operation`] set.
//! 3. [`cli`] — command-line flags for the binary.
//!
//! ## Commands
//!
//! With an operand: `add`, `subtract`, `multiply`, `divide`, `repeat`.
//! Without: `cancel`, `abs`, `neg`, `sqrt`, `sqr`, `cubert`, `cube`.
//! Names are case-insensitive; `exit` ends the session.

pub mod cli;
pub mod constants;
pub mod engine;
pub mod shell;
