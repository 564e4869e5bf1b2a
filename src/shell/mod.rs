//! Line-oriented front end for the accumulator
//!
//! The shell is deliberately thin: it reads one line at a time, splits it on
//! whitespace, intercepts `exit`, hands everything else to
//! [`Accumulator::apply`] and prints either the new value or the failure.
//! Engine failures never end the session.
//!
//! [`Session`] is generic over its streams so tests can drive it with
//! in-memory buffers.

use crate::constants::{DEFAULT_PROMPT, EXIT_COMMAND, RESULT_PRECISION};
use crate::engine::{Accumulator, CalcError};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

/// When to colour error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Colour only when the error stream is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Presentation settings for a session
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub prompt: String,
    /// Whether error messages are printed in red
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            color: false,
        }
    }
}

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit`
    Exit,
    /// The input stream was exhausted
    EndOfInput,
}

/// An interactive session: one accumulator bound to an input and two outputs
pub struct Session<R, W, E> {
    accumulator: Accumulator,
    input: R,
    output: W,
    errors: E,
    config: ShellConfig,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(
        accumulator: Accumulator,
        input: R,
        output: W,
        errors: E,
        config: ShellConfig,
    ) -> Self {
        Session {
            accumulator,
            input,
            output,
            errors,
            config,
        }
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Consume the session, returning the accumulator and both output streams
    pub fn into_parts(self) -> (Accumulator, W, E) {
        (self.accumulator, self.output, self.errors)
    }

    /// Prompt, read and handle lines until `exit` or end of input
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        tracing::debug!(initial = self.accumulator.value(), "session started");

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                return Ok(SessionEnd::EndOfInput);
            }

            if self.handle_line(&line)? == Control::Exit {
                tracing::debug!(value = self.accumulator.value(), "session ended by exit");
                return Ok(SessionEnd::Exit);
            }
        }
    }

    /// Handle a single input line, line terminator included or not
    pub fn handle_line(&mut self, line: &str) -> io::Result<Control> {
        let tokens = tokenize(line);
        if tokens.first() == Some(&EXIT_COMMAND) {
            return Ok(Control::Exit);
        }

        match self.accumulator.apply(&tokens) {
            Ok(value) => writeln!(self.output, "{:.*}", RESULT_PRECISION, value)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Control::Continue)
    }

    fn report(&mut self, error: &CalcError) -> io::Result<()> {
        if self.config.color {
            writeln!(self.errors, "{}", error.to_string().red())
        } else {
            writeln!(self.errors, "{}", error)
        }
    }
}

/// Split a line into command tokens. Line terminators count as whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_terminators() {
        assert_eq!(tokenize("add 1\n"), vec!["add", "1"]);
        assert_eq!(tokenize("add 1\r\n"), vec!["add", "1"]);
        assert_eq!(tokenize("  multiply\t 4  "), vec!["multiply", "4"]);
    }

    #[test]
    fn test_tokenize_blank_line() {
        assert!(tokenize("\n").is_empty());
        assert!(tokenize("").is_empty());
    }
}
