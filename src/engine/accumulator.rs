// Execution engine for the accumulator

use crate::engine::errors::CalcError;
use crate::engine::history::{Entry, History};
use crate::engine::ops::Operation;

/// A running value plus the history of commands that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    /// Current result. NaN is a legal state and propagates.
    value: f64,

    /// Commands applied since the last `cancel`, excluding `repeat`
    history: History,
}

impl Accumulator {
    /// Create an accumulator holding `initial` with an empty history
    pub fn new(initial: f64) -> Self {
        Accumulator {
            value: initial,
            history: History::new(),
        }
    }

    /// Create an accumulator from an existing value and history
    pub fn with_history(value: f64, history: History) -> Self {
        Accumulator { value, history }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply one tokenized command and return the new value.
    ///
    /// On success the original tokens are recorded, unless the command was a
    /// `repeat`, or a `cancel`, which leaves the history empty. On failure
    /// nothing is recorded and, except for a `repeat` whose replay fails part
    /// way, the value is left untouched.
    pub fn apply<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<f64, CalcError> {
        if tokens.is_empty() {
            tracing::debug!("rejected empty command");
            return Err(CalcError::EmptyCommand);
        }

        let entry: Entry = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        let op = match self.exec(&entry) {
            Ok(op) => op,
            Err(e) => {
                tracing::debug!(command = ?entry, error = %e, "command rejected");
                return Err(e);
            }
        };

        tracing::debug!(command = ?entry, value = self.value, "command applied");
        if !matches!(op, Operation::Repeat | Operation::Cancel) {
            self.history.push(entry);
        }

        Ok(self.value)
    }

    /// Validate and run a single command without touching the history,
    /// except through `cancel` and `repeat` themselves.
    fn exec(&mut self, tokens: &[String]) -> Result<Operation, CalcError> {
        let name = tokens.first().ok_or(CalcError::EmptyCommand)?;
        let op = Operation::lookup(name)
            .ok_or_else(|| CalcError::UnknownOperation(name.clone()))?;

        // Operand-free operations ignore anything after the name
        let n = if op.takes_argument() {
            Self::parse_operand(name, tokens.get(1))?
        } else {
            0.0
        };

        match op {
            Operation::Add => self.value += n,
            Operation::Subtract => self.value -= n,
            Operation::Multiply => self.value *= n,
            Operation::Divide => self.divide(n)?,
            Operation::Repeat => self.repeat(n)?,
            Operation::Cancel => self.cancel(),
            Operation::Abs => self.abs(),
            Operation::Neg => self.neg(),
            Operation::Sqrt => self.value = self.value.sqrt(),
            Operation::Sqr => self.value *= self.value,
            Operation::Cubert => self.value = self.value.cbrt(),
            Operation::Cube => self.value = self.value * self.value * self.value,
        }

        Ok(op)
    }

    fn parse_operand(name: &str, arg: Option<&String>) -> Result<f64, CalcError> {
        let arg = arg.ok_or_else(|| CalcError::MissingArgument {
            op: name.to_string(),
        })?;
        arg.parse::<f64>().map_err(|_| CalcError::InvalidArgument {
            op: name.to_string(),
            arg: arg.clone(),
        })
    }

    fn divide(&mut self, n: f64) -> Result<(), CalcError> {
        if n == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        self.value /= n;
        Ok(())
    }

    fn cancel(&mut self) {
        self.value = 0.0;
        self.history.clear();
    }

    fn abs(&mut self) {
        if self.value < 0.0 {
            self.neg();
        }
    }

    fn neg(&mut self) {
        self.value = -self.value;
    }

    /// Replay the whole history, in order.
    ///
    /// `count` only gates the replay: at least `count` entries must exist, but
    /// every entry is replayed regardless. Entries replayed before a failing
    /// one keep their effect on the value. On success the replayed entries are
    /// appended to the history again.
    fn repeat(&mut self, count: f64) -> Result<(), CalcError> {
        if count.is_nan() || count < 1.0 {
            return Err(CalcError::InvalidRepeatCount { count });
        }

        // Truncates toward zero, saturating for huge counts.
        let requested = count as usize;
        if self.history.len() < requested {
            return Err(CalcError::InsufficientHistory {
                available: self.history.len(),
                requested,
            });
        }

        let replay = self.history.entries().to_vec();
        for (index, entry) in replay.iter().enumerate() {
            tracing::trace!(index, command = ?entry, "replaying");
            self.exec(entry)
                .map_err(|e| CalcError::ReplayFailed(Box::new(e)))?;
        }

        self.history.extend(replay);
        Ok(())
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(0.0)
    }
}
