//! The closed set of accumulator operations
//!
//! Operation names are matched case-insensitively through a static lookup
//! table. Only the name is folded; operands are passed through untouched.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// An operation the accumulator knows how to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Cancel,
    Abs,
    Neg,
    Sqrt,
    Sqr,
    Cubert,
    Cube,
    Repeat,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Cancel,
        Operation::Abs,
        Operation::Neg,
        Operation::Sqrt,
        Operation::Sqr,
        Operation::Cubert,
        Operation::Cube,
        Operation::Repeat,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Cancel => "cancel",
            Operation::Abs => "abs",
            Operation::Neg => "neg",
            Operation::Sqrt => "sqrt",
            Operation::Sqr => "sqr",
            Operation::Cubert => "cubert",
            Operation::Cube => "cube",
            Operation::Repeat => "repeat",
        }
    }

    /// Whether the operation reads a numeric operand from the second token.
    /// Operations without one ignore any extra tokens.
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            Operation::Add
                | Operation::Subtract
                | Operation::Multiply
                | Operation::Divide
                | Operation::Repeat
        )
    }

    /// Look up an operation by name, ignoring case
    pub fn lookup(name: &str) -> Option<Operation> {
        table().get(name.to_lowercase().as_str()).copied()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn table() -> &'static FxHashMap<&'static str, Operation> {
    static TABLE: OnceLock<FxHashMap<&'static str, Operation>> = OnceLock::new();
    TABLE.get_or_init(|| Operation::ALL.iter().map(|op| (op.name(), *op)).collect())
}
