// Defaults for the interactive session

/// Value the accumulator starts from
pub const DEFAULT_INITIAL_VALUE: f64 = 0.0;

/// Prompt printed before each line is read
pub const DEFAULT_PROMPT: &str = "$ ";

/// Command that ends the session; intercepted before the engine sees it
pub const EXIT_COMMAND: &str = "exit";

/// Digits printed after the decimal point
pub const RESULT_PRECISION: usize = 1;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
