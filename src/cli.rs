//! Command-line argument parsing.

use clap::Parser;
use crossterm::tty::IsTty;

use crate::constants::{DEFAULT_INITIAL_VALUE, DEFAULT_LOG_LEVEL, DEFAULT_PROMPT};
use crate::shell::{ColorMode, ShellConfig};

/// Interactive accumulator calculator.
#[derive(Parser, Debug, Clone)]
#[command(name = "tally")]
#[command(about = "Apply arithmetic commands to a running value, one per line")]
#[command(version)]
pub struct Cli {
    /// Value the accumulator starts from.
    #[arg(long, default_value_t = DEFAULT_INITIAL_VALUE, allow_negative_numbers = true)]
    pub initial: f64,

    /// Prompt printed before each command.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// When to colour error messages.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the session settings, resolving `--color auto` against stderr.
    pub fn shell_config(&self) -> ShellConfig {
        let color = match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stderr().is_tty(),
        };
        ShellConfig {
            prompt: self.prompt.clone(),
            color,
        }
    }
}
