// Tally: interactive accumulator with replayable history

use std::io;

use tracing_subscriber::EnvFilter;

use tally::cli::Cli;
use tally::engine::Accumulator;
use tally::shell::{Session, SessionEnd};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let mut session = Session::new(
        Accumulator::new(cli.initial),
        stdin.lock(),
        io::stdout(),
        io::stderr(),
        cli.shell_config(),
    );

    match session.run()? {
        SessionEnd::Exit => {}
        // Leave the terminal on a fresh line after the last prompt
        SessionEnd::EndOfInput => println!(),
    }

    Ok(())
}
