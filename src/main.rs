//! Personal Assistant - interactive entry point.
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use anyhow::{Context, Result};
use personal_assistant::commands::{handle_line, Outcome};
use personal_assistant::{AppContext, Config, FileStore, Storage};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_level);
    info!("Configuration loaded successfully");

    info!("Using data file {}", config.data_file.display());
    let store = Arc::new(FileStore::new(&config.data_file)) as Arc<dyn Storage>;
    let mut ctx = AppContext::new(config, store);

    run(&mut ctx, io::stdin().lock(), io::stdout().lock())
}

/// Log to stderr; RUST_LOG wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prompt loop: ends on `exit`/`quit` or end of input.
fn run(ctx: &mut AppContext, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(
        output,
        "Personal Assistant. Type 'help' to see available commands, 'exit' to quit."
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match handle_line(ctx, &line) {
            Some(Outcome::Reply(reply)) => writeln!(output, "{}", reply)?,
            Some(Outcome::Exit) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            None => {}
        }
    }

    info!("Session ended");
    Ok(())
}
