//! pagewise CLI
//!
//! Command-line interface for the pagination engine

use clap::Parser;
use pagewise::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let level: tracing::Level = cli.effective_log_level().into();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
