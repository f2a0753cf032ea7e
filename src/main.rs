use clap::Parser;
use tracing_subscriber::EnvFilter;

use recurl::cli::Cli;
use recurl::core;
use recurl::status::ExitStatus;

/// Entry point - parses arguments and runs the selected subcommand.
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match core::run(cli) {
        Ok(()) => ExitStatus::Success,
        Err(err) => {
            eprintln!("recurl: {}", err);
            ExitStatus::Error
        }
    }
}
