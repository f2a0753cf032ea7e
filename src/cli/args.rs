//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert curl commands to structured request JSON and back
#[derive(Debug, Parser)]
#[command(name = "recurl", version, about, max_term_width = 100)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a curl command and print the request as JSON
    Import {
        /// The curl command; read from stdin when omitted
        command: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Render request JSON as a curl command
    Export {
        /// Path to the request JSON; read from stdin when omitted
        file: Option<PathBuf>,
    },
}
