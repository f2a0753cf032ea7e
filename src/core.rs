//! Main execution logic
//!
//! Dispatches the parsed CLI arguments to the import or export path. Output
//! destined for machines (request JSON, curl commands) goes to stdout;
//! diagnostics stay on stderr.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, Command};
use crate::curl::{generate_curl, parse_curl};
use crate::errors::{RecurlError, Result};
use crate::request::ParsedRequest;

/// Run one subcommand to completion.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Import { command, pretty } => run_import(command.as_deref(), pretty),
        Command::Export { file } => run_export(file.as_deref()),
    }
}

fn run_import(command: Option<&str>, pretty: bool) -> Result<()> {
    let input = match command {
        Some(text) => text.to_string(),
        None => read_stdin()?,
    };
    debug!(bytes = input.len(), "importing curl command");

    let request = parse_curl(&input)
        .ok_or_else(|| RecurlError::Parse("input is not a curl command".to_string()))?;

    let json = if pretty {
        serde_json::to_string_pretty(&request)?
    } else {
        serde_json::to_string(&request)?
    };
    println!("{}", json);
    Ok(())
}

fn run_export(file: Option<&Path>) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_stdin()?,
    };
    debug!(bytes = input.len(), "exporting request as curl");

    let request: ParsedRequest = serde_json::from_str(&input)?;
    println!("{}", generate_curl(&request));
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
