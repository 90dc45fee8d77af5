//! Core library entry for the `recid` CLI.
//!
//! `recid` reads a JSON or YAML list of records, gives every record a unique
//! random identifier, and writes the result back out.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod generator;
pub mod ports;
pub mod processor;
pub mod store;

pub use error::{Error, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and return `Ok`.
///
/// # Errors
///
/// Returns [`Error::Usage`] when argument parsing fails, or the error raised
/// by the command.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(Error::Usage(err.to_string())),
    };
    commands::dispatch(&cli)
}
