//! Command-line interface layer.
//!
//! Parses arguments, loads configuration, performs file I/O and reports
//! results. The engine in [`crate::core`] never touches the filesystem.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Dispatch to the command handler for the parsed arguments.
///
/// Prints help and succeeds when no subcommand is given.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Schema(cmd)) => commands::schema::schema(cmd),
        Some(Command::Render(cmd)) => commands::render::render(cmd),
        Some(Command::Html(cmd)) => commands::html::html(cmd),
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
