//! Status and error output on stderr.
//!
//! Generated artifacts go to stdout (or a file); everything meant for the
//! person running the command goes through here.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a terminal error, including its chain of causes.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

/// Print an error to a custom writer.
pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(writer, "{} {:#}", "error:".bold().red(), err);
}

/// Confirm that generated output was written to `path`.
pub fn print_written(label: &str, path: &Path) {
    print_written_to(label, path, &mut io::stderr().lock());
}

pub fn print_written_to<W: Write>(label: &str, path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "{} written to: {}", label, path.display());
}

/// Print a success line such as `✓ Created .formgenrc.json`.
pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}
