use std::process::ExitCode;

use clap::Parser;
use formgen::cli::{Arguments, ExitStatus, report};

fn main() -> ExitCode {
    let args = Arguments::parse();
    formgen::logging::init(args.verbose());

    match formgen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
