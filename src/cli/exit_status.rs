use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and wrote its output
/// - `Failure` (1): Command refused to run (e.g. `init` would overwrite a config)
/// - `Error` (2): Command failed (missing file, invalid input, write failure, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and wrote its output.
    Success,
    /// Command refused to run.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
