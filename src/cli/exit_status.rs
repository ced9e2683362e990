use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): The scan completed; missing, external and useless
///   libraries are part of the normal report, not failures.
/// - `Error` (2): The scan could not run (invalid root, unreadable library
///   directory, bad config file, etc.).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The scan completed.
    Success,
    /// The scan could not run.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
