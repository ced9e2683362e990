//! Error types for dependency collection.

use std::path::PathBuf;

use thiserror::Error;

/// Structural failures that abort a run.
///
/// Resolver failures and unreadable entries met during the walk are not
/// represented here: they are skipped so one broken file never aborts the
/// whole scan.
#[derive(Debug, Error)]
pub enum LdwError {
    /// Scan root does not exist or is not a traversable directory.
    #[error("Invalid root directory: {path}")]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// `external` or `useless` requested without a reference library directory.
    #[error("library path is not defined")]
    LibraryPathNotConfigured,

    /// Reference library directory could not be listed.
    #[error("Cannot read library directory {path}: {source}")]
    LibraryDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An ignore pattern is not valid glob syntax.
    #[error("Invalid ignore pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl LdwError {
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot {
            path: path.into(),
            source: None,
        }
    }
}

pub type Result<T, E = LdwError> = std::result::Result<T, E>;
