//! Dynamic-linker dependency resolution.
//!
//! Resolution is delegated to an external command (`ldd` by default) that
//! prints the dependencies of the file it is given. Only its standard output
//! is kept; exit status is ignored.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use colored::Colorize;

pub const DEFAULT_RESOLVER: &str = "ldd";

/// Produces the raw dependency listing for one file.
pub trait DependencyResolver: Sync {
    /// Never fails: a resolver that cannot produce output returns whatever
    /// text it has, possibly empty.
    fn resolve(&self, path: &Path) -> String;
}

/// Runs a dependency-listing command with the file as its only argument.
#[derive(Debug, Clone)]
pub struct CommandResolver {
    program: String,
    verbose: bool,
}

impl CommandResolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            verbose: false,
        }
    }

    pub fn ldd() -> Self {
        Self::new(DEFAULT_RESOLVER)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandResolver {
    fn default() -> Self {
        Self::ldd()
    }
}

impl DependencyResolver for CommandResolver {
    fn resolve(&self, path: &Path) -> String {
        let output = Command::new(self.program())
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(e) => {
                if self.verbose {
                    eprintln!(
                        "{} Cannot run '{}' on {}: {}",
                        "warning:".bold().yellow(),
                        self.program(),
                        path.display(),
                        e
                    );
                }
                String::new()
            }
        }
    }
}

impl<F> DependencyResolver for F
where
    F: Fn(&Path) -> String + Sync,
{
    fn resolve(&self, path: &Path) -> String {
        self(path)
    }
}
