use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{LdwError, Result};

/// Substring that marks a file name as a shared library.
pub const SHARED_LIBRARY_MARKER: &str = ".so";

/// Lazy traversal of every regular file below a root directory.
///
/// Symbolic links are not descended into, but a link that points at a
/// regular file is yielded like the file itself. Entries that cannot be
/// read are skipped and counted in [`WalkFiles::skipped_count`].
pub struct WalkFiles {
    inner: walkdir::IntoIter,
    ignores: Vec<Pattern>,
    skipped_count: usize,
    verbose: bool,
}

impl WalkFiles {
    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }
}

impl Iterator for WalkFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(e) => {
                    self.skipped_count += 1;
                    if self.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let path_str = path.to_string_lossy();
            if self.ignores.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            return Some(entry.into_path());
        }
    }
}

/// Start walking `root`, which must be an existing directory.
///
/// The root is canonicalized first so every yielded path is absolute.
pub fn walk_files(root: &Path, ignores: &[Pattern], verbose: bool) -> Result<WalkFiles> {
    let root = canonical_dir(root)?;

    Ok(WalkFiles {
        inner: WalkDir::new(root).into_iter(),
        ignores: ignores.to_vec(),
        skipped_count: 0,
        verbose,
    })
}

/// Canonicalize `path`, failing with `InvalidRoot` unless it is a directory.
pub fn canonical_dir(path: &Path) -> Result<PathBuf> {
    let canonical = fs::canonicalize(path).map_err(|source| LdwError::InvalidRoot {
        path: path.to_path_buf(),
        source: Some(source),
    })?;
    if !canonical.is_dir() {
        return Err(LdwError::invalid_root(path));
    }
    Ok(canonical)
}

/// Compile ignore globs, rejecting invalid ones.
pub fn compile_ignores(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| LdwError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Whether a file should be handed to the dependency resolver.
///
/// This is a name/permission heuristic, not content inspection. A file
/// counts as scannable when any of its owner, group or other execute bits
/// is set (not a check against the current user), or when its name
/// contains `.so` anywhere (`data.so`, `resolver.sort`).
pub fn is_scannable(path: &Path) -> bool {
    is_executable(path) || is_shared_library(path)
}

pub fn is_shared_library(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| is_shared_library_name(&name.to_string_lossy()))
}

pub fn is_shared_library_name(name: &str) -> bool {
    name.contains(SHARED_LIBRARY_MARKER)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    false
}
