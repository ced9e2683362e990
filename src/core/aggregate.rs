use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use super::{
    parser::{ParsedDeps, lookup_key},
    walker::is_shared_library_name,
};
use crate::error::{LdwError, Result};

/// Dependency data collected over one scan.
#[derive(Debug, Default, Clone)]
pub struct Aggregate {
    group: BTreeMap<String, Vec<String>>,
    not_found: BTreeMap<String, Vec<String>>,
    unique: BTreeSet<String>,
    all_libs: BTreeSet<String>,
    library_dir: Option<PathBuf>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's dependencies into the aggregate.
    ///
    /// A file is only recorded in `group` / `not_found` when it has at
    /// least one entry of the respective kind.
    pub fn add_file(&mut self, path: impl Into<String>, parsed: ParsedDeps) {
        let path = path.into();

        for entry in &parsed.entries {
            self.unique.insert(lookup_key(entry).to_string());
        }
        if !parsed.is_empty() {
            self.group.insert(path.clone(), parsed.entries);
        }
        if !parsed.not_found.is_empty() {
            self.not_found.insert(path, parsed.not_found);
        }
    }

    /// Record the shared libraries present in the reference directory.
    ///
    /// Only file names containing `.so` are kept; subdirectories are not
    /// descended into.
    pub fn scan_library_dir(&mut self, dir: &Path) -> Result<()> {
        let read_dir = fs::read_dir(dir).map_err(|source| LdwError::LibraryDir {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in read_dir.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_shared_library_name(&name) {
                self.all_libs.insert(name);
            }
        }
        self.library_dir = Some(dir.to_path_buf());
        Ok(())
    }

    pub fn group(&self) -> &BTreeMap<String, Vec<String>> {
        &self.group
    }

    pub fn not_found(&self) -> &BTreeMap<String, Vec<String>> {
        &self.not_found
    }

    pub fn unique(&self) -> &BTreeSet<String> {
        &self.unique
    }

    pub fn all_libs(&self) -> &BTreeSet<String> {
        &self.all_libs
    }

    pub fn library_dir(&self) -> Option<&Path> {
        self.library_dir.as_deref()
    }

    /// Libraries in the reference directory that nothing depends on.
    pub fn useless(&self) -> Result<BTreeSet<String>> {
        self.require_library_dir()?;
        Ok(self.all_libs.difference(&self.unique).cloned().collect())
    }

    /// Dependencies that the reference directory does not provide.
    pub fn external(&self) -> Result<BTreeSet<String>> {
        self.require_library_dir()?;
        Ok(self.unique.difference(&self.all_libs).cloned().collect())
    }

    fn require_library_dir(&self) -> Result<()> {
        match self.library_dir {
            Some(_) => Ok(()),
            None => Err(LdwError::LibraryPathNotConfigured),
        }
    }
}
