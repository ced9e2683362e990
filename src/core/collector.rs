use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{
    aggregate::Aggregate,
    parser::{ParsedDeps, parse},
    resolver::DependencyResolver,
    walker::{canonical_dir, compile_ignores, is_scannable, walk_files},
};
use crate::error::{LdwError, Result};

/// Outcome of one scan.
#[derive(Debug)]
pub struct CollectResult {
    pub root: PathBuf,
    pub aggregate: Aggregate,
    /// Files handed to the resolver.
    pub files_scanned: usize,
    /// Walk entries that could not be read.
    pub skipped_count: usize,
}

/// Drives the walk, resolve, parse and aggregate steps for one root.
///
/// Resolution runs in parallel; the aggregate is only written from the
/// calling thread once every file has been parsed.
pub struct Collector<R> {
    resolver: R,
    ignores: Vec<String>,
    lib_path: Option<PathBuf>,
    verbose: bool,
}

impl<R: DependencyResolver> Collector<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            ignores: Vec::new(),
            lib_path: None,
            verbose: false,
        }
    }

    pub fn ignores(mut self, ignores: Vec<String>) -> Self {
        self.ignores = ignores;
        self
    }

    pub fn lib_path(mut self, lib_path: Option<PathBuf>) -> Self {
        self.lib_path = lib_path;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn collect(&self, root: &Path) -> Result<CollectResult> {
        let root = canonical_dir(root)?;
        let ignores = compile_ignores(&self.ignores)?;

        let mut walk = walk_files(&root, &ignores, self.verbose)?;
        let files: Vec<PathBuf> = walk.by_ref().filter(|p| is_scannable(p)).collect();
        let skipped_count = walk.skipped_count();

        let results: Vec<(String, ParsedDeps)> = files
            .par_iter()
            .map(|path| {
                let raw = self.resolver.resolve(path);
                (path.to_string_lossy().into_owned(), parse(&raw))
            })
            .collect();

        let mut aggregate = Aggregate::new();
        for (path, parsed) in results {
            aggregate.add_file(path, parsed);
        }

        if let Some(lib_path) = &self.lib_path {
            let lib_dir = std::fs::canonicalize(lib_path).map_err(|source| LdwError::LibraryDir {
                path: lib_path.clone(),
                source,
            })?;
            aggregate.scan_library_dir(&lib_dir)?;
        }

        Ok(CollectResult {
            root,
            aggregate,
            files_scanned: files.len(),
            skipped_count,
        })
    }
}
