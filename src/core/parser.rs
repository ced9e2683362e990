//! Parsing of dynamic-linker dependency listings.
//!
//! Resolver output is line oriented, in one of three shapes:
//!
//! ```text
//! libc.so.6 => /lib/x86_64-linux-gnu/libc.so.6 (0x00007f2c1a000000)
//! libfoo.so => not found
//! linux-vdso.so.1 (0x00007ffd5b3f2000)
//! ```
//!
//! Each line becomes one entry once its load-address annotation is removed.

use std::sync::LazyLock;

use regex::Regex;

static ADDRESS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.+\)\s*$").expect("valid address regex"));

static NOT_FOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)not found").expect("valid not-found regex"));

/// Dependencies reported for a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeps {
    /// Every non-empty line, in output order, duplicates kept.
    pub entries: Vec<String>,
    /// The subset of `entries` the linker could not resolve.
    pub not_found: Vec<String>,
}

impl ParsedDeps {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Remove a trailing `(...)` annotation from a single line.
pub fn strip_address(line: &str) -> &str {
    match ADDRESS_SUFFIX.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    }
}

pub fn is_not_found(entry: &str) -> bool {
    NOT_FOUND.is_match(entry)
}

/// Split raw resolver output into dependency entries.
///
/// Blank lines, and lines that are blank once the address is stripped,
/// are skipped.
pub fn parse(raw: &str) -> ParsedDeps {
    let mut parsed = ParsedDeps::default();

    for line in raw.lines() {
        let entry = strip_address(line).trim();
        if entry.is_empty() {
            continue;
        }
        if is_not_found(entry) {
            parsed.not_found.push(entry.to_string());
        }
        parsed.entries.push(entry.to_string());
    }

    parsed
}

/// Key used for set membership: everything before `=>`, trimmed.
pub fn lookup_key(entry: &str) -> &str {
    match entry.find("=>") {
        Some(index) => entry[..index].trim(),
        None => entry.trim(),
    }
}
