//! Report formatting and printing utilities.
//!
//! Separate from the collection logic so the library can be used without
//! printing side effects.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, Write},
};

use colored::Colorize;
use serde::Serialize;

use super::args::OutputFormat;
use crate::{
    core::{Aggregate, CollectResult},
    error::Result,
};

/// Printed between a block's label and its entries.
pub const SEPARATOR: &str = "================================>";

/// Which optional blocks to print.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub all: bool,
    pub group: bool,
    pub format: OutputFormat,
}

/// Print the collected dependencies to stdout.
pub fn print(result: &CollectResult, options: ReportOptions) -> Result<()> {
    report_to(result, options, &mut io::stdout().lock())
}

/// Print the collected dependencies to a custom writer.
pub fn report_to<W: Write>(
    result: &CollectResult,
    options: ReportOptions,
    writer: &mut W,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => print_text(&result.aggregate, options, writer),
        OutputFormat::Json => print_json(result, writer),
    }
}

/// Print the file statistics of a finished scan.
pub fn print_summary_to<W: Write>(result: &CollectResult, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {} scanned, {} {} skipped",
        "info:".bold().cyan(),
        result.files_scanned,
        if result.files_scanned == 1 { "file" } else { "files" },
        result.skipped_count,
        if result.skipped_count == 1 { "entry" } else { "entries" },
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_text<W: Write>(
    aggregate: &Aggregate,
    options: ReportOptions,
    writer: &mut W,
) -> Result<()> {
    if options.group {
        for (file, deps) in aggregate.group() {
            print_block(&format!("dependencies for {}", file), deps, writer);
        }
    }

    if options.all {
        print_block("all dependencies", aggregate.unique(), writer);
    }

    if aggregate.not_found().is_empty() {
        print_none(writer, "no missing libs found...");
    } else {
        for (file, deps) in aggregate.not_found() {
            print_block(&format!("not found dependencies for {}", file), deps, writer);
        }
    }

    let (external, useless) = derived_sets(aggregate)?;

    if external.is_empty() {
        print_none(writer, "no external libs found...");
    } else {
        print_block("external dependencies", &external, writer);
    }

    if useless.is_empty() {
        print_none(writer, "no useless libs found...");
    } else {
        print_block("useless dependencies", &useless, writer);
    }

    Ok(())
}

/// `external` and `useless`, or two empty sets when no library directory
/// was given.
fn derived_sets(aggregate: &Aggregate) -> Result<(BTreeSet<String>, BTreeSet<String>)> {
    match aggregate.library_dir() {
        Some(_) => Ok((aggregate.external()?, aggregate.useless()?)),
        None => Ok((BTreeSet::new(), BTreeSet::new())),
    }
}

fn print_block<'a, W, I>(label: &str, deps: I, writer: &mut W)
where
    W: Write,
    I: IntoIterator<Item = &'a String>,
{
    let mut sorted: Vec<&String> = deps.into_iter().collect();
    sorted.sort();

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}: {}", label.bold(), SEPARATOR.blue());
    for dep in sorted {
        let _ = writeln!(writer, "    {}", dep);
    }
}

fn print_none<W: Write>(writer: &mut W, message: &str) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", message.green());
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    root: String,
    group: BTreeMap<&'a str, Vec<&'a str>>,
    not_found: BTreeMap<&'a str, Vec<&'a str>>,
    unique: &'a BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lib_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_libs: Option<&'a BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    useless: Option<BTreeSet<String>>,
}

fn sorted_map(map: &BTreeMap<String, Vec<String>>) -> BTreeMap<&str, Vec<&str>> {
    map.iter()
        .map(|(file, deps)| {
            let mut deps: Vec<&str> = deps.iter().map(String::as_str).collect();
            deps.sort_unstable();
            (file.as_str(), deps)
        })
        .collect()
}

fn print_json<W: Write>(result: &CollectResult, writer: &mut W) -> Result<()> {
    let aggregate = &result.aggregate;
    let configured = aggregate.library_dir().is_some();

    let report = JsonReport {
        root: result.root.display().to_string(),
        group: sorted_map(aggregate.group()),
        not_found: sorted_map(aggregate.not_found()),
        unique: aggregate.unique(),
        lib_path: aggregate.library_dir().map(|p| p.display().to_string()),
        all_libs: configured.then(|| aggregate.all_libs()),
        external: if configured { Some(aggregate.external()?) } else { None },
        useless: if configured { Some(aggregate.useless()?) } else { None },
    };

    // serializing plain maps and sets of strings cannot fail
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        let _ = writeln!(writer, "{}", json);
    }
    Ok(())
}
