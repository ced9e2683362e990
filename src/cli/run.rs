use std::{
    env, io,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, OutputFormat},
    report::{self, ReportOptions},
};
use crate::{
    config::load_config,
    core::{Collector, CommandResolver},
};

/// Set to any value to leave out the execution time line.
pub const DISABLE_TIMING_ENV: &str = "LDW_DISABLE_TIMING";

/// Scan `args.root`, print the report and the elapsed time.
///
/// The elapsed time goes to stdout after a text report and to stderr with
/// `--format json`.
///
/// Settings from `.ldwrc.json` apply unless the matching flag is given;
/// ignore patterns from both sources are combined.
pub fn run(args: Arguments) -> Result<()> {
    let start = Instant::now();

    let config = load_config(&args.root)?.config;

    let resolver = args.resolver.unwrap_or(config.resolver);
    let lib_path = args.lib_path.or(config.lib_path);
    let mut ignores = config.ignores;
    ignores.extend(args.ignore);

    let result = Collector::new(CommandResolver::new(resolver).verbose(args.verbose))
        .ignores(ignores)
        .lib_path(lib_path)
        .verbose(args.verbose)
        .collect(&args.root)
        .with_context(|| format!("Failed to scan {}", args.root.display()))?;

    let options = ReportOptions {
        all: args.all,
        group: args.group,
        format: args.format,
    };
    report::print(&result, options)?;

    if args.verbose {
        report::print_summary_to(&result, &mut io::stderr().lock());
    }

    if env::var_os(DISABLE_TIMING_ENV).is_none() {
        let timing = format!("script execution: {} ms", format_millis(start.elapsed()));
        match args.format {
            OutputFormat::Text => println!("\n{}", timing),
            // stdout holds nothing but the JSON document
            OutputFormat::Json => eprintln!("{}", timing),
        }
    }

    Ok(())
}

fn format_millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1000.0)
}
