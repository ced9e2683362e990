//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Linux dependency walker: report the shared libraries every executable
/// and library below a directory depends on.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory for scan
    pub root: PathBuf,

    /// Print all dependencies
    #[arg(short, long)]
    pub all: bool,

    /// Print dependencies for each executable or library
    #[arg(short, long)]
    pub group: bool,

    /// Library directory; enables external and useless dependency reports
    #[arg(short = 'l', long = "lpath", value_name = "DIR")]
    pub lib_path: Option<PathBuf>,

    /// Command that lists a file's dynamic dependencies (overrides config file)
    #[arg(long, env = "LDW_RESOLVER", value_name = "CMD")]
    pub resolver: Option<String>,

    /// Glob pattern for files to skip; can be given multiple times
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Output format (with json, the execution time is printed to stderr)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
