//! Dependency collection engine.
//!
//! A scan runs in four steps:
//!
//! 1. `walker`: list every regular file below the root and keep the scannable ones
//! 2. `resolver`: ask the dynamic-linker listing command for each file's dependencies
//! 3. `parser`: turn that listing into entries and unresolved entries
//! 4. `aggregate`: fold per-file results into the run-wide sets
//!
//! `collector` wires the steps together.

pub mod aggregate;
pub mod collector;
pub mod parser;
pub mod resolver;
pub mod walker;

pub use aggregate::Aggregate;
pub use collector::{CollectResult, Collector};
pub use parser::{ParsedDeps, lookup_key, parse, strip_address};
pub use resolver::{CommandResolver, DependencyResolver};
pub use walker::{is_scannable, walk_files};
