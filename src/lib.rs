//! ldw - Linux dependency walker
//!
//! ldw is a CLI tool and library that walks a directory tree, asks the
//! dynamic linker which shared libraries every executable and library in it
//! needs, and reports per-file dependencies, unresolved ones, and how the
//! whole set compares with a reference library directory.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run loop, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Walk, resolve, parse and aggregate pipeline
//! - `error`: Error types for the library API

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
