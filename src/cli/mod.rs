//! Command-line interface for cdlookup.
//!
//! Parses the (all optional) arguments and runs the disc lookup.

mod commands;

pub use commands::{Cli, run_command};
