//! cdlookup - identify an audio CD and print its track listing.
//!
//! Reads the MusicBrainz disc ID of the disc in the drive, looks it up on
//! MusicBrainz, and prints every matching release with its tracks, track
//! lengths, and whether the disc looks like a various-artists compilation.

pub mod cli;
pub mod config;
pub mod disc;
pub mod error;
pub mod listing;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<ExitCode> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for the listing
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    cli::run_command(&args)
}
