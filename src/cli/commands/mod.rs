//! CLI definition and dispatch.
//!
//! Running with no arguments reads the default drive and prints the listing.
//! The options only override where the disc ID and settings come from.

mod lookup;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{self, Config};

pub use lookup::cmd_lookup;

/// Look up the audio CD in the drive on MusicBrainz and print its track listing
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optical drive to read (default from config, then /dev/cdrom)
    #[arg(short, long)]
    pub device: Option<String>,

    /// Look up this disc ID instead of reading the drive
    #[arg(long, value_name = "ID")]
    pub disc_id: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Run the lookup described by the command line.
///
/// Returns the process exit code: failure only when no disc ID could be obtained.
pub fn run_command(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;

    // Requests go out one after another; a current-thread runtime is enough
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    cmd_lookup(&rt, cli, &config)
}

/// Config from `--config` if given (must load), else the default location
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Ok(config::load_from(path)?),
        None => Ok(config::load()),
    }
}
