//! Disc lookup command.

use std::process::ExitCode;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::disc::{DiscError, DiscFingerprint, DiscReader, DriveReader, FixedDiscId};
use crate::error;
use crate::lookup::{LookupService, LookupSummary, MusicBrainzClient};

use super::Cli;

/// Read the disc ID and print the MusicBrainz listing for it
pub fn cmd_lookup(rt: &Runtime, cli: &Cli, config: &Config) -> anyhow::Result<ExitCode> {
    let device = cli.device.as_deref().unwrap_or(&config.disc.device);

    let fingerprint = match read_disc_id(cli.disc_id.as_deref(), device) {
        Ok(fp) => fp,
        Err(e) => {
            // The only fatal condition: nothing to look up
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let service = LookupService::new(MusicBrainzClient::new(&config.musicbrainz));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    listing_exit_code(rt.block_on(service.list_disc(&fingerprint, &mut out)))
}

/// Use the disc ID given on the command line, or read the one in `device`
fn read_disc_id(disc_id: Option<&str>, device: &str) -> Result<DiscFingerprint, DiscError> {
    match disc_id {
        Some(id) => FixedDiscId(DiscFingerprint::parse(id)?).read_fingerprint(device),
        None => DriveReader.read_fingerprint(device),
    }
}

/// A reader closing the output early still counts as a completed run
fn listing_exit_code(result: error::Result<LookupSummary>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!(target: "lookup::service", "Output closed early");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e.into()),
    }
}
