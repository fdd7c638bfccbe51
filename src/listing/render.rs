//! Plain-text rendering of lookup results.
//!
//! Everything is line-oriented and written to any `io::Write`, which is
//! stdout in the binary and a byte buffer in tests.

use std::io::{self, Write};

use super::{MediumListing, format_duration, media_matching_disc_id, track_duration_secs, track_title};
use crate::lookup::domain::{QueryStatus, ReleaseDetail};

/// Printed between the release count and the first release
pub const SEPARATOR: &str = "---------------------------------";

/// Printed instead of a title when a release has no release group
pub const NO_RELEASE_GROUP: &str = "No release group for this release";

pub fn write_disc_id<W: Write>(out: &mut W, disc_id: &str) -> io::Result<()> {
    writeln!(out, "DiscID: {}", disc_id)
}

/// Diagnostics of the disc lookup, printed whether it succeeded or not
pub fn write_status<W: Write>(out: &mut W, status: &QueryStatus) -> io::Result<()> {
    writeln!(out, "Result: {}", status.result)?;
    writeln!(out, "HTTPCode: {}", status.http_code)?;
    writeln!(out, "ErrorMessage: '{}'", status.message)
}

pub fn write_release_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Found {} release(s)", count)?;
    writeln!(out, "{}", SEPARATOR)
}

/// Write one release: its artists, then every medium matching `disc_id`.
///
/// Returns the number of media written.
pub fn write_release<W: Write>(
    out: &mut W,
    release: &ReleaseDetail,
    disc_id: &str,
) -> io::Result<usize> {
    // Every credited artist, not just the first
    for name in &release.artist_credit.names {
        writeln!(out, "Release artist: {}", name.artist_name)?;
    }

    let media = media_matching_disc_id(release, disc_id);
    if media.is_empty() {
        return Ok(0);
    }

    match &release.release_group {
        Some(group) => writeln!(out, "Release group title: '{}'", group.title)?,
        None => writeln!(out, "{}", NO_RELEASE_GROUP)?,
    }

    writeln!(out, "Found {} media item(s)", media.len())?;

    for medium in &media {
        write_medium(out, &MediumListing::new(medium))?;
    }

    Ok(media.len())
}

fn write_medium<W: Write>(out: &mut W, listing: &MediumListing<'_>) -> io::Result<()> {
    let medium = listing.medium;

    writeln!(
        out,
        "Found media: '{}', position {}",
        medium.title, medium.position
    )?;

    if let Some(offset) = medium.track_offset {
        writeln!(out, "Tracklist offset: {}", offset)?;
    }

    for (track, artist) in listing.tracks() {
        let title = track_title(track);
        let length = format_duration(track_duration_secs(track));

        // Per-track artists only matter on compilations
        if listing.compilation {
            writeln!(
                out,
                "{:02} - {} - '{}' ({})",
                track.position,
                artist.unwrap_or_default(),
                title,
                length
            )?;
        } else {
            writeln!(out, "{:02} - '{}' ({})", track.position, title, length)?;
        }
    }

    writeln!(
        out,
        "Compilation: {}",
        if listing.compilation { "Yes" } else { "No" }
    )
}
