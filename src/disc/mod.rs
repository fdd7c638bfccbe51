//! Disc ID acquisition
//!
//! The MusicBrainz disc ID is computed from the table of contents of the
//! disc in the drive. Reading the TOC is left to libdiscid through the
//! `discid` crate, enabled with the `libdiscid` build feature:
//!
//! - Debian/Ubuntu: `apt install libdiscid-dev`
//! - Fedora: `dnf install libdiscid-devel`
//! - macOS: `brew install libdiscid`
//!
//! Without the feature the drive can't be read, but a known disc ID can
//! still be looked up with [`FixedDiscId`].

use std::fmt;

/// Drive read when nothing else is configured
pub const DEFAULT_DEVICE: &str = "/dev/cdrom";

/// Length of a MusicBrainz disc ID (base64 of a SHA-1 digest)
const DISC_ID_LEN: usize = 28;

/// Identifier computed from a disc's table of contents.
///
/// Opaque to us; passed verbatim to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscFingerprint(String);

impl DiscFingerprint {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a disc ID typed by the user
    pub fn parse(id: &str) -> Result<Self, DiscError> {
        let id = id.trim();

        let valid_chars = id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

        if id.len() != DISC_ID_LEN || !valid_chars {
            return Err(DiscError::InvalidId(id.to_string()));
        }

        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiscFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of disc fingerprints
pub trait DiscReader {
    /// Read the fingerprint of the disc in `device`
    fn read_fingerprint(&self, device: &str) -> Result<DiscFingerprint, DiscError>;
}

/// Reads the disc in an optical drive through libdiscid
#[derive(Debug, Default, Clone, Copy)]
pub struct DriveReader;

impl DiscReader for DriveReader {
    #[cfg(feature = "libdiscid")]
    fn read_fingerprint(&self, device: &str) -> Result<DiscFingerprint, DiscError> {
        use discid::{DiscId, Features};

        tracing::debug!(target: "disc", device, "Reading table of contents");

        // TOC only; MCN and ISRCs aren't needed for the ID
        let disc = DiscId::read_features(Some(device), Features::READ)
            .map_err(|e| DiscError::Read(e.to_string()))?;

        let id = disc.id();
        tracing::info!(target: "disc", device, disc_id = %id, "Read disc ID");
        Ok(DiscFingerprint(id))
    }

    #[cfg(not(feature = "libdiscid"))]
    fn read_fingerprint(&self, device: &str) -> Result<DiscFingerprint, DiscError> {
        tracing::debug!(target: "disc", device, "Built without libdiscid");
        Err(DiscError::Unsupported)
    }
}

/// Returns a disc ID given up front instead of reading a drive
#[derive(Debug, Clone)]
pub struct FixedDiscId(pub DiscFingerprint);

impl DiscReader for FixedDiscId {
    fn read_fingerprint(&self, device: &str) -> Result<DiscFingerprint, DiscError> {
        tracing::debug!(target: "disc", device, disc_id = %self.0, "Using given disc ID, drive not read");
        Ok(self.0.clone())
    }
}

/// Errors obtaining a disc ID
#[derive(Debug, thiserror::Error)]
pub enum DiscError {
    /// libdiscid failed; the message is libdiscid's own
    #[error("{0}")]
    Read(String),

    #[error("reading discs requires building with the `libdiscid` feature (or pass --disc-id)")]
    Unsupported,

    #[error("invalid disc ID '{0}': expected 28 characters of A-Z, a-z, 0-9, '.', '_' or '-'")]
    InvalidId(String),
}
