//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz JSON web service returns.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! Two endpoints are used:
//! - `/discid/{id}` to find the releases a disc ID is attached to
//! - `/release/{id}` with includes to get artists, media, tracks and recordings

use serde::{Deserialize, Serialize};

/// Disc ID lookup response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscResponse {
    /// The disc ID that was looked up
    pub id: String,
    /// Total length of the disc in sectors
    pub sectors: Option<u64>,
    /// Number of track offsets in the TOC
    pub offset_count: Option<u32>,
    /// Releases this disc ID is attached to
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// Release (one edition of an album)
///
/// Used both for the summaries inside a disc lookup and for the full
/// `/release` response; the includes decide which fields are populated.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: String,
    /// Release status (Official, Bootleg, etc.)
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Artist credits for the whole release
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Release group (groups same album across editions)
    pub release_group: Option<ReleaseGroup>,
    /// Media (discs) in this release
    #[serde(default)]
    pub media: Vec<Medium>,
}

/// Artist credit entry (several for collaborations)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// The artist
    pub artist: Artist,
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    pub joinphrase: Option<String>,
}

/// Artist info
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    pub sort_name: Option<String>,
}

/// Release group (e.g., "Abbey Road" across all editions)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    /// MusicBrainz release group ID
    pub id: String,
    /// Title
    pub title: String,
    /// Primary type (Album, Single, EP, etc.)
    pub primary_type: Option<String>,
}

/// Medium (disc) within a release
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    /// Medium title, usually empty
    pub title: Option<String>,
    /// Position in release (disc number)
    pub position: Option<u32>,
    /// Format (CD, Vinyl, Digital, etc.)
    pub format: Option<String>,
    /// Number of tracks
    pub track_count: Option<u32>,
    /// Offset of the first listed track
    pub track_offset: Option<u32>,
    /// Disc IDs attached to this medium (needs `inc=discids`)
    #[serde(default)]
    pub discs: Vec<Disc>,
    /// Tracks on this medium (needs `inc=recordings`)
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Disc ID attached to a medium
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Disc {
    pub id: String,
    pub sectors: Option<u64>,
}

/// Track on a medium
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Track {
    /// MusicBrainz track ID
    pub id: Option<String>,
    /// Track position on medium
    pub position: Option<u32>,
    /// Track number as printed (may be "A1", "1-5")
    pub number: Option<String>,
    /// Track title (may differ from recording title)
    pub title: Option<String>,
    /// Track length in milliseconds
    pub length: Option<u64>,
    /// Track-level artist credit
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// The recording this track refers to
    pub recording: Option<Recording>,
}

/// Recording linked from a track
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Recording {
    /// MusicBrainz recording ID
    pub id: String,
    /// Recording title
    pub title: String,
    /// Duration in milliseconds
    pub length: Option<u64>,
    /// Artist credits (needs `inc=artist-credits`)
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
