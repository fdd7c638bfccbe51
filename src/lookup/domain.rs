//! Internal domain models for disc lookups.
//!
//! These types are OUR types - they don't change when the MusicBrainz API changes.
//! Responses get converted into these types by `musicbrainz::adapter`.

use std::fmt;

/// Outcome class of a catalog query.
///
/// Mirrors the result codes MusicBrainz client libraries report, so the
/// numeric value printed in diagnostics is the familiar one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryResult {
    Success,
    ConnectionError,
    Timeout,
    AuthenticationError,
    FetchError,
    RequestError,
    ResourceNotFound,
}

impl QueryResult {
    /// Numeric code shown in the `Result:` diagnostics line
    pub fn code(self) -> i32 {
        match self {
            QueryResult::Success => 0,
            QueryResult::ConnectionError => 1,
            QueryResult::Timeout => 2,
            QueryResult::AuthenticationError => 3,
            QueryResult::FetchError => 4,
            QueryResult::RequestError => 5,
            QueryResult::ResourceNotFound => 6,
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Diagnostic triple recorded for every query, successful or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStatus {
    pub result: QueryResult,
    /// HTTP status code, 0 when no response was received
    pub http_code: u16,
    /// Error text reported by the service or transport, empty on success
    pub message: String,
}

impl QueryStatus {
    pub fn success(http_code: u16) -> Self {
        Self {
            result: QueryResult::Success,
            http_code,
            message: String::new(),
        }
    }

    /// Classify a failed query
    pub fn from_error(error: &LookupError) -> Self {
        let (result, http_code) = match error {
            LookupError::Network(_) => (QueryResult::ConnectionError, 0),
            LookupError::Timeout(_) => (QueryResult::Timeout, 0),
            LookupError::NotFound(_) => (QueryResult::ResourceNotFound, 404),
            LookupError::RateLimited { code, .. } => (QueryResult::FetchError, *code),
            LookupError::Api { code, .. } => (classify_http(*code), *code),
            LookupError::Parse { code, .. } => (QueryResult::FetchError, *code),
        };

        let message = match error {
            LookupError::NotFound(message)
            | LookupError::RateLimited { message, .. }
            | LookupError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        };

        Self {
            result,
            http_code,
            message,
        }
    }
}

/// Map a non-success HTTP status to a query result class
fn classify_http(code: u16) -> QueryResult {
    match code {
        401 | 403 => QueryResult::AuthenticationError,
        404 => QueryResult::ResourceNotFound,
        400 | 405..=499 => QueryResult::RequestError,
        _ => QueryResult::FetchError,
    }
}

/// Result of looking up a disc ID
#[derive(Debug, Clone)]
pub struct DiscLookup {
    pub status: QueryStatus,
    /// Candidate releases; `None` when the catalog returned no disc at all
    pub releases: Option<Vec<ReleaseSummary>>,
}

impl DiscLookup {
    /// A lookup that produced no disc record
    pub fn absent(status: QueryStatus) -> Self {
        Self {
            status,
            releases: None,
        }
    }
}

/// Candidate release returned by a disc ID lookup.
///
/// Summaries don't carry full information; fetch the detail by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary {
    pub id: String,
    pub title: String,
}

/// Full release detail, including every medium of the release
#[derive(Debug, Clone, Default)]
pub struct ReleaseDetail {
    pub id: String,
    pub title: String,
    pub release_group: Option<ReleaseGroup>,
    pub artist_credit: ArtistCredit,
    pub media: Vec<Medium>,
}

/// The album a release is an edition of
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseGroup {
    pub id: String,
    pub title: String,
}

/// Ordered artist credit (several entries for joint credits)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistCredit {
    pub names: Vec<NameCredit>,
}

/// One artist within an artist credit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCredit {
    /// Official artist name
    pub artist_name: String,
}

/// One disc within a release
#[derive(Debug, Clone, Default)]
pub struct Medium {
    pub title: String,
    /// Disc number within the release (1-based)
    pub position: u32,
    /// Number of tracks preceding this page of the track list
    pub track_offset: Option<u32>,
    /// Disc IDs attached to this medium
    pub disc_ids: Vec<String>,
    pub tracks: Vec<Track>,
}

impl Medium {
    pub fn has_disc_id(&self, disc_id: &str) -> bool {
        self.disc_ids.iter().any(|id| id == disc_id)
    }
}

/// Track on a medium
#[derive(Debug, Clone, Default)]
pub struct Track {
    pub position: u32,
    pub title: String,
    /// Length in milliseconds
    pub length_ms: Option<u64>,
    pub recording: Option<Recording>,
}

/// The recording a track refers to
#[derive(Debug, Clone, Default)]
pub struct Recording {
    pub id: String,
    pub title: String,
    pub length_ms: Option<u64>,
    pub artist_credit: ArtistCredit,
}

/// Errors that can occur talking to the catalog
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited (HTTP {code}): {message}")]
    RateLimited { code: u16, message: String },

    #[error("API request failed (HTTP {code}): {message}")]
    Api { code: u16, message: String },

    #[error("Failed to parse response (HTTP {code}): {message}")]
    Parse { code: u16, message: String },
}
