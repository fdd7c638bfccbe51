//! Disc lookup - resolves a disc ID to releases and lists their tracks.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Our types for releases, media and tracks
//! - **API DTOs** (`musicbrainz/dto.rs`) - Exact MusicBrainz response shapes
//! - **Adapter** (`musicbrainz/adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`musicbrainz/client.rs`) - HTTP client for the web service
//! - **Traits** (`traits.rs`) - The catalog seam, with mocks for tests
//! - **Service** (`service.rs`) - Runs lookup, fetch and printing in order
//!
//! # Usage
//!
//! ```ignore
//! use cdlookup::lookup::{LookupService, MusicBrainzClient};
//!
//! let service = LookupService::new(MusicBrainzClient::new(&config.musicbrainz));
//! service.list_disc(&fingerprint, &mut std::io::stdout()).await?;
//! ```

pub mod domain;
pub mod musicbrainz;
pub mod service;
pub mod traits;

pub use domain::LookupError;
pub use musicbrainz::MusicBrainzClient;
pub use service::{LookupService, LookupSummary};
