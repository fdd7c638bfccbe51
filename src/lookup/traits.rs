//! Trait definitions for the catalog client.
//!
//! The lookup service is generic over [`CatalogApi`] so tests can substitute
//! a mock catalog for the real MusicBrainz client.
//!
//! # Example
//!
//! ```ignore
//! use cdlookup::lookup::traits::CatalogApi;
//!
//! async fn releases<C: CatalogApi>(catalog: &C, disc_id: &str) -> usize {
//!     let lookup = catalog.lookup_disc(disc_id).await;
//!     lookup.releases.map(|r| r.len()).unwrap_or(0)
//! }
//! ```

use async_trait::async_trait;

use super::domain::{DiscLookup, LookupError, ReleaseDetail};

/// Catalog lookups needed to list a disc.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Look up a disc ID and return candidate releases with the query diagnostics.
    async fn lookup_disc(&self, disc_id: &str) -> DiscLookup;

    /// Fetch a release by catalog ID with the given related entities included.
    async fn fetch_release(
        &self,
        release_id: &str,
        includes: &[&str],
    ) -> Result<ReleaseDetail, LookupError>;
}

#[async_trait]
impl CatalogApi for super::musicbrainz::MusicBrainzClient {
    async fn lookup_disc(&self, disc_id: &str) -> DiscLookup {
        self.lookup_disc(disc_id).await
    }

    async fn fetch_release(
        &self,
        release_id: &str,
        includes: &[&str],
    ) -> Result<ReleaseDetail, LookupError> {
        self.fetch_release(release_id, includes).await
    }
}
