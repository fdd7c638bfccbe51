//! Lookup service - turns a disc ID into a printed track listing
//!
//! 1. Look up the disc ID (diagnostics are always printed)
//! 2. Fetch full detail for every candidate release
//! 3. Print the media of each release that match the disc
//!
//! Anything missing along the way just shortens the output.

use std::io::Write;

use crate::disc::DiscFingerprint;
use crate::error::{Result, ResultExt};
use crate::listing::render;
use crate::lookup::musicbrainz::RELEASE_INCLUDES;
use crate::lookup::traits::CatalogApi;

/// Counts gathered while listing a disc
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupSummary {
    /// Candidate releases returned by the disc lookup
    pub releases_found: usize,
    /// Releases whose detail could be fetched
    pub releases_fetched: usize,
    /// Media matching the disc across all releases
    pub media_listed: usize,
}

/// Service listing discs against a catalog
pub struct LookupService<C> {
    catalog: C,
}

impl<C: CatalogApi> LookupService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Look up `fingerprint` and write the full listing to `out`.
    ///
    /// Only write failures are errors; catalog failures end the listing early.
    pub async fn list_disc<W: Write>(
        &self,
        fingerprint: &DiscFingerprint,
        out: &mut W,
    ) -> Result<LookupSummary> {
        let disc_id = fingerprint.as_str();
        let mut summary = LookupSummary::default();

        render::write_disc_id(out, disc_id)?;

        let lookup = self.catalog.lookup_disc(disc_id).await;
        render::write_status(out, &lookup.status)?;

        let Some(releases) = lookup.releases else {
            tracing::info!(
                target: "lookup::service",
                disc_id,
                result = lookup.status.result.code(),
                "No disc found"
            );
            return Ok(summary);
        };

        summary.releases_found = releases.len();
        render::write_release_count(out, releases.len())?;

        for candidate in &releases {
            let release = match self
                .catalog
                .fetch_release(&candidate.id, RELEASE_INCLUDES)
                .await
            {
                Ok(release) => release,
                Err(e) => {
                    tracing::debug!(
                        target: "lookup::service",
                        release_id = %candidate.id,
                        title = %candidate.title,
                        error = %e,
                        "Skipping release"
                    );
                    continue;
                }
            };

            tracing::debug!(
                target: "lookup::service",
                release_id = %release.id,
                title = %release.title,
                media = release.media.len(),
                "Fetched release"
            );

            summary.releases_fetched += 1;
            summary.media_listed += render::write_release(out, &release, disc_id)?;
        }

        out.flush().with_context("flushing listing")?;

        tracing::info!(
            target: "lookup::service",
            disc_id,
            found = summary.releases_found,
            fetched = summary.releases_fetched,
            media = summary.media_listed,
            "Listing complete"
        );

        Ok(summary)
    }
}
