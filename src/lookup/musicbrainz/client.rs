//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.
//!
//! ## Includes
//! The `inc` parameter takes `+` separated entity names. The URL is built by
//! hand so the `+` stays literal; each include name is still percent-encoded.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::config::MusicBrainzConfig;
use crate::lookup::domain::{DiscLookup, LookupError, QueryStatus, ReleaseDetail};

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
    rate_limit: Duration,
    last_request: Mutex<Option<Instant>>,
}

/// Build the User-Agent string - MusicBrainz requires an app name, version and contact
fn user_agent(contact: &str) -> String {
    format!(
        "{}/{} ( {} )",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        contact
    )
}

impl MusicBrainzClient {
    /// Create a client from the `[musicbrainz]` config section
    pub fn new(config: &MusicBrainzConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(user_agent(&config.contact))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limit: Duration::from_millis(config.rate_limit_ms),
            last_request: Mutex::new(None),
        }
    }

    /// Look up a disc ID.
    ///
    /// Never fails: any error is folded into the returned status and the
    /// release list is left absent.
    pub async fn lookup_disc(&self, disc_id: &str) -> DiscLookup {
        let url = format!(
            "{}/discid/{}?fmt=json",
            self.base_url,
            urlencoding::encode(disc_id)
        );

        match self.send_request::<dto::DiscResponse>(&url).await {
            Ok((code, response)) => {
                tracing::debug!(
                    target: "lookup::client",
                    disc_id,
                    releases = response.releases.len(),
                    "Disc lookup succeeded"
                );
                DiscLookup {
                    status: QueryStatus::success(code),
                    releases: Some(adapter::to_release_summaries(response)),
                }
            }
            Err(e) => {
                tracing::debug!(target: "lookup::client", disc_id, error = %e, "Disc lookup failed");
                DiscLookup::absent(QueryStatus::from_error(&e))
            }
        }
    }

    /// Fetch a release with the given related entities included
    pub async fn fetch_release(
        &self,
        release_id: &str,
        includes: &[&str],
    ) -> Result<ReleaseDetail, LookupError> {
        let url = release_url(&self.base_url, release_id, includes);
        let (_, response) = self.send_request::<dto::Release>(&url).await?;
        Ok(adapter::to_release_detail(response))
    }

    /// Wait until the configured spacing since the previous request has passed
    async fn pace(&self) {
        let wait = {
            let mut last = match self.last_request.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let now = Instant::now();
            let wait = last
                .map(|prev| self.rate_limit.saturating_sub(now.duration_since(prev)))
                .unwrap_or_default();
            *last = Some(now + wait);
            wait
        };

        if !wait.is_zero() {
            tracing::trace!(target: "lookup::client", wait_ms = wait.as_millis() as u64, "Pacing request");
            tokio::time::sleep(wait).await;
        }
    }

    /// Send the HTTP request and parse the response
    async fn send_request<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<(u16, T), LookupError> {
        self.pace().await;

        tracing::debug!(target: "lookup::client", url, "GET");

        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout(e.to_string())
            } else {
                LookupError::Network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            // MusicBrainz answers errors with {"error": "..."}
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let code = status.as_u16();
        let parsed = response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Parse {
                code,
                message: e.to_string(),
            })?;

        Ok((code, parsed))
    }
}

/// Build a release lookup URL, keeping `+` between includes literal
fn release_url(base_url: &str, release_id: &str, includes: &[&str]) -> String {
    let mut url = format!("{}/release/{}?fmt=json", base_url, urlencoding::encode(release_id));

    if !includes.is_empty() {
        let inc = includes
            .iter()
            .map(|name| urlencoding::encode(name))
            .collect::<Vec<_>>()
            .join("+");
        url.push_str("&inc=");
        url.push_str(&inc);
    }

    url
}

/// Convert a non-success response into a lookup error
fn error_for_status(status: reqwest::StatusCode, body: &str) -> LookupError {
    let message = serde_json::from_str::<dto::ApiError>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown").to_string());

    match status {
        reqwest::StatusCode::NOT_FOUND => LookupError::NotFound(message),
        // MusicBrainz signals rate limiting with 503
        reqwest::StatusCode::TOO_MANY_REQUESTS | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
            LookupError::RateLimited {
                code: status.as_u16(),
                message,
            }
        }
        _ => LookupError::Api {
            code: status.as_u16(),
            message,
        },
    }
}
