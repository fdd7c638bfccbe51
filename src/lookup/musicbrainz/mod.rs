//! MusicBrainz API integration
//!
//! Resolves a disc ID to its candidate releases and fetches full release
//! detail (artists, media, tracks, recordings) for each of them.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use client::MusicBrainzClient;

/// Related entities requested with every release fetch
pub const RELEASE_INCLUDES: &[&str] = &[
    "artists",
    "labels",
    "recordings",
    "release-groups",
    "url-rels",
    "discids",
    "artist-credits",
];
