//! Test utilities and fixtures for cdlookup tests.
//!
//! Small builders for release detail so tests only spell out what they check.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{medium, recorded_track, release};
//!
//! let rel = release("rel-1", vec![
//!     medium(1, "disc-a", vec![recorded_track(1, "Song", "Artist")]),
//! ]);
//! ```

use crate::lookup::domain::{
    ArtistCredit, Medium, NameCredit, Recording, ReleaseDetail, ReleaseGroup, Track,
};

/// Creates an artist credit naming the given artists in order.
pub fn credit(names: &[&str]) -> ArtistCredit {
    ArtistCredit {
        names: names
            .iter()
            .map(|name| NameCredit {
                artist_name: name.to_string(),
            })
            .collect(),
    }
}

/// Creates a track with no linked recording.
///
/// Length defaults to 3 minutes.
pub fn track(position: u32, title: &str) -> Track {
    Track {
        position,
        title: title.to_string(),
        length_ms: Some(180_000),
        recording: None,
    }
}

/// Creates a track linked to a recording with the same title, credited to `artist`.
pub fn recorded_track(position: u32, title: &str, artist: &str) -> Track {
    Track {
        recording: Some(Recording {
            id: format!("rec-{}", position),
            title: title.to_string(),
            length_ms: None,
            artist_credit: credit(&[artist]),
        }),
        ..track(position, title)
    }
}

/// Creates a medium carrying a single disc ID.
pub fn medium(position: u32, disc_id: &str, tracks: Vec<Track>) -> Medium {
    Medium {
        title: String::new(),
        position,
        track_offset: Some(0),
        disc_ids: vec![disc_id.to_string()],
        tracks,
    }
}

/// Creates a release by "Test Artist" in release group "Test Album".
pub fn release(id: &str, media: Vec<Medium>) -> ReleaseDetail {
    ReleaseDetail {
        id: id.to_string(),
        title: "Test Album".to_string(),
        release_group: Some(ReleaseGroup {
            id: format!("rg-{}", id),
            title: "Test Album".to_string(),
        }),
        artist_credit: credit(&["Test Artist"]),
        media,
    }
}
