//! Track listing extraction.
//!
//! Pure functions over release detail: which media belong to the disc in
//! the drive, what title and artist each track shows, how long it runs,
//! and whether a medium looks like a compilation.
//!
//! Per-track artists come from the linked recording's *first* credited
//! artist, while release artists are listed in full (see [`render`]).

pub mod render;

use crate::lookup::domain::{ArtistCredit, Medium, ReleaseDetail, Track};

/// A medium prepared for display
#[derive(Debug)]
pub struct MediumListing<'a> {
    pub medium: &'a Medium,
    /// One entry per track, aligned with `medium.tracks`
    pub artists: Vec<Option<&'a str>>,
    pub compilation: bool,
}

impl<'a> MediumListing<'a> {
    pub fn new(medium: &'a Medium) -> Self {
        let artists = track_artists(&medium.tracks);
        let compilation = is_compilation(&artists);

        Self {
            medium,
            artists,
            compilation,
        }
    }

    /// Tracks paired with their resolved artist
    pub fn tracks(&self) -> impl Iterator<Item = (&'a Track, Option<&'a str>)> + '_ {
        self.medium.tracks.iter().zip(self.artists.iter().copied())
    }
}

/// Media of a release that carry the given disc ID.
///
/// A release lists every disc it contains; only the one in the drive matters.
pub fn media_matching_disc_id<'a>(release: &'a ReleaseDetail, disc_id: &str) -> Vec<&'a Medium> {
    release
        .media
        .iter()
        .filter(|m| m.has_disc_id(disc_id))
        .collect()
}

/// Name of the first artist in a credit
pub fn first_artist_name(credit: &ArtistCredit) -> Option<&str> {
    credit.names.first().map(|n| n.artist_name.as_str())
}

/// Artist of a track, taken from its linked recording only
pub fn track_artist(track: &Track) -> Option<&str> {
    track
        .recording
        .as_ref()
        .and_then(|r| first_artist_name(&r.artist_credit))
}

/// Resolve the artist of every track, in track order
pub fn track_artists(tracks: &[Track]) -> Vec<Option<&str>> {
    tracks.iter().map(track_artist).collect()
}

/// Display title of a track: the recording's title when one is linked
pub fn track_title(track: &Track) -> &str {
    match &track.recording {
        Some(recording) => &recording.title,
        None => &track.title,
    }
}

/// Whether the tracks are credited to more than one artist.
///
/// The first known artist is the reference; any later artist that differs
/// (exact, case-sensitive) marks a compilation. Tracks without an artist
/// are ignored.
pub fn is_compilation(artists: &[Option<&str>]) -> bool {
    let mut known = artists.iter().flatten();

    match known.next() {
        Some(reference) => known.any(|artist| artist != reference),
        None => false,
    }
}

/// Length of a track in whole seconds (truncated)
pub fn track_duration_secs(track: &Track) -> u64 {
    track
        .length_ms
        .or_else(|| track.recording.as_ref().and_then(|r| r.length_ms))
        .unwrap_or(0)
        / 1000
}

/// Format seconds as zero-padded `HH:MM:SS`
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{medium, recorded_track, release, track};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(125), "00:02:05");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(359_999), "99:59:59");
    }

    #[test]
    fn test_track_duration_truncates() {
        let t = Track {
            length_ms: Some(125_999),
            ..track(1, "Song")
        };
        assert_eq!(track_duration_secs(&t), 125);
    }

    #[test]
    fn test_track_duration_falls_back_to_recording() {
        let mut t = recorded_track(1, "Song", "Artist");
        t.length_ms = None;
        if let Some(r) = t.recording.as_mut() {
            r.length_ms = Some(61_000);
        }
        assert_eq!(track_duration_secs(&t), 61);

        assert_eq!(track_duration_secs(&track(2, "No length")), 0);
    }

    #[test]
    fn test_title_prefers_recording() {
        let mut t = recorded_track(1, "Foo", "Artist");
        t.title = "Bar".to_string();
        assert_eq!(track_title(&t), "Foo");

        let t = track(1, "Bar");
        assert_eq!(track_title(&t), "Bar");
    }

    #[test]
    fn test_track_artist_ignores_track_level_credit() {
        // Only recordings carry artists in our model; an unlinked track has none
        assert_eq!(track_artist(&track(1, "Song")), None);
        assert_eq!(
            track_artist(&recorded_track(1, "Song", "Artist")),
            Some("Artist")
        );
    }

    #[test]
    fn test_first_artist_of_joint_credit() {
        let mut t = recorded_track(1, "Under Pressure", "Queen");
        if let Some(r) = t.recording.as_mut() {
            r.artist_credit.names.push(crate::lookup::domain::NameCredit {
                artist_name: "David Bowie".to_string(),
            });
        }
        assert_eq!(track_artist(&t), Some("Queen"));
    }

    #[test]
    fn test_single_artist_is_not_compilation() {
        assert!(!is_compilation(&[Some("A"), Some("A"), Some("A")]));
        assert!(!is_compilation(&[Some("A")]));
        assert!(!is_compilation(&[]));
    }

    #[test]
    fn test_different_artist_is_compilation() {
        assert!(is_compilation(&[Some("A"), Some("A"), Some("B")]));
        assert!(is_compilation(&[Some("A"), Some("a")]));
    }

    #[test]
    fn test_missing_artists_are_ignored() {
        assert!(!is_compilation(&[None, Some("A"), None, Some("A")]));
        assert!(is_compilation(&[None, Some("A"), None, Some("B")]));
        assert!(!is_compilation(&[None, None]));
    }

    #[test]
    fn test_media_filtered_by_disc_id() {
        let rel = release(
            "rel-1",
            vec![medium(1, "disc-a", vec![]), medium(2, "disc-b", vec![])],
        );

        let matching = media_matching_disc_id(&rel, "disc-a");

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].position, 1);
        assert!(media_matching_disc_id(&rel, "disc-c").is_empty());
    }

    #[test]
    fn test_medium_listing_aligns_artists() {
        let m = medium(
            1,
            "disc-a",
            vec![
                recorded_track(1, "One", "A"),
                track(2, "Two"),
                recorded_track(3, "Three", "B"),
            ],
        );

        let listing = MediumListing::new(&m);

        assert_eq!(listing.artists, vec![Some("A"), None, Some("B")]);
        assert!(listing.compilation);

        let pairs: Vec<_> = listing.tracks().map(|(t, a)| (t.position, a)).collect();
        assert_eq!(pairs, vec![(1, Some("A")), (2, None), (3, Some("B"))]);
    }
}
