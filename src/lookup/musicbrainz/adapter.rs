//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If MusicBrainz changes their response format, only this file and dto.rs
//! need to change.

use super::dto;
use crate::lookup::domain::{
    ArtistCredit, Medium, NameCredit, Recording, ReleaseDetail, ReleaseGroup, ReleaseSummary,
    Track,
};

/// Convert a disc ID lookup to the candidate release list
pub fn to_release_summaries(response: dto::DiscResponse) -> Vec<ReleaseSummary> {
    response
        .releases
        .into_iter()
        .map(|r| ReleaseSummary {
            id: r.id,
            title: r.title,
        })
        .collect()
}

/// Convert a full release response to a release detail
pub fn to_release_detail(release: dto::Release) -> ReleaseDetail {
    ReleaseDetail {
        id: release.id,
        title: release.title,
        release_group: release.release_group.map(|rg| ReleaseGroup {
            id: rg.id,
            title: rg.title,
        }),
        artist_credit: to_artist_credit(release.artist_credit),
        media: release.media.into_iter().map(to_medium).collect(),
    }
}

fn to_artist_credit(credits: Vec<dto::ArtistCredit>) -> ArtistCredit {
    let names = credits
        .into_iter()
        .map(|credit| NameCredit {
            artist_name: credit.artist.name,
        })
        .collect();

    ArtistCredit { names }
}

fn to_medium(medium: dto::Medium) -> Medium {
    Medium {
        title: medium.title.unwrap_or_default(),
        position: medium.position.unwrap_or(0),
        track_offset: medium.track_offset,
        disc_ids: medium.discs.into_iter().map(|d| d.id).collect(),
        tracks: medium.tracks.into_iter().map(to_track).collect(),
    }
}

fn to_track(track: dto::Track) -> Track {
    Track {
        position: track.position.unwrap_or(0),
        title: track.title.unwrap_or_default(),
        length_ms: track.length,
        recording: track.recording.map(to_recording),
    }
}

fn to_recording(recording: dto::Recording) -> Recording {
    Recording {
        id: recording.id,
        title: recording.title,
        length_ms: recording.length,
        artist_credit: to_artist_credit(recording.artist_credit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_artist_credit(name: &str, credited: Option<&str>, join: Option<&str>) -> dto::ArtistCredit {
        dto::ArtistCredit {
            artist: dto::Artist {
                id: format!("{}-id", name.to_lowercase()),
                name: name.to_string(),
                sort_name: None,
            },
            name: credited.map(String::from),
            joinphrase: join.map(String::from),
        }
    }

    fn make_release(id: &str) -> dto::Release {
        dto::Release {
            id: id.to_string(),
            title: "Test Album".to_string(),
            status: Some("Official".to_string()),
            date: None,
            country: None,
            artist_credit: vec![],
            release_group: None,
            media: vec![],
        }
    }

    #[test]
    fn test_summaries_keep_catalog_order() {
        let response = dto::DiscResponse {
            id: "disc".to_string(),
            sectors: None,
            offset_count: None,
            releases: vec![make_release("b"), make_release("a")],
        };

        let summaries = to_release_summaries(response);

        let ids: Vec<_> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_artist_credit_names() {
        let credit = to_artist_credit(vec![
            make_artist_credit("Queen", Some("Queen"), Some(" & ")),
            make_artist_credit("David Bowie", Some("Bowie"), None),
        ]);

        assert_eq!(credit.names.len(), 2);
        assert_eq!(credit.names[0].artist_name, "Queen");
        // Official name, not the credited-as name
        assert_eq!(credit.names[1].artist_name, "David Bowie");
    }

    #[test]
    fn test_release_without_group() {
        let detail = to_release_detail(make_release("rel-1"));

        assert!(detail.release_group.is_none());
        assert!(detail.media.is_empty());
        assert!(detail.artist_credit.names.is_empty());
    }

    #[test]
    fn test_medium_conversion() {
        let mut release = make_release("rel-1");
        release.media.push(dto::Medium {
            title: None,
            position: Some(2),
            format: Some("CD".to_string()),
            track_count: Some(1),
            track_offset: Some(0),
            discs: vec![dto::Disc {
                id: "disc-b".to_string(),
                sectors: None,
            }],
            tracks: vec![dto::Track {
                id: None,
                position: Some(1),
                number: Some("1".to_string()),
                title: Some("Track Title".to_string()),
                length: Some(1000),
                artist_credit: vec![],
                recording: Some(dto::Recording {
                    id: "rec-1".to_string(),
                    title: "Recording Title".to_string(),
                    length: None,
                    artist_credit: vec![make_artist_credit("Artist", None, None)],
                }),
            }],
        });

        let detail = to_release_detail(release);
        let medium = &detail.media[0];

        assert_eq!(medium.title, "");
        assert_eq!(medium.position, 2);
        assert_eq!(medium.disc_ids, vec!["disc-b".to_string()]);

        let track = &medium.tracks[0];
        assert_eq!(track.title, "Track Title");
        assert_eq!(track.length_ms, Some(1000));

        let recording = track.recording.as_ref().expect("recording");
        assert_eq!(recording.title, "Recording Title");
        assert_eq!(recording.artist_credit.names[0].artist_name, "Artist");
    }
}
