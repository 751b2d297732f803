//! Test utilities and fixtures for sample-explorer tests.
//!
//! Builders for Genius JSON bodies, shaped like real API responses, so tests
//! exercise the same decode path as production.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{search_body, song_body};
//!
//! let mock = MockGenius::empty()
//!     .with_response("/search", search_body(&[("Song by Artist", 1)]))
//!     .with_response("/songs/1", song_body(1, "Song", "Artist", None, &[]));
//! ```

use serde_json::{Value, json};

use crate::genius::traits::mocks::MockGenius;
use crate::model::SongRecord;

/// A `/search` body with one song hit per `(full_title, id)`.
pub fn search_body(hits: &[(&str, u64)]) -> Value {
    let hits: Vec<Value> = hits
        .iter()
        .map(|&(full_title, id)| {
            let (title, artist) = full_title
                .split_once(" by ")
                .unwrap_or((full_title, "Unknown Artist"));
            json!({
                "type": "song",
                "index": "song",
                "result": {
                    "id": id,
                    "full_title": full_title,
                    "title": title,
                    "primary_artist": {"id": 1, "name": artist}
                }
            })
        })
        .collect();

    json!({
        "meta": {"status": 200},
        "response": {"hits": hits}
    })
}

/// A `/songs/{id}` body whose "samples" relationship lists `samples`.
///
/// Also includes an unrelated "sampled_in" relationship, as real payloads do.
pub fn song_body(
    id: u64,
    title: &str,
    artist: &str,
    release_date: Option<&str>,
    samples: &[SongRecord],
) -> Value {
    let sampled: Vec<Value> = samples
        .iter()
        .map(|s| {
            json!({
                "id": s.id,
                "title": s.title,
                "primary_artist": {"id": 2, "name": s.artist},
                "release_date_components": {"year": s.year, "month": null, "day": null}
            })
        })
        .collect();

    json!({
        "meta": {"status": 200},
        "response": {
            "song": {
                "id": id,
                "title": title,
                "artist_names": artist,
                "primary_artist": {"id": 1, "name": artist},
                "release_date": release_date,
                "song_relationships": [
                    {"relationship_type": "samples", "type": "samples", "songs": sampled},
                    {"relationship_type": "sampled_in", "type": "sampled_in", "songs": []}
                ]
            }
        }
    })
}

/// Sample record with sensible defaults.
pub fn record(id: u64, title: &str, year: Option<i32>) -> SongRecord {
    SongRecord {
        id,
        title: title.to_string(),
        artist: format!("Artist {id}"),
        year,
    }
}

/// The "Hip Hop Hooray" scenario: one search hit (777) with two samples.
pub fn hip_hop_hooray_mock() -> MockGenius {
    MockGenius::empty()
        .with_response(
            "/search",
            search_body(&[("Hip Hop Hooray by Naughty by Nature", 777)]),
        )
        .with_response(
            "/songs/777",
            song_body(
                777,
                "Hip Hop Hooray",
                "Naughty by Nature",
                Some("1993-01-12"),
                &[
                    record(101, "Impeach the President", Some(1973)),
                    record(102, "Funky Drummer", Some(1970)),
                ],
            ),
        )
}
