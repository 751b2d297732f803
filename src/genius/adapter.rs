//! Adapter layer: Convert Genius DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If Genius changes their response format, only this file and dto.rs
//! need to change.

use super::dto;
use crate::model::{SongDetails, SongRecord, SongSummary};

/// Convert search hits to summaries, preserving the API's relevance order
pub fn to_summaries(response: dto::SearchResponse) -> Vec<SongSummary> {
    response
        .hits
        .into_iter()
        .map(|hit| SongSummary::new(hit.result.full_title, hit.result.id))
        .collect()
}

/// Convert a song payload into the main record plus its sampled songs.
///
/// `song_id` is the ID that was requested; the main record always carries it.
pub fn to_details(song_id: u64, song: dto::Song) -> SongDetails {
    let main_song = SongRecord {
        id: song_id,
        title: song.title,
        artist: song.primary_artist.name,
        year: song.release_date.as_deref().and_then(parse_year),
    };

    let sampled_songs = song
        .song_relationships
        .into_iter()
        .filter(|rel| rel.relationship_type == dto::SAMPLES_RELATIONSHIP)
        .flat_map(|rel| rel.songs)
        .map(to_record)
        .collect();

    SongDetails {
        main_song,
        sampled_songs,
    }
}

/// Credit line for a song, falling back to the primary artist
pub fn artist_names(song: &dto::Song) -> String {
    song.artist_names
        .clone()
        .filter(|names| !names.trim().is_empty())
        .unwrap_or_else(|| song.primary_artist.name.clone())
}

fn to_record(song: dto::RelatedSong) -> SongRecord {
    SongRecord {
        id: song.id,
        title: song.title,
        artist: song.primary_artist.name,
        year: song.release_date_components.and_then(|c| c.year),
    }
}

/// Leading year component of a release date ("1993-01-12" -> 1993)
pub fn parse_year(release_date: &str) -> Option<i32> {
    release_date.trim().split('-').next()?.parse().ok()
}
