//! Genius API Data Transfer Objects
//!
//! These types match what the Genius API returns for the two endpoints we use.
//! DO NOT use these types outside the genius module - convert to domain types.
//!
//! API Reference: https://docs.genius.com
//!
//! Every response is wrapped in an envelope:
//! `{"meta": {"status": 200}, "response": {...}}`

use serde::{Deserialize, Serialize};

/// Response envelope shared by all endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// Status block (absent in some mocked/cached payloads)
    pub meta: Option<Meta>,
    /// Endpoint-specific payload
    pub response: T,
}

/// Envelope status
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Meta {
    pub status: u16,
    /// Human-readable error message on failures
    pub message: Option<String>,
}

/// Error body returned by the OAuth layer (e.g. bad token)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub meta: Option<Meta>,
}

impl ApiError {
    /// Best available human-readable message
    pub fn message(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.meta.as_ref().and_then(|m| m.message.clone()))
            .or_else(|| self.error.clone())
    }
}

// ============================================================================
// GET /search?q=...
// ============================================================================

/// Search payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Hit {
    /// Hit type ("song" for song results)
    #[serde(rename = "type")]
    pub hit_type: Option<String>,
    pub result: SearchResult,
}

/// The song carried by a search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    pub id: u64,
    /// Title with artist, e.g. "Hip Hop Hooray by Naughty by Nature"
    pub full_title: String,
    pub title: Option<String>,
    pub primary_artist: Option<Artist>,
}

// ============================================================================
// GET /songs/{song_id}
// ============================================================================

/// Song payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongResponse {
    pub song: Song,
}

/// Full song object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Song {
    pub id: u64,
    pub title: String,
    /// Credit line, e.g. "Nas (Ft. Pete Rock)"
    pub artist_names: Option<String>,
    pub primary_artist: Artist,
    /// Release date (YYYY-MM-DD), often missing for older songs
    pub release_date: Option<String>,
    pub release_date_components: Option<DateComponents>,
    /// Relationships to other songs (samples, sampled in, covers, ...)
    #[serde(default)]
    pub song_relationships: Vec<SongRelationship>,
}

/// Artist reference
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<u64>,
    pub name: String,
}

/// Split release date; any component may be null
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DateComponents {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// A typed group of related songs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongRelationship {
    /// Relationship type ("samples", "sampled_in", "cover_of", ...)
    #[serde(rename = "type")]
    pub relationship_type: String,
    #[serde(default)]
    pub songs: Vec<RelatedSong>,
}

/// Abbreviated song object inside a relationship
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelatedSong {
    pub id: u64,
    pub title: String,
    pub primary_artist: Artist,
    pub release_date_components: Option<DateComponents>,
}

/// Relationship type that marks songs sampled by the main song
pub const SAMPLES_RELATIONSHIP: &str = "samples";
