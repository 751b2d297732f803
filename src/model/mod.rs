//! Core data models for sample exploration.
//!
//! Defines the primary entities: [`SongSummary`], [`SongRecord`] and
//! [`SongDetails`]. These are OUR types - every Genius response is converted
//! into them by `genius::adapter` before anything else sees it.

use std::fmt;

/// One search hit, as presented to the user for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSummary {
    /// Label shown in result lists (the API's full title)
    pub display_label: String,
    /// Genius song ID
    pub id: u64,
}

impl SongSummary {
    pub fn new(display_label: impl Into<String>, id: u64) -> Self {
        Self {
            display_label: display_label.into(),
            id,
        }
    }
}

// Pick lists render their options through Display
impl fmt::Display for SongSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label)
    }
}

/// Normalized record for a song (the main song or one of its samples).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    /// Genius song ID
    pub id: u64,
    /// Song title
    pub title: String,
    /// Primary artist name
    pub artist: String,
    /// Release year, when the API knows it
    pub year: Option<i32>,
}

impl SongRecord {
    /// Year as display text ("Unknown" when absent)
    pub fn year_label(&self) -> String {
        self.year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// A song together with the songs it samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongDetails {
    pub main_song: SongRecord,
    /// Sampled songs in API order
    pub sampled_songs: Vec<SongRecord>,
}

impl SongDetails {
    pub fn has_samples(&self) -> bool {
        !self.sampled_songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_displays_label() {
        let summary = SongSummary::new("Hip Hop Hooray by Naughty by Nature", 777);
        assert_eq!(summary.to_string(), "Hip Hop Hooray by Naughty by Nature");
    }

    #[test]
    fn test_year_label() {
        let mut record = SongRecord {
            id: 1,
            title: "Impeach the President".to_string(),
            artist: "The Honey Drippers".to_string(),
            year: Some(1973),
        };
        assert_eq!(record.year_label(), "1973");

        record.year = None;
        assert_eq!(record.year_label(), "Unknown");
    }
}
