//! Message types for the Sample Explorer UI.

use crate::explorer::{SampleView, SearchOutcome};
use crate::model::SongSummary;

/// All possible messages that can be sent in the application
#[derive(Debug, Clone)]
pub enum Message {
    // Search
    QueryChanged(String),
    SearchSubmitted,
    /// Outcome tagged with the search generation that produced it
    SearchCompleted(u64, SearchOutcome),

    // Selection and song details
    SongSelected(SongSummary),
    SampleViewLoaded(u64, Result<SampleView, String>),
}
