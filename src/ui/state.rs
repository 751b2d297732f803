//! Application state types for the Sample Explorer UI.

use std::sync::Arc;

use crate::explorer::{SampleView, Session};
use crate::genius::GeniusApi;
use crate::model::SongSummary;

/// Top-level application state
///
/// Note: ExplorerState is boxed to reduce stack size (Clippy large_enum_variant)
pub enum AppState {
    Ready(Box<ExplorerState>),
    /// Fatal startup problem (e.g. no access token)
    Error(String),
}

/// State for a running explorer window
pub struct ExplorerState {
    pub api: Arc<dyn GeniusApi>,
    pub session: Session,

    // Search
    pub query: String,
    pub results: Vec<SongSummary>,
    pub searching: bool,
    /// A search has completed for the current query
    pub searched: bool,
    /// Bumped on every submit and clear; older outcomes are dropped
    pub search_generation: u64,

    // Song details
    pub loading_song: Option<u64>,
    pub sample_view: Option<SampleView>,

    /// Last user-visible error
    pub error: Option<String>,
}

impl ExplorerState {
    pub fn new(api: Arc<dyn GeniusApi>) -> Self {
        Self {
            api,
            session: Session::new(),
            query: String::new(),
            results: Vec::new(),
            searching: false,
            searched: false,
            search_generation: 0,
            loading_song: None,
            sample_view: None,
            error: None,
        }
    }

    /// The summary matching the session's selection, if it is among the results
    pub fn selected_summary(&self) -> Option<&SongSummary> {
        let id = self.session.selected_song_id()?;
        self.results.iter().find(|r| r.id == id)
    }
}
