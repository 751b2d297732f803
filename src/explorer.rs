//! Search -> select -> details -> graph pipeline, independent of any UI.
//!
//! Both the GUI and the CLI drive the same steps:
//! 1. [`run_search`] turns a query into selectable summaries (errors become
//!    a message, never a failure)
//! 2. [`preferred_selection`] decides which result is selected
//! 3. [`Session`] remembers the selected song ID
//! 4. [`load_sample_view`] fetches details, builds the graph and lays it out

use crate::genius::GeniusApi;
use crate::graph::{Figure, SampleGraph, render};
use crate::model::{SongDetails, SongSummary};
use crate::services;

/// Per-user session state: the currently selected song
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selected_song_id: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_song_id(&self) -> Option<u64> {
        self.selected_song_id
    }

    pub fn select(&mut self, song_id: Option<u64>) {
        if self.selected_song_id != song_id {
            tracing::debug!("Selected song: {:?}", song_id);
        }
        self.selected_song_id = song_id;
    }

    /// Forget the selection (e.g. when the query is cleared)
    pub fn clear(&mut self) {
        self.select(None);
    }
}

/// Results of one search, plus a user-facing error if the call failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub results: Vec<SongSummary>,
    pub error: Option<String>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Everything shown for a selected song
#[derive(Debug, Clone)]
pub struct SampleView {
    pub details: SongDetails,
    pub graph: SampleGraph,
    pub figure: Figure,
}

/// Run a search; failures yield an empty list and an error message.
pub async fn run_search<A: GeniusApi + ?Sized>(api: &A, query: &str) -> SearchOutcome {
    match services::search_songs(api, query).await {
        Ok(results) => SearchOutcome {
            results,
            error: None,
        },
        Err(e) => {
            tracing::error!("Error fetching search results: {}", e);
            SearchOutcome {
                results: Vec::new(),
                error: Some(format!("Error fetching search results: {e}")),
            }
        }
    }
}

/// Index of the result to select: the current selection when it is still
/// among the results, otherwise the first result.
pub fn preferred_selection(results: &[SongSummary], current: Option<u64>) -> Option<usize> {
    if results.is_empty() {
        return None;
    }
    current
        .and_then(|id| results.iter().position(|r| r.id == id))
        .or(Some(0))
}

/// Fetch a song's samples and turn them into a graph and a figure.
pub async fn load_sample_view<A: GeniusApi + ?Sized>(
    api: &A,
    song_id: u64,
) -> Result<SampleView, String> {
    let details = services::fetch_song_details(api, song_id)
        .await
        .map_err(|e| {
            tracing::error!("Could not load song {}: {}", song_id, e);
            format!("Could not find song details: {e}")
        })?;

    let graph = SampleGraph::from_details(&details);
    let figure = render(&graph);
    Ok(SampleView {
        details,
        graph,
        figure,
    })
}
