//! Update handlers for explorer messages.
//!
//! Every interaction re-runs the relevant pipeline steps: a submitted query
//! searches, a completed search (re)selects a song, a selection loads its
//! samples and lays out the graph.

use iced::Task;

use super::messages::Message;
use super::state::ExplorerState;
use crate::explorer::{self, SearchOutcome};

/// Apply a message to the explorer state
pub fn handle(s: &mut ExplorerState, message: Message) -> Task<Message> {
    match message {
        Message::QueryChanged(query) => {
            s.query = query;
            if s.query.trim().is_empty() {
                clear_search(s);
            }
            Task::none()
        }
        Message::SearchSubmitted => start_search(s),
        Message::SearchCompleted(generation, outcome) => {
            if generation != s.search_generation {
                tracing::debug!("Ignoring stale search results (generation {})", generation);
                return Task::none();
            }
            handle_search_completed(s, outcome)
        }
        Message::SongSelected(summary) => select_song(s, summary.id),
        Message::SampleViewLoaded(song_id, result) => {
            // A newer selection supersedes this response
            if s.session.selected_song_id() != Some(song_id) {
                tracing::debug!("Ignoring stale details for song {}", song_id);
                return Task::none();
            }
            s.loading_song = None;
            match result {
                Ok(view) => {
                    s.error = None;
                    s.sample_view = Some(view);
                }
                Err(e) => {
                    s.error = Some(e);
                    s.sample_view = None;
                }
            }
            Task::none()
        }
    }
}

/// Empty query: nothing selected, nothing shown
fn clear_search(s: &mut ExplorerState) {
    s.search_generation += 1;
    s.session.clear();
    s.results.clear();
    s.searched = false;
    s.searching = false;
    s.loading_song = None;
    s.sample_view = None;
    s.error = None;
}

fn start_search(s: &mut ExplorerState) -> Task<Message> {
    let query = s.query.trim().to_string();
    if query.is_empty() {
        clear_search(s);
        return Task::none();
    }

    tracing::info!("Searching for '{}'", query);
    s.search_generation += 1;
    s.searching = true;
    s.error = None;

    let generation = s.search_generation;
    let api = s.api.clone();
    Task::perform(
        async move { explorer::run_search(api.as_ref(), &query).await },
        move |outcome| Message::SearchCompleted(generation, outcome),
    )
}

fn handle_search_completed(s: &mut ExplorerState, outcome: SearchOutcome) -> Task<Message> {
    s.searching = false;
    s.searched = true;
    s.error = outcome.error;
    s.results = outcome.results;

    match explorer::preferred_selection(&s.results, s.session.selected_song_id()) {
        Some(index) => {
            let song_id = s.results[index].id;
            select_song(s, song_id)
        }
        None => {
            s.session.clear();
            s.loading_song = None;
            s.sample_view = None;
            Task::none()
        }
    }
}

fn select_song(s: &mut ExplorerState, song_id: u64) -> Task<Message> {
    s.session.select(Some(song_id));
    s.loading_song = Some(song_id);

    let api = s.api.clone();
    Task::perform(
        async move { explorer::load_sample_view(api.as_ref(), song_id).await },
        move |result| Message::SampleViewLoaded(song_id, result),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::load_sample_view;
    use crate::genius::traits::mocks::MockGenius;
    use crate::model::SongSummary;
    use crate::test_utils::hip_hop_hooray_mock;
    use std::sync::Arc;

    fn state() -> ExplorerState {
        ExplorerState::new(Arc::new(MockGenius::empty()))
    }

    fn outcome(results: Vec<SongSummary>) -> SearchOutcome {
        SearchOutcome {
            results,
            error: None,
        }
    }

    #[test]
    fn test_clearing_query_resets_session() {
        let mut s = state();
        s.query = "hip hop".to_string();
        s.results = vec![SongSummary::new("A", 1)];
        s.session.select(Some(1));

        let _ = handle(&mut s, Message::QueryChanged("  ".to_string()));

        assert_eq!(s.session.selected_song_id(), None);
        assert!(s.results.is_empty());
        assert!(!s.searched);
    }

    #[test]
    fn test_empty_submit_does_not_search() {
        let mut s = state();
        let _ = handle(&mut s, Message::SearchSubmitted);
        assert!(!s.searching);
    }

    #[test]
    fn test_submit_marks_searching() {
        let mut s = state();
        let _ = handle(&mut s, Message::QueryChanged("Hip Hop Hooray".to_string()));
        let _ = handle(&mut s, Message::SearchSubmitted);
        assert!(s.searching);
    }

    #[test]
    fn test_search_completion_selects_first_result() {
        let mut s = state();
        s.searching = true;
        let results = vec![SongSummary::new("A", 1), SongSummary::new("B", 2)];

        let generation = s.search_generation;
        let _ = handle(&mut s, Message::SearchCompleted(generation, outcome(results)));

        assert!(!s.searching);
        assert!(s.searched);
        assert_eq!(s.session.selected_song_id(), Some(1));
        assert_eq!(s.loading_song, Some(1));
    }

    #[test]
    fn test_search_completion_keeps_existing_selection() {
        let mut s = state();
        s.session.select(Some(2));
        let results = vec![SongSummary::new("A", 1), SongSummary::new("B", 2)];

        let generation = s.search_generation;
        let _ = handle(&mut s, Message::SearchCompleted(generation, outcome(results)));

        assert_eq!(s.session.selected_song_id(), Some(2));
        assert_eq!(s.selected_summary().map(|r| r.id), Some(2));
    }

    #[test]
    fn test_failed_search_shows_error_and_clears_selection() {
        let mut s = state();
        s.session.select(Some(5));
        let failed = SearchOutcome {
            results: Vec::new(),
            error: Some("Error fetching search results: boom".to_string()),
        };

        let generation = s.search_generation;
        let _ = handle(&mut s, Message::SearchCompleted(generation, failed));

        assert_eq!(s.session.selected_song_id(), None);
        assert!(s.error.as_deref().unwrap().contains("boom"));
        assert!(s.sample_view.is_none());
    }

    #[test]
    fn test_results_arriving_after_clear_are_dropped() {
        let mut s = state();
        let _ = handle(&mut s, Message::QueryChanged("Hip Hop Hooray".to_string()));
        let _ = handle(&mut s, Message::SearchSubmitted);
        let in_flight = s.search_generation;
        let _ = handle(&mut s, Message::QueryChanged(String::new()));

        let late = outcome(vec![SongSummary::new("Hip Hop Hooray by Naughty by Nature", 777)]);
        let _ = handle(&mut s, Message::SearchCompleted(in_flight, late));

        assert_eq!(s.session.selected_song_id(), None);
        assert!(s.results.is_empty());
        assert_eq!(s.loading_song, None);
        assert!(!s.searched);
    }

    #[test]
    fn test_older_search_does_not_overwrite_newer() {
        let mut s = state();
        let _ = handle(&mut s, Message::QueryChanged("O.P.P.".to_string()));
        let _ = handle(&mut s, Message::SearchSubmitted);
        let first = s.search_generation;
        let _ = handle(&mut s, Message::QueryChanged("Hip Hop Hooray".to_string()));
        let _ = handle(&mut s, Message::SearchSubmitted);
        let second = s.search_generation;

        let newer = outcome(vec![SongSummary::new("Hip Hop Hooray by Naughty by Nature", 777)]);
        let _ = handle(&mut s, Message::SearchCompleted(second, newer));
        let older = outcome(vec![SongSummary::new("O.P.P. by Naughty by Nature", 778)]);
        let _ = handle(&mut s, Message::SearchCompleted(first, older));

        assert_eq!(s.results.len(), 1);
        assert_eq!(s.results[0].id, 777);
        assert_eq!(s.session.selected_song_id(), Some(777));
    }

    #[test]
    fn test_details_error_is_shown() {
        let mut s = state();
        s.session.select(Some(9));
        s.loading_song = Some(9);

        let _ = handle(
            &mut s,
            Message::SampleViewLoaded(9, Err("Could not find song details: nope".to_string())),
        );

        assert_eq!(s.loading_song, None);
        assert!(s.error.as_deref().unwrap().starts_with("Could not find song details"));
    }

    #[tokio::test]
    async fn test_loaded_view_is_stored() {
        let mut s = state();
        let _ = handle(&mut s, Message::SongSelected(SongSummary::new("Hip Hop Hooray", 777)));
        let view = load_sample_view(&hip_hop_hooray_mock(), 777).await;

        let _ = handle(&mut s, Message::SampleViewLoaded(777, view));

        assert_eq!(s.loading_song, None);
        let view = s.sample_view.as_ref().unwrap();
        assert_eq!(view.details.sampled_songs.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_view_is_ignored() {
        let mut s = state();
        s.session.select(Some(1));
        s.loading_song = Some(1);
        let view = load_sample_view(&hip_hop_hooray_mock(), 777).await;

        let _ = handle(&mut s, Message::SampleViewLoaded(777, view));

        assert!(s.sample_view.is_none());
        assert_eq!(s.loading_song, Some(1));
    }
}
