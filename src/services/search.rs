//! Search service - free-text query to selectable song summaries.

use crate::genius::{GeniusApi, GeniusError, adapter};
use crate::model::SongSummary;

/// Search for songs matching `query`.
///
/// Results keep the API's relevance order. An empty (or whitespace-only)
/// query returns an empty list without touching the network.
pub async fn search_songs<A: GeniusApi + ?Sized>(
    api: &A,
    query: &str,
) -> Result<Vec<SongSummary>, GeniusError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let response = api.search(query).await?;
    let results = adapter::to_summaries(response);
    tracing::info!("Search {:?} returned {} results", query, results.len());
    Ok(results)
}

/// Find the best single match for a title, optionally restricted to an artist.
///
/// With an artist, the first hit whose primary artist name contains it
/// (case-insensitive) wins; otherwise the first hit.
pub async fn find_song<A: GeniusApi + ?Sized>(
    api: &A,
    title: &str,
    artist: Option<&str>,
) -> Result<Option<SongSummary>, GeniusError> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(None);
    }

    let response = api.search(title).await?;
    let wanted = artist
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty());

    let found = response
        .hits
        .into_iter()
        .map(|hit| hit.result)
        .find(|result| match &wanted {
            Some(artist) => result
                .primary_artist
                .as_ref()
                .is_some_and(|pa| pa.name.to_lowercase().contains(artist.as_str())),
            None => true,
        })
        .map(|result| SongSummary::new(result.full_title, result.id));

    match &found {
        Some(song) => tracing::info!("Found: {} (ID: {})", song.display_label, song.id),
        None => tracing::info!("No matching song found for {:?}", title),
    }
    Ok(found)
}
