//! Song search commands.

use tokio::runtime::Runtime;

use crate::explorer;
use crate::genius::GeniusApi;
use crate::model::SongSummary;
use crate::services;

/// Search for songs and print the numbered results
pub fn cmd_search<A: GeniusApi>(rt: &Runtime, api: &A, query: &str) -> anyhow::Result<()> {
    let outcome = rt.block_on(explorer::run_search(api, query));

    if let Some(error) = &outcome.error {
        eprintln!("✗ {}", error);
        return Ok(());
    }

    print!("{}", format_results(&outcome.results));
    Ok(())
}

/// Find a single song by title (and optionally artist) and print its ID
pub fn cmd_find<A: GeniusApi>(
    rt: &Runtime,
    api: &A,
    title: &str,
    artist: Option<&str>,
) -> anyhow::Result<()> {
    match rt.block_on(services::find_song(api, title, artist)) {
        Ok(Some(song)) => {
            println!("✓ Found: {}", song.display_label);
            println!("  Song ID: {}", song.id);
            match rt.block_on(services::fetch_artist_names(api, song.id)) {
                Ok(names) => println!("  Artists: {}", names),
                Err(e) => tracing::warn!("Could not load artist credits: {}", e),
            }
        }
        Ok(None) => println!("No matching song found."),
        Err(e) => eprintln!("✗ Error searching for song: {}", e),
    }
    Ok(())
}

/// Numbered result list, or the "no results" notice
pub(crate) fn format_results(results: &[SongSummary]) -> String {
    if results.is_empty() {
        return "No results found. Try a different search term.\n".to_string();
    }

    let width = results.len().to_string().len();
    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{:>width$}. {} (ID: {})\n", i + 1, r.display_label, r.id))
        .collect()
}
