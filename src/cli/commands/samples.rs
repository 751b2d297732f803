//! Sample graph commands.

use std::path::Path;
use tokio::runtime::Runtime;

use crate::explorer::{self, SampleView};
use crate::genius::GeniusApi;
use crate::graph::SampleGraph;
use crate::model::SongRecord;

use super::search::format_results;
use super::write_svg;

/// SVG export size in pixels
const SVG_WIDTH: u32 = 1200;
const SVG_HEIGHT: u32 = 600;

/// Show the songs sampled by one song
pub fn cmd_samples<A: GeniusApi>(
    rt: &Runtime,
    api: &A,
    song_id: u64,
    svg: Option<&Path>,
) -> anyhow::Result<()> {
    println!("Loading sample data for song {}...", song_id);
    match rt.block_on(explorer::load_sample_view(api, song_id)) {
        Ok(view) => print_view(&view, svg),
        Err(message) => {
            eprintln!("✗ {}", message);
            Ok(())
        }
    }
}

/// Search, select a result and show its sample graph
pub fn cmd_explore<A: GeniusApi>(
    rt: &Runtime,
    api: &A,
    query: &str,
    pick: usize,
    svg: Option<&Path>,
) -> anyhow::Result<()> {
    let outcome = rt.block_on(explorer::run_search(api, query));

    if let Some(error) = &outcome.error {
        eprintln!("✗ {}", error);
        return Ok(());
    }
    print!("{}", format_results(&outcome.results));
    if outcome.is_empty() {
        return Ok(());
    }

    let Some(selected) = pick.checked_sub(1).and_then(|i| outcome.results.get(i)) else {
        anyhow::bail!(
            "--pick must be between 1 and {} for this search",
            outcome.results.len()
        );
    };
    println!();
    println!("Selected: {} (ID: {})", selected.display_label, selected.id);
    cmd_samples(rt, api, selected.id, svg)
}

fn print_view(view: &SampleView, svg: Option<&Path>) -> anyhow::Result<()> {
    let main = &view.details.main_song;
    println!();
    println!("  Title:  {}", main.title);
    println!("  Artist: {}", main.artist);
    println!("  Year:   {}", main.year_label());
    println!();

    if view.details.has_samples() {
        println!("{}", star_diagram(&view.graph));
        println!("Sample Details");
        print!("{}", sample_table(&view.details.sampled_songs));
    } else {
        println!("No samples found for this song.");
    }

    // A song without samples still exports its single-node graph
    if let Some(path) = svg {
        println!();
        write_svg(path, &view.figure.to_svg(SVG_WIDTH, SVG_HEIGHT))?;
    }
    Ok(())
}

fn describe(record: &SongRecord) -> String {
    format!("{} ({}, {})", record.title, record.artist, record.year_label())
}

/// Text drawing of the star: the main song with one branch per sample
pub(crate) fn star_diagram(graph: &SampleGraph) -> String {
    let mut out = describe(graph.main_song());
    out.push('\n');

    let samples: Vec<_> = graph.sample_nodes().collect();
    for (i, (_, node)) in samples.iter().enumerate() {
        let branch = if i + 1 == samples.len() { "└──" } else { "├──" };
        out.push_str(&format!("{} {}\n", branch, describe(&node.record)));
    }
    out
}

/// Aligned Song / Artist / Year table
pub(crate) fn sample_table(samples: &[SongRecord]) -> String {
    let song_w = samples
        .iter()
        .map(|s| s.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Song".len());
    let artist_w = samples
        .iter()
        .map(|s| s.artist.chars().count())
        .max()
        .unwrap_or(0)
        .max("Artist".len());

    let mut out = format!("{:<song_w$}  {:<artist_w$}  Year\n", "Song", "Artist");
    for s in samples {
        out.push_str(&format!(
            "{:<song_w$}  {:<artist_w$}  {}\n",
            s.title,
            s.artist,
            s.year_label()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, render};
    use crate::model::SongDetails;
    use crate::test_utils::{hip_hop_hooray_mock, record};

    #[test]
    fn test_star_diagram() {
        let graph = build_graph(
            &record(777, "Hip Hop Hooray", Some(1993)),
            &[record(1, "A", Some(1970)), record(2, "B", None)],
        );
        assert_eq!(
            star_diagram(&graph),
            "Hip Hop Hooray (Artist 777, 1993)\n├── A (Artist 1, 1970)\n└── B (Artist 2, Unknown)\n"
        );
    }

    #[test]
    fn test_star_diagram_without_samples() {
        let graph = build_graph(&record(1, "Solo", None), &[]);
        assert_eq!(star_diagram(&graph), "Solo (Artist 1, Unknown)\n");
    }

    #[test]
    fn test_sample_table_alignment() {
        let table = sample_table(&[
            record(1, "Impeach the President", Some(1973)),
            record(2, "Funky Drummer", None),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Song"));
        assert!(lines[1].ends_with("1973"));
        assert!(lines[2].ends_with("Unknown"));
        let year_col = lines[0].find("Year").unwrap();
        assert_eq!(lines[1].find("1973").unwrap(), year_col);
    }

    #[test]
    fn test_song_without_samples_still_exports_svg() {
        let details = SongDetails {
            main_song: record(1, "Solo", Some(2001)),
            sampled_songs: Vec::new(),
        };
        let graph = SampleGraph::from_details(&details);
        let figure = render(&graph);
        let view = SampleView {
            details,
            graph,
            figure,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solo.svg");
        print_view(&view, Some(path.as_path())).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Solo"));
    }

    #[test]
    fn test_explore_loads_picked_result() {
        let rt = Runtime::new().unwrap();
        let mock = hip_hop_hooray_mock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.svg");

        cmd_explore(&rt, &mock, "Hip Hop Hooray", 1, Some(path.as_path())).unwrap();

        assert_eq!(mock.last_request().unwrap().path, "/songs/777");
        assert!(std::fs::read_to_string(&path).unwrap().contains("Funky Drummer"));
    }

    #[test]
    fn test_explore_rejects_out_of_range_pick() {
        let rt = Runtime::new().unwrap();
        let mock = hip_hop_hooray_mock();
        assert!(cmd_explore(&rt, &mock, "Hip Hop Hooray", 2, None).is_err());
        assert!(cmd_explore(&rt, &mock, "Hip Hop Hooray", 0, None).is_err());
        assert_eq!(mock.call_count(), 2);
    }
}
