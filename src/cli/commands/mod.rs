//! CLI command definitions and dispatch.
//!
//! Each group of subcommands lives in its own submodule:
//! - `search`: song search and single-song lookup
//! - `samples`: sample graphs for a song, and the full explore pipeline
//! - `settings`: storing the access token

mod samples;
mod search;
mod settings;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::config;
use crate::genius::GeniusClient;

pub use samples::{cmd_explore, cmd_samples};
pub use search::{cmd_find, cmd_search};
pub use settings::cmd_set_token;

/// Sample Explorer CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Genius API access token (or set GENIUS_ACCESS_TOKEN env var)
    #[arg(long, env = "GENIUS_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search for songs by free text
    Search {
        /// Search query (e.g. a song title)
        query: String,
    },
    /// Find a single song ID by title
    Find {
        /// Song title
        title: String,
        /// Only accept songs whose primary artist contains this name
        #[arg(short, long)]
        artist: Option<String>,
    },
    /// Show the songs sampled by a song
    Samples {
        /// Genius song ID
        id: u64,
        /// Write the sample graph as SVG to this path
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Search, pick a result and show its sample graph
    Explore {
        /// Search query
        query: String,
        /// Which search result to explore (1-based)
        #[arg(short, long, default_value = "1")]
        pick: usize,
        /// Write the sample graph as SVG to this path
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Store the Genius access token in the config file
    SetToken {
        /// Access token from https://genius.com/api-clients
        token: String,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified
/// (meaning the GUI should launch).
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    if let Commands::SetToken { token } = command {
        cmd_set_token(token)?;
        return Ok(true);
    }

    let rt = Runtime::new()?;
    let client = genius_client(cli.token.as_deref())?;

    match command {
        Commands::Search { query } => cmd_search(&rt, &client, query)?,
        Commands::Find { title, artist } => cmd_find(&rt, &client, title, artist.as_deref())?,
        Commands::Samples { id, svg } => cmd_samples(&rt, &client, *id, svg.as_deref())?,
        Commands::Explore { query, pick, svg } => {
            cmd_explore(&rt, &client, query, *pick, svg.as_deref())?
        }
        Commands::SetToken { .. } => {}
    }
    Ok(true)
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Build an API client from config, failing if no access token is available
pub(crate) fn genius_client(token: Option<&str>) -> anyhow::Result<GeniusClient> {
    let config = config::load();
    let token = config.access_token(token)?;
    Ok(GeniusClient::with_base_url(token, config.api.base_url)?)
}

/// Write an SVG document, reporting where it went
pub(crate) fn write_svg(path: &Path, svg: &str) -> anyhow::Result<()> {
    use crate::error::ResultExt;

    std::fs::write(path, svg).with_context(format!("writing {}", path.display()))?;
    println!("Graph written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_explore() {
        let cli = Cli::try_parse_from(["sample-explorer", "explore", "Hip Hop Hooray", "--pick", "2"])
            .unwrap();
        match cli.command {
            Some(Commands::Explore { query, pick, svg }) => {
                assert_eq!(query, "Hip Hop Hooray");
                assert_eq!(pick, 2);
                assert!(svg.is_none());
            }
            _ => panic!("expected explore command"),
        }
    }

    #[test]
    fn test_parse_samples_with_global_token() {
        let cli = Cli::try_parse_from(["sample-explorer", "samples", "777", "--token", "abc"])
            .unwrap();
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(matches!(cli.command, Some(Commands::Samples { id: 777, .. })));
    }

    #[test]
    fn test_no_command_launches_gui() {
        let cli = Cli::try_parse_from(["sample-explorer"]).unwrap();
        assert!(!run_command(&cli).unwrap());
    }
}
