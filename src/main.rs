//! Sample Explorer - browse the songs a track samples.
//!
//! Search the Genius catalogue, pick a song, and see the records it samples
//! as a star graph with a details table. Runs as a GUI by default, or as a
//! CLI when a subcommand is given.

// Hide console window on Windows when running as GUI
// CLI commands will attach to the parent console or allocate one
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

pub mod cli;
pub mod config;
pub mod error;
pub mod explorer;
pub mod genius;
pub mod graph;
pub mod model;
pub mod services;
#[cfg(test)]
pub mod test_utils;
pub mod ui;

use clap::Parser;
use iced::{Size, application, window};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::SampleExplorer;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // If running CLI commands on Windows, attach to console for output
    #[cfg(target_os = "windows")]
    if args.command.is_some() {
        attach_console();
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("sample_explorer=info".parse()?))
        .init();

    // Try to run a CLI command
    if cli::run_command(&args)? {
        return Ok(());
    }

    // No command specified, launch the GUI
    let token = args.token.clone();
    application("Sample Explorer", SampleExplorer::update, SampleExplorer::view)
        .theme(SampleExplorer::theme)
        .window(window::Settings {
            size: Size::new(1100.0, 820.0),
            ..Default::default()
        })
        .run_with(move || SampleExplorer::new(token))
        .map_err(|e| anyhow::anyhow!("GUI Error: {}", e))
}

/// Attach to parent console on Windows for CLI output.
/// This is needed because windows_subsystem = "windows" detaches from console.
#[cfg(target_os = "windows")]
fn attach_console() {
    use windows_sys::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};
    unsafe {
        let _ = AttachConsole(ATTACH_PARENT_PROCESS);
    }
}
