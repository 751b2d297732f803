//! Command-line interface for sample-explorer.
//!
//! Provides commands for searching songs and inspecting their samples
//! without launching the GUI.

mod commands;

pub use commands::{Cli, Commands, run_command};
