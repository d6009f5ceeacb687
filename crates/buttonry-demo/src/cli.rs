//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render the buttonry demo page and switch its theme.
#[derive(Parser, Debug)]
#[command(name = "buttonry-demo", version)]
#[command(about = "Render the buttonry demo page and switch its theme", long_about = None)]
pub struct Args {
    /// Theme configuration (YAML). Defaults to `<config dir>/buttonry/config.yaml` when present.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where the selected theme is persisted. Defaults to `<config dir>/buttonry/storage.json`.
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the demo page as HTML.
    Render {
        /// Write to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Inspect or change the selected theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Click a demo button by its label.
    Click {
        /// Button label, case-insensitive (e.g. `secondary`).
        label: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the selected and the effective theme.
    Show,
    /// List the selectable themes.
    List,
    /// Select a theme.
    Set {
        name: String,
    },
}
