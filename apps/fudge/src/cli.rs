//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use fudge::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fudge", version, about = "Fudge config manager")]
/// Top-level CLI options and subcommands. No subcommand opens the menu.
pub struct Cli {
    /// Directory holding config.json and sync.json
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Output format: human or json
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands for editing, registering, and syncing.
pub enum Commands {
    /// Show version
    Version,
    /// Interactive menu
    Menu {
        #[arg(long)]
        editor: Option<String>,
    },
    /// Create config.json if needed and open it in an editor
    Open {
        #[arg(long)]
        editor: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Print the config path instead of launching an editor")]
        print_path: bool,
    },
    /// Register a JSON file to receive config keys
    Add { path: String },
    /// List tracked files
    List,
    /// Merge config keys into every tracked file
    Sync {
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Preview changes without writing files")]
        dry_run: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if changes would occur")]
        check: bool,
    },
}
