//! Fudge CLI binary entry point.
//! Delegates to the library for open/add/sync and prints results.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use fudge::config::{self, Effective};
use fudge::registry::Registry;
use fudge::store::ConfigStore;
use fudge::sync::{self, run_sync, SyncOptions};
use fudge::tui::Tui;
use fudge::{editor, output, FudgeError};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FUDGE_LOG";

fn main() {
    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap_or(Commands::Menu { editor: None });
    if let Commands::Version = cmd {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let cli_editor = match &cmd {
        Commands::Menu { editor } | Commands::Open { editor, .. } => editor.clone(),
        _ => None,
    };
    let eff = match config::resolve_effective(
        cli.config_dir.as_deref(),
        cli.output,
        cli_editor.as_deref(),
    ) {
        Ok(eff) => eff,
        Err(e) => {
            output::print_error(&e, cli.output.unwrap_or_default());
            std::process::exit(2);
        }
    };

    let menu = matches!(cmd, Commands::Menu { .. });
    init_logging(menu.then(|| eff.dir.log_path()).as_deref());

    let code = match run(cmd, &eff) {
        Ok(code) => code,
        Err(e) => {
            output::print_error(&e, eff.output);
            2
        }
    };
    std::process::exit(code);
}

/// Execute one command; returns the process exit code.
fn run(cmd: Commands, eff: &Effective) -> Result<i32, FudgeError> {
    match cmd {
        Commands::Version => Ok(0),
        Commands::Menu { .. } => {
            let result = Tui::new().and_then(|mut tui| tui.run(eff));
            if let Err(e) = result {
                eprintln!("❌ error: terminal failure: {}", e);
                return Ok(2);
            }
            Ok(0)
        }
        Commands::Open { print_path, .. } => {
            let path = ConfigStore::new(&eff.dir).open()?;
            if print_path {
                output::print_config_path(&path, eff.output);
            } else {
                editor::launch(&eff.editor, &path)?;
            }
            Ok(0)
        }
        Commands::Add { path } => {
            let added = Registry::new(&eff.dir).add(&path)?;
            output::print_added(&added.path, added.total, eff.output);
            Ok(0)
        }
        Commands::List => {
            let set = Registry::new(&eff.dir).list()?;
            output::print_list(&set, eff.output);
            Ok(0)
        }
        Commands::Sync { dry_run, check } => {
            let opts = SyncOptions::from_flags(dry_run, check);
            let report = run_sync(&eff.dir, opts)?;
            output::print_sync(&report, eff.output, !opts.write);
            Ok(sync::exit_code(&report, check))
        }
    }
}

/// Log to stderr, or to `log_file` while the menu owns the terminal.
fn init_logging(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let _ = std::fs::create_dir_all(path.parent().unwrap_or(Path::new(".")));
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init(),
                // Drop logs rather than draw over the menu.
                Err(_) => builder.with_writer(std::io::sink).init(),
            }
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
}
