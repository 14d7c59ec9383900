//! Output rendering for open, add, list, and sync commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::error::FudgeError;
use crate::models::{SyncReport, TrackedPathSet};
use crate::utils;
use owo_colors::OwoColorize;
use serde::Deserialize;
use serde_json::{json, Value as Json};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

fn use_colors(output: OutputFormat) -> bool {
    output == OutputFormat::Human && std::env::var_os("NO_COLOR").is_none()
}

fn print_json(v: &Json) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("failed to render JSON output: {}", e),
    }
}

/// JSON form of a sync pass.
pub fn sync_json(report: &SyncReport, dry_run: bool) -> Json {
    let summary = json!({
        "targets": report.targets(),
        "changed": report.changed(),
        "wrote": report.wrote(),
        "dryRun": dry_run,
    });
    json!({"results": report.actions, "summary": summary})
}

/// JSON form of the tracked-path listing.
pub fn list_json(set: &TrackedPathSet) -> Json {
    let items: Vec<_> = set
        .paths
        .iter()
        .map(|p| json!({"path": p, "exists": Path::new(p).exists()}))
        .collect();
    json!({"results": items, "summary": {"total": set.len()}})
}

/// JSON form of an operation error.
pub fn error_json(err: &FudgeError) -> Json {
    json!({
        "error": {
            "kind": format!("{:?}", err.kind()),
            "path": err.path().map(|p| p.to_string_lossy().to_string()),
            "message": err.to_string(),
            "causes": err.causes(),
        }
    })
}

/// Print sync actions summarizing writes and unchanged targets.
pub fn print_sync(report: &SyncReport, output: OutputFormat, dry_run: bool) {
    if output == OutputFormat::Json {
        print_json(&sync_json(report, dry_run));
        return;
    }
    let color = use_colors(output);
    if report.actions.is_empty() {
        if color {
            println!("{} {}", "ℹ️  note:".blue().bold(), "No files are tracked yet.");
        } else {
            println!("ℹ️  note: No files are tracked yet.");
        }
        return;
    }
    for a in &report.actions {
        let target = utils::rel_to_wd(Path::new(&a.target));
        let label = if a.wrote {
            "📥 synced:"
        } else if a.changed {
            "📝 would sync:"
        } else {
            "no changes:"
        };
        match (color, a.changed) {
            (true, true) => {
                println!("{} {} (keys={})", label.green().bold(), target.bold(), a.keys)
            }
            (true, false) => println!("{} {}", label.bright_black(), target),
            (false, true) => println!("{} {} (keys={})", label, target, a.keys),
            (false, false) => println!("{} {}", label, target),
        }
    }
    let summary = format!(
        "— Summary — targets={} changed={} wrote={}",
        report.targets(),
        report.changed(),
        report.wrote()
    );
    if color {
        println!("{}", summary.bold());
    } else {
        println!("{}", summary);
    }
}

/// Print the result of registering a path.
pub fn print_added(path: &str, total: usize, output: OutputFormat) {
    match output {
        OutputFormat::Json => print_json(&json!({"added": path, "total": total})),
        OutputFormat::Human => {
            if use_colors(output) {
                println!("{} {}", "✅ added:".green().bold(), path.bold());
            } else {
                println!("✅ added: {}", path);
            }
        }
    }
}

/// Print tracked paths in registry order, flagging ones missing on disk.
pub fn print_list(set: &TrackedPathSet, output: OutputFormat) {
    if output == OutputFormat::Json {
        print_json(&list_json(set));
        return;
    }
    let color = use_colors(output);
    for p in &set.paths {
        let missing = !Path::new(p).exists();
        match (color, missing) {
            (true, true) => println!("{} {}", p, "(missing)".red()),
            (false, true) => println!("{} (missing)", p),
            _ => println!("{}", p),
        }
    }
    if set.is_empty() {
        println!("No files are tracked yet.");
    }
}

/// Print the config path after `open`.
pub fn print_config_path(path: &Path, output: OutputFormat) {
    match output {
        OutputFormat::Json => print_json(&json!({"config": path.to_string_lossy()})),
        OutputFormat::Human => println!("{}", path.display()),
    }
}

/// Report an operation error with its cause chain.
pub fn print_error(err: &FudgeError, output: OutputFormat) {
    match output {
        OutputFormat::Json => print_json(&error_json(err)),
        OutputFormat::Human => {
            if use_colors(output) {
                eprintln!("{} {}", "❌ error:".red().bold(), err.report());
            } else {
                eprintln!("❌ error: {}", err.report());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SyncAction;
    use tempfile::tempdir;

    #[test]
    fn test_sync_json_shape() {
        let report = SyncReport {
            actions: vec![
                SyncAction {
                    target: "a.json".into(),
                    keys: 2,
                    changed: true,
                    wrote: false,
                },
                SyncAction {
                    target: "b.json".into(),
                    keys: 2,
                    changed: false,
                    wrote: false,
                },
            ],
        };
        let v = sync_json(&report, true);
        let results = v["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["target"], "a.json");
        assert_eq!(results[0]["changed"], true);
        assert_eq!(results[0]["wrote"], false);
        assert_eq!(
            v["summary"],
            json!({"targets": 2, "changed": 1, "wrote": 0, "dryRun": true})
        );
    }

    #[test]
    fn test_list_json_shape() {
        let tmp = tempdir().unwrap();
        let present = tmp.path().join("a.json");
        std::fs::write(&present, "{}").unwrap();
        let gone = tmp.path().join("gone.json");
        let set = TrackedPathSet {
            paths: vec![
                present.to_string_lossy().to_string(),
                gone.to_string_lossy().to_string(),
            ],
        };

        let v = list_json(&set);
        let results = v["results"].as_array().unwrap();
        assert_eq!(results[0]["exists"], true);
        assert_eq!(results[1]["exists"], false);
        assert_eq!(v["summary"]["total"], 2);
    }

    #[test]
    fn test_error_json_carries_kind_and_path() {
        let v = error_json(&FudgeError::Duplicate {
            path: "a.json".into(),
        });
        assert_eq!(v["error"]["kind"], "Duplicate");
        assert_eq!(v["error"]["path"], "a.json");
        assert_eq!(v["error"]["causes"], json!([]));
    }

    #[test]
    fn test_output_format_parses_lowercase_only() {
        let fmt: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(fmt, OutputFormat::Json);
        assert!(serde_json::from_str::<OutputFormat>("\"xml\"").is_err());
    }
}
