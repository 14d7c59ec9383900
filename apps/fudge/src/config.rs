//! Settings discovery and effective settings resolution.
//!
//! Fudge reads an optional `settings.toml|yaml|yml` from its config directory
//! and merges it with CLI flags to produce an `Effective` value.
//! Defaults:
//! - `output`: `human`
//! - `editor`: `$EDITOR`, else `vi`
//!
//! Overrides precedence: CLI > settings file > defaults.

use crate::editor;
use crate::error::Result;
use crate::layout::ConfigDir;
use crate::output::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Root settings loaded from `settings.toml|yaml`.
pub struct Settings {
    pub editor: Option<String>,
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by commands after applying precedence.
pub struct Effective {
    pub dir: ConfigDir,
    pub editor: String,
    pub output: OutputFormat,
}

/// Load `Settings` from `settings.toml` or `settings.yaml|yml` if present.
///
/// A file that cannot be read or parsed is skipped with a warning.
pub fn load_settings(root: &Path) -> Option<Settings> {
    let toml_path = root.join("settings.toml");
    if toml_path.exists() {
        return read_with(&toml_path, |s| toml::from_str(s).map_err(|e| e.to_string()));
    }
    for yml in ["settings.yaml", "settings.yml"] {
        let p = root.join(yml);
        if p.exists() {
            return read_with(&p, |s| serde_yaml::from_str(s).map_err(|e| e.to_string()));
        }
    }
    None
}

fn read_with(
    path: &Path,
    parse: impl FnOnce(&str) -> std::result::Result<Settings, String>,
) -> Option<Settings> {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!(settings = %path.display(), error = %e, "cannot read settings; using defaults");
            return None;
        }
    };
    match parse(&s) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!(settings = %path.display(), error = %e, "invalid settings; using defaults");
            None
        }
    }
}

/// Resolve `Effective` by merging CLI flags, discovered settings, and defaults.
pub fn resolve_effective(
    cli_config_dir: Option<&Path>,
    cli_output: Option<OutputFormat>,
    cli_editor: Option<&str>,
) -> Result<Effective> {
    let dir = ConfigDir::discover(cli_config_dir)?;
    let env_editor = std::env::var("EDITOR").ok();
    Ok(resolve_in(dir, cli_output, cli_editor, env_editor.as_deref()))
}

/// Resolution against an already-known directory and editor env value.
pub fn resolve_in(
    dir: ConfigDir,
    cli_output: Option<OutputFormat>,
    cli_editor: Option<&str>,
    env_editor: Option<&str>,
) -> Effective {
    let cfg = load_settings(dir.root()).unwrap_or_default();

    let output = cli_output.or(cfg.output).unwrap_or_default();

    let editor = editor::resolve_editor(cli_editor, cfg.editor.as_deref(), env_editor);

    Effective {
        dir,
        editor,
        output,
    }
}
