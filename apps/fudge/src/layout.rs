//! Location of the files fudge owns.
//!
//! Everything lives in one directory:
//! - `config.json`: the source-of-truth object pushed into targets
//! - `sync.json`: the tracked-path registry
//! - `settings.{toml,yaml,yml}`: optional tool settings
//! - `fudge.log`: log output while the menu owns the terminal
//!
//! Resolution order: explicit override > `$XDG_CONFIG_HOME/fudge_configs` >
//! `<home>/.config/fudge_configs`.

use crate::error::{FudgeError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "fudge_configs";
pub const CONFIG_FILE: &str = "config.json";
pub const REGISTRY_FILE: &str = "sync.json";
pub const LOG_FILE: &str = "fudge.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    root: PathBuf,
}

impl ConfigDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ConfigDir { root: root.into() }
    }

    /// Resolve from the process environment.
    pub fn discover(override_dir: Option<&Path>) -> Result<Self> {
        resolve_config_dir(
            override_dir,
            std::env::var_os("XDG_CONFIG_HOME"),
            dirs::home_dir(),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }

    /// Create the directory (and parents) if absent.
    pub fn ensure(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| FudgeError::persistence(&self.root, e))
    }
}

/// Pure resolution so tests never touch the real environment.
pub fn resolve_config_dir(
    override_dir: Option<&Path>,
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<ConfigDir> {
    if let Some(dir) = override_dir {
        return Ok(ConfigDir::new(dir));
    }
    let base = match xdg_config_home.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => home.ok_or(FudgeError::NoConfigDir)?.join(".config"),
    };
    Ok(ConfigDir::new(base.join(APP_DIR)))
}
