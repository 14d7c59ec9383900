//! Accessor for the central `config.json`.
//!
//! `open` only guarantees the file exists (seeding `{"servers": {}}`); the
//! content is validated lazily by `load`, which is what a sync pass uses.

use crate::error::{FudgeError, Result};
use crate::layout::ConfigDir;
use crate::utils;
use serde_json::{json, Map, Value as Json};
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;
use tracing::info;

/// Source-of-truth object pushed into every tracked file.
pub type ConfigObject = Map<String, Json>;

pub struct ConfigStore<'a> {
    dir: &'a ConfigDir,
}

impl<'a> ConfigStore<'a> {
    pub fn new(dir: &'a ConfigDir) -> Self {
        ConfigStore { dir }
    }

    /// Ensure the directory and `config.json` exist; return the file path.
    pub fn open(&self) -> Result<PathBuf> {
        self.dir.ensure()?;
        let path = self.dir.config_path();
        if !path.exists() {
            let body = utils::render_pretty(&default_config())
                .map_err(|e| FudgeError::persistence(&path, e))?;
            fs::write(&path, body).map_err(|e| FudgeError::persistence(&path, e))?;
            info!(config = %path.display(), "created default config");
        }
        Ok(path)
    }

    /// Read and parse `config.json`.
    pub fn load(&self) -> Result<ConfigObject> {
        let path = self.dir.config_path();
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                return Err(FudgeError::MissingFile { path })
            }
            Err(e) => return Err(FudgeError::persistence(&path, e)),
        };
        utils::parse_object(&bytes).map_err(|source| FudgeError::Parse { path, source })
    }
}

pub fn default_config() -> Json {
    json!({ "servers": {} })
}
