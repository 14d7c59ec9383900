//! Tracked-path registry persisted as `sync.json`.
//!
//! Every call re-reads the file so manual edits made between invocations are
//! always honored. A missing registry file is an empty set, never an error.

use crate::error::{FudgeError, Result};
use crate::layout::ConfigDir;
use crate::models::TrackedPathSet;
use crate::utils;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use tracing::{debug, info};

pub struct Registry<'a> {
    dir: &'a ConfigDir,
}

/// Outcome of a successful `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    /// Stored (trimmed) path.
    pub path: String,
    /// Registry size after the append.
    pub total: usize,
}

impl<'a> Registry<'a> {
    pub fn new(dir: &'a ConfigDir) -> Self {
        Registry { dir }
    }

    /// Current tracked paths in registration order.
    pub fn list(&self) -> Result<TrackedPathSet> {
        let path = self.dir.registry_path();
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!(registry = %path.display(), "registry absent; treating as empty");
                return Ok(TrackedPathSet::default());
            }
            Err(e) => return Err(FudgeError::persistence(&path, e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| FudgeError::persistence(&path, e))
    }

    /// Validate `input` and append it to the registry.
    ///
    /// Checks run in order: blank input, file existence, `.json` suffix, then
    /// an exact-string duplicate scan.
    pub fn add(&self, input: &str) -> Result<Registered> {
        let path = validate_candidate(input)?;

        self.dir.ensure()?;
        let mut set = self.list()?;
        if set.contains(&path) {
            return Err(FudgeError::Duplicate { path });
        }
        set.paths.push(path.clone());
        self.save(&set)?;
        let total = set.len();
        info!(path = %path, total, "registered sync target");
        Ok(Registered { path, total })
    }

    fn save(&self, set: &TrackedPathSet) -> Result<()> {
        let reg_path = self.dir.registry_path();
        let body = utils::render_pretty(set).map_err(|e| FudgeError::persistence(&reg_path, e))?;
        fs::write(&reg_path, body).map_err(|e| FudgeError::persistence(&reg_path, e))
    }
}

/// Input checks that do not depend on registry contents.
pub fn validate_candidate(input: &str) -> Result<String> {
    let path = input.trim();
    if path.is_empty() {
        return Err(FudgeError::EmptyPath);
    }
    if let Err(source) = fs::metadata(path) {
        return Err(FudgeError::FileNotFound {
            path: path.to_string(),
            source,
        });
    }
    if !utils::has_json_extension(path) {
        return Err(FudgeError::NotJsonExtension {
            path: path.to_string(),
        });
    }
    Ok(path.to_string())
}
