//! Utility helpers for paths and JSON documents.

use crate::error::{json_type_name, DocumentError};
use serde_json::{Map, Value as Json};
use std::path::Path;

/// Return a path relative to the current working directory when possible.
pub fn rel_to_wd(p: &Path) -> String {
    match std::env::current_dir() {
        Ok(wd) => match pathdiff::diff_paths(p, wd) {
            Some(r) if !r.as_os_str().is_empty() && !r.starts_with("../..") => {
                r.to_string_lossy().to_string()
            }
            _ => p.to_string_lossy().to_string(),
        },
        Err(_) => p.to_string_lossy().to_string(),
    }
}

/// Case-insensitive `.json` suffix check on the raw path string.
pub fn has_json_extension(path: &str) -> bool {
    path.to_ascii_lowercase().ends_with(".json")
}

/// Parse bytes as a JSON document whose top level must be an object.
pub fn parse_object(bytes: &[u8]) -> Result<Map<String, Json>, DocumentError> {
    match serde_json::from_slice::<Json>(bytes)? {
        Json::Object(map) => Ok(map),
        other => Err(DocumentError::NotObject(json_type_name(&other))),
    }
}

/// Two-space indented rendering used for every file fudge writes.
pub fn render_pretty<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
