//! Push the central config into every tracked file.
//!
//! One pass walks the registry in order. Each target is read, parsed as a JSON
//! object, shallow-merged (config keys overwrite, target-only keys survive) and
//! written back in place. The first failing target aborts the pass; targets
//! already written stay written.

use crate::error::{FudgeError, Result};
use crate::layout::ConfigDir;
use crate::models::{SyncAction, SyncReport};
use crate::registry::Registry;
use crate::store::{ConfigObject, ConfigStore};
use crate::utils;
use serde_json::{Map, Value as Json};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// When false, compute the merge and report changes without writing.
    pub write: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptions { write: true }
    }
}

impl SyncOptions {
    /// `--dry-run` and `--check` both suppress writes.
    pub fn from_flags(dry_run: bool, check: bool) -> Self {
        SyncOptions {
            write: !(dry_run || check),
        }
    }
}

/// Process exit code for a finished pass: 1 when `check` found pending changes.
pub fn exit_code(report: &SyncReport, check: bool) -> i32 {
    if check && report.changed() > 0 {
        1
    } else {
        0
    }
}

/// Run one sync pass over all tracked paths.
pub fn run_sync(dir: &ConfigDir, opts: SyncOptions) -> Result<SyncReport> {
    let config = ConfigStore::new(dir).load()?;
    let tracked = Registry::new(dir).list()?;

    let mut report = SyncReport::default();
    for target in &tracked.paths {
        let action = apply_to_target(target, &config, opts.write)?;
        report.actions.push(action);
    }
    info!(
        targets = report.targets(),
        changed = report.changed(),
        wrote = report.wrote(),
        dry_run = !opts.write,
        "sync pass finished"
    );
    Ok(report)
}

/// Merge `config` into the JSON object stored at `target`.
pub fn apply_to_target(target: &str, config: &ConfigObject, write: bool) -> Result<SyncAction> {
    let current = fs::read(target).map_err(|source| FudgeError::TargetRead {
        path: target.to_string(),
        source,
    })?;
    let mut doc = utils::parse_object(&current).map_err(|source| FudgeError::TargetParse {
        path: target.to_string(),
        source,
    })?;

    let keys = shallow_merge(&mut doc, config);
    let rendered = utils::render_pretty(&doc)
        .map_err(|e| FudgeError::persistence(Path::new(target), e))?;
    let changed = rendered.as_bytes() != current.as_slice();

    let mut wrote = false;
    if changed && write {
        // In place, no temp file or backup.
        fs::write(target, &rendered).map_err(|e| FudgeError::persistence(Path::new(target), e))?;
        wrote = true;
    }
    debug!(file = %target, keys, changed, wrote, "processed sync target");

    Ok(SyncAction {
        target: target.to_string(),
        keys,
        changed,
        wrote,
    })
}

/// Top-level assignment of every `config` key into `target`.
///
/// Nested values are replaced wholesale. Existing keys keep their position;
/// new keys are appended in config order. Returns the number of keys applied.
pub fn shallow_merge(target: &mut Map<String, Json>, config: &ConfigObject) -> usize {
    for (key, value) in config {
        target.insert(key.clone(), value.clone());
    }
    config.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use tempfile::tempdir;

    fn obj(v: Json) -> Map<String, Json> {
        match v {
            Json::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_shallow_merge_replaces_nested_and_keeps_extra_keys() {
        let config = obj(json!({"a": 1, "b": {"x": 1}}));
        let mut target = obj(json!({"a": 0, "c": 2, "b": {"y": 2}}));
        let applied = shallow_merge(&mut target, &config);
        assert_eq!(applied, 2);
        assert_eq!(Json::Object(target), json!({"a": 1, "c": 2, "b": {"x": 1}}));
    }

    #[test]
    fn test_shallow_merge_overwrites_any_type() {
        let config = obj(json!({"servers": {"one": {"url": "x"}}}));
        let mut target = obj(json!({"servers": [1, 2, 3], "theme": "dark"}));
        shallow_merge(&mut target, &config);
        assert_eq!(
            Json::Object(target),
            json!({"servers": {"one": {"url": "x"}}, "theme": "dark"})
        );
    }

    #[test]
    fn test_key_order_existing_first_then_new() {
        let config = obj(json!({"new": true, "a": 9}));
        let mut target = obj(json!({"z": 0, "a": 1}));
        shallow_merge(&mut target, &config);
        let keys: Vec<_> = target.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "new"]);
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let tmp = tempdir().unwrap();
        let t = tmp.path().join("t.json");
        fs::write(&t, r#"{"a": 0}"#).unwrap();
        let config = obj(json!({"a": 1}));

        let action = apply_to_target(t.to_str().unwrap(), &config, false).unwrap();
        assert!(action.changed);
        assert!(!action.wrote);
        assert_eq!(fs::read_to_string(&t).unwrap(), r#"{"a": 0}"#);
    }

    fn setup(config: &str, target: &str) -> (tempfile::TempDir, ConfigDir, std::path::PathBuf) {
        let tmp = tempdir().unwrap();
        let dir = ConfigDir::new(tmp.path().join("cfg"));
        ConfigStore::new(&dir).open().unwrap();
        fs::write(dir.config_path(), config).unwrap();
        let t = tmp.path().join("t.json");
        fs::write(&t, target).unwrap();
        Registry::new(&dir).add(t.to_str().unwrap()).unwrap();
        (tmp, dir, t)
    }

    #[test]
    fn test_check_with_pending_changes_exits_1() {
        let (_tmp, dir, t) = setup(r#"{"a": 1}"#, r#"{"a": 0}"#);
        let report = run_sync(&dir, SyncOptions::from_flags(false, true)).unwrap();
        assert_eq!(exit_code(&report, true), 1);
        assert_eq!(report.wrote(), 0);
        assert_eq!(fs::read_to_string(&t).unwrap(), r#"{"a": 0}"#);
    }

    #[test]
    fn test_check_when_in_sync_exits_0() {
        let (_tmp, dir, _t) = setup(r#"{"a": 1}"#, "{\n  \"a\": 1\n}");
        let report = run_sync(&dir, SyncOptions::from_flags(false, true)).unwrap();
        assert_eq!(report.changed(), 0);
        assert_eq!(exit_code(&report, true), 0);
    }

    #[test]
    fn test_dry_run_with_changes_exits_0_and_writes_nothing() {
        let (_tmp, dir, t) = setup(r#"{"a": 1}"#, r#"{"a": 0}"#);
        let report = run_sync(&dir, SyncOptions::from_flags(true, false)).unwrap();
        assert_eq!(report.changed(), 1);
        assert_eq!(exit_code(&report, false), 0);
        assert_eq!(fs::read_to_string(&t).unwrap(), r#"{"a": 0}"#);
    }

    #[test]
    fn test_plain_sync_writes() {
        let (_tmp, dir, t) = setup(r#"{"a": 1}"#, r#"{"a": 0}"#);
        let report = run_sync(&dir, SyncOptions::from_flags(false, false)).unwrap();
        assert_eq!(report.wrote(), 1);
        assert_eq!(exit_code(&report, false), 0);
        assert_eq!(fs::read_to_string(&t).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_missing_target_is_read_error() {
        let tmp = tempdir().unwrap();
        let t = tmp.path().join("gone.json");
        let err = apply_to_target(t.to_str().unwrap(), &Map::new(), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TargetRead);
        assert_eq!(err.path(), Some(t.as_path()));
    }

    #[test]
    fn test_array_target_is_parse_error() {
        let tmp = tempdir().unwrap();
        let t = tmp.path().join("arr.json");
        fs::write(&t, "[]").unwrap();
        let err = apply_to_target(t.to_str().unwrap(), &Map::new(), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TargetParse);
    }
}
