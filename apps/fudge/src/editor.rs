//! Launch the user's editor on a file and wait for it to exit.

use crate::error::{FudgeError, Result};
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

pub const DEFAULT_EDITOR: &str = "vi";

/// Pick the editor command: CLI > settings > `$EDITOR` > `vi`.
///
/// Blank values at any level are skipped.
pub fn resolve_editor(cli: Option<&str>, settings: Option<&str>, env: Option<&str>) -> String {
    [cli, settings, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_EDITOR)
        .to_string()
}

/// Split an editor string into program and leading arguments (`code --wait`).
pub fn editor_command(editor: &str) -> (String, Vec<String>) {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts.next().unwrap_or_else(|| DEFAULT_EDITOR.to_string());
    (program, parts.collect())
}

/// Run `editor file` with inherited stdio, blocking until it exits.
///
/// Only a failure to start the process is an error; a non-zero exit status is
/// logged and otherwise ignored.
pub fn launch(editor: &str, file: &Path) -> Result<()> {
    let (program, args) = editor_command(editor);
    info!(editor = %editor, file = %file.display(), "launching editor");
    let status = Command::new(&program)
        .args(&args)
        .arg(file)
        .status()
        .map_err(|source| FudgeError::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;
    if !status.success() {
        warn!(editor = %editor, status = %status, "editor exited with non-zero status");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_resolve_editor_precedence() {
        assert_eq!(resolve_editor(Some("hx"), Some("nano"), Some("vim")), "hx");
        assert_eq!(resolve_editor(None, Some("nano"), Some("vim")), "nano");
        assert_eq!(resolve_editor(None, None, Some("vim")), "vim");
        assert_eq!(resolve_editor(None, None, None), "vi");
        assert_eq!(resolve_editor(Some("  "), None, Some("")), "vi");
    }

    #[test]
    fn test_editor_command_splits_args() {
        let (prog, args) = editor_command("code --wait");
        assert_eq!(prog, "code");
        assert_eq!(args, vec!["--wait"]);
    }

    #[test]
    fn test_launch_failure_is_reported() {
        let err = launch("fudge-no-such-editor-binary", Path::new("x.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EditorLaunch);
    }
}
