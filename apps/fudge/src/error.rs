//! Error taxonomy for registry, config store, sync, and editor operations.
//!
//! Every variant carries the offending path where one exists and chains the
//! underlying cause through `source()`. Callers branch on [`ErrorKind`]
//! instead of matching message text.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a JSON document on disk was rejected.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON")]
    Syntax(#[from] serde_json::Error),
    #[error("top-level value is {0}, expected an object")]
    NotObject(&'static str),
}

/// Underlying cause of a failed read/write of a file this tool owns.
#[derive(Debug, Error)]
pub enum PersistCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FudgeError {
    #[error("path cannot be empty")]
    EmptyPath,

    #[error("cannot access file: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("file must be a JSON file: {path}")]
    NotJsonExtension { path: String },

    #[error("path already exists in sync file: {path}")]
    Duplicate { path: String },

    #[error("config file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("failed to read sync target {path}")]
    TargetRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sync target {path}")]
    TargetParse {
        path: String,
        #[source]
        source: DocumentError,
    },

    #[error("failed to persist {}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: PersistCause,
    },

    #[error("could not determine config directory (set XDG_CONFIG_HOME or pass --config-dir)")]
    NoConfigDir,

    #[error("failed to launch editor '{editor}'")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },
}

/// Tag for each [`FudgeError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyPath,
    FileNotFound,
    NotJsonExtension,
    Duplicate,
    MissingFile,
    Parse,
    TargetRead,
    TargetParse,
    Persistence,
    NoConfigDir,
    EditorLaunch,
}

impl FudgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FudgeError::EmptyPath => ErrorKind::EmptyPath,
            FudgeError::FileNotFound { .. } => ErrorKind::FileNotFound,
            FudgeError::NotJsonExtension { .. } => ErrorKind::NotJsonExtension,
            FudgeError::Duplicate { .. } => ErrorKind::Duplicate,
            FudgeError::MissingFile { .. } => ErrorKind::MissingFile,
            FudgeError::Parse { .. } => ErrorKind::Parse,
            FudgeError::TargetRead { .. } => ErrorKind::TargetRead,
            FudgeError::TargetParse { .. } => ErrorKind::TargetParse,
            FudgeError::Persistence { .. } => ErrorKind::Persistence,
            FudgeError::NoConfigDir => ErrorKind::NoConfigDir,
            FudgeError::EditorLaunch { .. } => ErrorKind::EditorLaunch,
        }
    }

    /// The file the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FudgeError::FileNotFound { path, .. }
            | FudgeError::NotJsonExtension { path }
            | FudgeError::Duplicate { path }
            | FudgeError::TargetRead { path, .. }
            | FudgeError::TargetParse { path, .. } => Some(Path::new(path)),
            FudgeError::MissingFile { path }
            | FudgeError::Parse { path, .. }
            | FudgeError::Persistence { path, .. } => Some(path.as_path()),
            FudgeError::EmptyPath | FudgeError::NoConfigDir | FudgeError::EditorLaunch { .. } => {
                None
            }
        }
    }

    /// Input problems the user can correct at the prompt without leaving it.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyPath | ErrorKind::FileNotFound | ErrorKind::NotJsonExtension
        )
    }

    /// Message followed by every chained cause, `: `-separated.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        for cause in self.causes() {
            out.push_str(": ");
            out.push_str(&cause);
        }
        out
    }

    /// Display text of each error in the `source()` chain, outermost first.
    pub fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut cur = std::error::Error::source(self);
        while let Some(c) = cur {
            causes.push(c.to_string());
            cur = c.source();
        }
        causes
    }

    pub(crate) fn persistence(path: &Path, cause: impl Into<PersistCause>) -> Self {
        FudgeError::Persistence {
            path: path.to_path_buf(),
            source: cause.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FudgeError>;

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
