//! Result of one sync pass.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncAction {
    /// Tracked path as stored in the registry.
    pub target: String,
    /// Number of config keys applied to the target.
    pub keys: usize,
    /// Merged output differs from what was on disk.
    pub changed: bool,
    /// The file was rewritten during this pass.
    pub wrote: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub actions: Vec<SyncAction>,
}

impl SyncReport {
    pub fn targets(&self) -> usize {
        self.actions.len()
    }

    pub fn changed(&self) -> usize {
        self.actions.iter().filter(|a| a.changed).count()
    }

    pub fn wrote(&self) -> usize {
        self.actions.iter().filter(|a| a.wrote).count()
    }
}
