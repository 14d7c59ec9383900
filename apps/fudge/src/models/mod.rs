//! Serializable shapes shared by the engine and the reporters.

pub mod report;
pub mod tracked;

pub use report::{SyncAction, SyncReport};
pub use tracked::TrackedPathSet;
