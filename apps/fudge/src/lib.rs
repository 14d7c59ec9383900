//! Fudge: keep JSON files in sync with one central config.
//!
//! The engine is three independent operations over files in one directory:
//! open (seed `config.json`), register a target (`sync.json`), and sync
//! (shallow-merge the config into every target). Each call re-reads disk.

pub mod config;
pub mod editor;
pub mod error;
pub mod layout;
pub mod models;
pub mod output;
pub mod registry;
pub mod store;
pub mod sync;
pub mod tui;
pub mod utils;

pub use error::{ErrorKind, FudgeError, Result};
pub use layout::ConfigDir;
