//! Menu state machine.
//!
//! `App` is a plain value: every transition takes it by value and hands back
//! the next one, plus an optional [`Effect`] for the runner to execute. The
//! runner reports the effect's result through [`App::apply`]. Nothing here
//! touches the terminal or the filesystem.

use crate::error::FudgeError;
use crate::models::SyncReport;

pub const MENU_CHOICES: [&str; 4] = ["Open config", "Add a Sync file", "Sync config", "Quit"];

const ADD_PROMPT: &str = "Enter path to JSON file:";

/// Terminal-independent key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Up,
    Down,
    CtrlC,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    AddPath,
    Confirm,
    Error,
}

/// Work the runner performs on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenConfig,
    AddPath(String),
    Sync,
    Quit,
}

/// Result of an executed [`Effect`].
#[derive(Debug)]
pub enum Outcome {
    Opened,
    Added(String),
    Synced(SyncReport),
    Failed(FudgeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub screen: Screen,
    pub cursor: usize,
    pub input: String,
    pub message: String,
}

impl Default for App {
    fn default() -> Self {
        App {
            screen: Screen::Menu,
            cursor: 0,
            input: String::new(),
            message: String::new(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(self, key: Key) -> (App, Option<Effect>) {
        if key == Key::CtrlC {
            return (self, Some(Effect::Quit));
        }
        match self.screen {
            Screen::Menu => self.menu_key(key),
            Screen::AddPath => self.add_path_key(key),
            Screen::Confirm | Screen::Error => (self.dismiss_key(key), None),
        }
    }

    /// Fold the result of an effect back into the state.
    pub fn apply(mut self, outcome: Outcome) -> App {
        match outcome {
            Outcome::Opened => {
                self.screen = Screen::Menu;
                self.message.clear();
            }
            Outcome::Added(path) => {
                self.screen = Screen::Confirm;
                self.message = format!("File added successfully: {}", path);
                self.input.clear();
            }
            Outcome::Synced(report) => {
                self.screen = Screen::Confirm;
                self.message = format!(
                    "Config synced successfully! ({} file(s), {} updated)",
                    report.targets(),
                    report.wrote()
                );
            }
            Outcome::Failed(err) if self.screen == Screen::AddPath && err.is_input_error() => {
                self.message = capitalize(&err.report());
            }
            Outcome::Failed(err) => {
                self.screen = Screen::Error;
                self.message = err.report();
            }
        }
        self
    }

    fn menu_key(mut self, key: Key) -> (App, Option<Effect>) {
        match key {
            Key::Char('q') => return (self, Some(Effect::Quit)),
            Key::Up | Key::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            Key::Down | Key::Char('j') => {
                if self.cursor + 1 < MENU_CHOICES.len() {
                    self.cursor += 1;
                }
            }
            Key::Enter | Key::Char(' ') => return self.select(),
            _ => {}
        }
        (self, None)
    }

    fn select(mut self) -> (App, Option<Effect>) {
        match self.cursor {
            0 => (self, Some(Effect::OpenConfig)),
            1 => {
                self.screen = Screen::AddPath;
                self.input.clear();
                self.message = ADD_PROMPT.to_string();
                (self, None)
            }
            2 => (self, Some(Effect::Sync)),
            _ => (self, Some(Effect::Quit)),
        }
    }

    fn add_path_key(mut self, key: Key) -> (App, Option<Effect>) {
        match key {
            Key::Esc => {
                self.screen = Screen::Menu;
                self.input.clear();
                self.message.clear();
            }
            Key::Enter => {
                let path = self.input.clone();
                return (self, Some(Effect::AddPath(path)));
            }
            Key::Backspace => {
                self.input.pop();
            }
            Key::Char(c) => self.input.push(c),
            _ => {}
        }
        (self, None)
    }

    fn dismiss_key(mut self, key: Key) -> App {
        if matches!(key, Key::Enter | Key::Esc) {
            self.screen = Screen::Menu;
            self.message.clear();
        }
        self
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
