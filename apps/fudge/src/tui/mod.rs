//! Interactive menu: ratatui event loop with terminal setup and cleanup.
//!
//! The [`Tui`] struct owns the terminal and threads the [`App`] value through
//! key transitions. Effects are executed synchronously against the registry,
//! config store, and sync engine; the editor runs with the terminal restored
//! to cooked mode and the alternate screen left.

pub mod app;
pub mod view;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;
use ratatui::Terminal;
use tracing::{debug, error};

use crate::config::Effective;
use crate::editor;
use crate::registry::Registry;
use crate::store::ConfigStore;
use crate::sync::{run_sync, SyncOptions};
use app::{App, Effect, Key, Outcome};

pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl Tui {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let setup = (|| {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        })();
        // No Tui exists yet, so Drop cannot undo raw mode for us.
        let term = restore_on_err(setup, || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        })?;
        Ok(Tui { terminal: term })
    }

    /// Run until the user quits.
    pub fn run(&mut self, eff: &Effective) -> io::Result<()> {
        let config_dir = eff.dir.root().display().to_string();
        let mut app = App::new();
        let mut tracked = tracked_count(eff);

        loop {
            let ctx = view::Context {
                config_dir: &config_dir,
                tracked,
            };
            self.terminal.draw(|frame| view::render(frame, &app, &ctx))?;

            let key = match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => to_key(k.code, k.modifiers),
                _ => continue,
            };
            let (next, effect) = app.handle_key(key);
            app = next;

            let Some(effect) = effect else { continue };
            debug!(?effect, "menu effect");
            let outcome = match effect {
                Effect::Quit => break,
                Effect::OpenConfig => self.open_config(eff)?,
                Effect::AddPath(input) => match Registry::new(&eff.dir).add(&input) {
                    Ok(added) => Outcome::Added(added.path),
                    Err(e) => Outcome::Failed(e),
                },
                Effect::Sync => match run_sync(&eff.dir, SyncOptions::default()) {
                    Ok(report) => Outcome::Synced(report),
                    Err(e) => {
                        error!(error = %e, "sync failed");
                        Outcome::Failed(e)
                    }
                },
            };
            app = app.apply(outcome);
            tracked = tracked_count(eff);
        }

        self.shutdown()
    }

    /// Hand the terminal to the editor and take it back afterwards.
    fn open_config(&mut self, eff: &Effective) -> io::Result<Outcome> {
        let path = match ConfigStore::new(&eff.dir).open() {
            Ok(p) => p,
            Err(e) => return Ok(Outcome::Failed(e)),
        };

        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        let launched = editor::launch(&eff.editor, &path);
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.terminal.clear()?;

        Ok(match launched {
            Ok(()) => Outcome::Opened,
            Err(e) => Outcome::Failed(e),
        })
    }

    fn shutdown(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    result.map_err(|e| {
        restore();
        e
    })
}

fn tracked_count(eff: &Effective) -> Option<usize> {
    Registry::new(&eff.dir).list().ok().map(|set| set.len())
}

/// Map a crossterm key event onto the menu's key set.
pub fn to_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::CtrlC,
        KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => Key::Other,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_maps_to_quit_key() {
        assert_eq!(to_key(KeyCode::Char('c'), KeyModifiers::CONTROL), Key::CtrlC);
        assert_eq!(to_key(KeyCode::Char('c'), KeyModifiers::NONE), Key::Char('c'));
        assert_eq!(to_key(KeyCode::Char('x'), KeyModifiers::CONTROL), Key::Other);
    }

    #[test]
    fn failed_setup_runs_restore() {
        let mut restored = false;
        let failed: io::Result<()> = Err(io::Error::other("no tty"));
        let res = restore_on_err(failed, || restored = true);
        assert!(res.is_err());
        assert!(restored);

        let mut restored = false;
        let res = restore_on_err(Ok(7), || restored = true);
        assert_eq!(res.unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn shifted_chars_pass_through() {
        assert_eq!(to_key(KeyCode::Char('A'), KeyModifiers::SHIFT), Key::Char('A'));
        assert_eq!(to_key(KeyCode::Tab, KeyModifiers::NONE), Key::Other);
    }
}
