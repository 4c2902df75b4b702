//! Blocking key sources.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// A blocking supplier of key presses.
pub trait KeySource {
    /// Block until the next key press.
    ///
    /// `Ok(None)` means the input is exhausted and no more keys will arrive.
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Reads key presses from the terminal via `crossterm::event::read`.
///
/// Expects raw mode to be enabled by the caller. Key releases and non-key
/// events (resize, focus, mouse, paste) are skipped. Auto-repeat counts as a
/// press.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    return Ok(Some(key));
                }
            }
        }
    }
}

/// Replays a fixed sequence of keys, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// One plain key press per character.
    pub fn from_chars(s: &str) -> Self {
        Self::new(s.chars().map(|ch| KeyEvent::from(KeyCode::Char(ch))))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}
