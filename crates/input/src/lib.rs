//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::SpinAction`] and provides
//! the blocking [`KeySource`] the session loop pulls keys from. The terminal is
//! strictly turn-based (render, then wait for one key), so there is no event
//! queue or timer here.

pub mod map;
pub mod source;

pub use tui_donut_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
