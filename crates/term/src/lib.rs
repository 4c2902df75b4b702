//! Terminal output module.
//!
//! This is the thin platform layer between the pure frame compositor and a real
//! terminal. It encodes a [`DonutFrame`](core::DonutFrame) into crossterm
//! commands and flushes each frame as one batch, and it offers a best-effort
//! way to size the terminal to the frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw in place from the cursor home position (no clear, no flicker)
//! - Never abort on platform quirks that only affect cosmetics

pub mod renderer;
pub mod resize;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use renderer::{encode_frame_into, TerminalRenderer};
pub use resize::{check_terminal_size, fit_viewport, CrosstermResizer, ViewportResizer};
