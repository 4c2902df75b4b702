//! TUI Donut (workspace facade crate).
//!
//! Re-exports the member crates under `tui_donut::{core,input,term,types}` and
//! hosts the interactive [`session`] loop shared by the binary and the tests.

pub mod session;

pub use tui_donut_core as core;
pub use tui_donut_input as input;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
