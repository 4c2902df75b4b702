//! Terminal donut runner (default binary).
//!
//! Draws a 40x40 ASCII torus and turns it with `w`/`s` and `a`/`d` (or the
//! arrow keys). `q` quits.

use anyhow::Result;

use tui_donut::input::TerminalKeys;
use tui_donut::session::{SessionEnd, SpinSession};
use tui_donut::term::{check_terminal_size, fit_viewport, CrosstermResizer, TerminalRenderer};
use tui_donut::types::DonutConfig;

fn main() -> Result<()> {
    let config = DonutConfig::default();
    config.validate()?;

    let mut resizer = CrosstermResizer::stdout();
    fit_viewport(&mut resizer, config.width, config.height);
    if let Ok(size) = crossterm::terminal::size() {
        check_terminal_size(size, config.width, config.height);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut keys = TerminalKeys::new();
    let result = SpinSession::new(config).run(&mut keys, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;

    if let SessionEnd::InputFailed(reason) = &summary.end {
        eprintln!("[Input] read failed: {}", reason);
    }
    println!("Program finished!");
    Ok(())
}
