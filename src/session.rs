//! Interactive session: render, wait for one key, update the angles, repeat.

use std::io::Write;

use anyhow::Result;

use crate::core::{render_frame_into, DonutFrame, FrameStats};
use crate::input::{handle_key_event, should_quit, KeySource};
use crate::term::TerminalRenderer;
use crate::types::{DonutConfig, SpinAngles};

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// A quit key was pressed.
    Quit,
    /// The key source ran dry.
    InputClosed,
    /// Reading a key failed; handled like a quit.
    InputFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub angles: SpinAngles,
    pub frames: u64,
    pub last_stats: FrameStats,
}

/// Rotation state plus the reusable frame buffer.
///
/// The angles live here, never in globals, and are handed to the compositor by
/// value on every render.
pub struct SpinSession {
    config: DonutConfig,
    angles: SpinAngles,
    frame: DonutFrame,
    frames: u64,
    last_stats: FrameStats,
}

impl SpinSession {
    pub fn new(config: DonutConfig) -> Self {
        Self {
            config,
            angles: SpinAngles::default(),
            frame: DonutFrame::new(config.width, config.height),
            frames: 0,
            last_stats: FrameStats::default(),
        }
    }

    pub fn angles(&self) -> SpinAngles {
        self.angles
    }

    pub fn frame(&self) -> &DonutFrame {
        &self.frame
    }

    /// Render the current angles into the session frame.
    pub fn render(&mut self) -> FrameStats {
        self.last_stats = render_frame_into(&self.config, self.angles, &mut self.frame);
        self.frames += 1;
        self.last_stats
    }

    /// Render and draw one frame.
    pub fn present<W: Write>(&mut self, term: &mut TerminalRenderer<W>) -> Result<()> {
        self.render();
        term.draw(&self.frame)
    }

    /// Drive the session until quit or end of input.
    ///
    /// The first frame is drawn before any key is read. Every key other than a
    /// quit key triggers a redraw, including keys with no binding.
    pub fn run<K: KeySource, W: Write>(
        mut self,
        keys: &mut K,
        term: &mut TerminalRenderer<W>,
    ) -> Result<SessionSummary> {
        self.present(term)?;

        let end = loop {
            let key = match keys.next_key() {
                Ok(Some(key)) => key,
                Ok(None) => break SessionEnd::InputClosed,
                Err(e) => break SessionEnd::InputFailed(e.to_string()),
            };

            if should_quit(key) {
                break SessionEnd::Quit;
            }

            if let Some(action) = handle_key_event(key) {
                self.angles = self.angles.apply(action, self.config.spin_step);
            }

            self.present(term)?;
        };

        Ok(SessionSummary {
            end,
            angles: self.angles,
            frames: self.frames,
            last_stats: self.last_stats,
        })
    }
}
