//! Frame compositor: depth-tests projected samples into a [`DonutFrame`].

use crate::frame::DonutFrame;
use crate::glyph::glyph_for;
use crate::projection::{for_each_sample, Sample};
use crate::types::{DonutConfig, SpinAngles};

/// What happened to a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotOutcome {
    Plotted,
    /// Projected outside the frame.
    Clipped,
    /// Facing away from the light (luminance <= 0).
    Culled,
    /// An equal or closer sample already owns the cell.
    Occluded,
}

/// Per-frame counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub samples: u32,
    pub plotted: u32,
    pub clipped: u32,
    pub culled: u32,
    pub occluded: u32,
}

impl FrameStats {
    fn record(&mut self, outcome: PlotOutcome) {
        self.samples += 1;
        match outcome {
            PlotOutcome::Plotted => self.plotted += 1,
            PlotOutcome::Clipped => self.clipped += 1,
            PlotOutcome::Culled => self.culled += 1,
            PlotOutcome::Occluded => self.occluded += 1,
        }
    }
}

/// Apply one sample to the frame.
///
/// The bounds check runs before anything touches the buffers.
pub fn plot(frame: &mut DonutFrame, sample: &Sample) -> PlotOutcome {
    if frame.index(sample.xp, sample.yp).is_none() {
        return PlotOutcome::Clipped;
    }
    if !(sample.luminance > 0.0) {
        return PlotOutcome::Culled;
    }
    let glyph = glyph_for(sample.luminance);
    if frame.write_if_closer(sample.xp, sample.yp, sample.ooz, glyph) {
        PlotOutcome::Plotted
    } else {
        PlotOutcome::Occluded
    }
}

/// Render one frame into an existing buffer.
///
/// This is the allocation-free hot path: callers keep one frame and pass it in
/// every time. The frame is resized to the configured viewport and reset first.
pub fn render_frame_into(
    config: &DonutConfig,
    angles: SpinAngles,
    frame: &mut DonutFrame,
) -> FrameStats {
    frame.resize(config.width, config.height);
    frame.reset();

    let mut stats = FrameStats::default();
    for_each_sample(config, angles, |sample| {
        stats.record(plot(frame, sample));
    });
    stats
}

/// Convenience helper that allocates a new frame.
pub fn render_frame(config: &DonutConfig, angles: SpinAngles) -> DonutFrame {
    let mut frame = DonutFrame::new(config.width, config.height);
    render_frame_into(config, angles, &mut frame);
    frame
}
