//! Core rendering module - pure, deterministic, and testable
//!
//! This crate turns a [`DonutConfig`](types::DonutConfig) and a pair of rotation
//! angles into a frame of glyphs. It has **zero dependencies** on terminals or
//! I/O, which makes it:
//!
//! - **Deterministic**: the same angles always produce the same frame
//! - **Testable**: every stage is a plain function
//! - **Fast**: no allocation per frame once the buffers exist
//!
//! # Module Structure
//!
//! - [`projection`]: torus sampling, rotation, perspective projection, luminance
//! - [`glyph`]: luminance bucketing into the `.,-~:;=!*#$@` ramp
//! - [`frame`]: depth and character buffers
//! - [`compositor`]: depth test and per-frame driver
//!
//! # Pipeline
//!
//! For every (theta, phi) on the sampling grid:
//!
//! 1. Build the tube cross-section point `(R2 + R1 cos theta, R1 sin theta)`
//! 2. Rotate it around the ring (phi), then by the two spin angles A and B
//! 3. Push it `K2` away from the viewer and project with scale `K1`
//! 4. Drop it if it lands outside the frame or faces away from the light
//! 5. Keep it if its inverse depth beats what the cell already holds
//!
//! # Example
//!
//! ```
//! use tui_donut_core::render_frame;
//! use tui_donut_types::{DonutConfig, SpinAngles};
//!
//! let config = DonutConfig::default();
//! let frame = render_frame(&config, SpinAngles::new(1.0, 0.5));
//!
//! assert_eq!(frame.lines().len(), 40);
//! assert!(!frame.is_blank());
//! ```

pub mod compositor;
pub mod frame;
pub mod glyph;
pub mod projection;

pub use tui_donut_types as types;

pub use compositor::{plot, render_frame, render_frame_into, FrameStats, PlotOutcome};
pub use frame::DonutFrame;
pub use glyph::{glyph_for, luminance_index};
pub use projection::{for_each_sample, project, sample_count, Sample, SpinTrig};
