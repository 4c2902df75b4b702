//! Core types module - shared constants, configuration and rotation state
//!
//! Everything in here is plain data with no external dependencies, so the
//! projection core, the terminal layer and the input layer can all share it.
//!
//! # Viewport and Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `VIEWPORT_WIDTH` | 40 | Frame width in terminal columns |
//! | `VIEWPORT_HEIGHT` | 40 | Frame height in terminal rows |
//! | `TUBE_RADIUS` | 1.0 | R1, radius of the tube cross-section |
//! | `RING_RADIUS` | 2.0 | R2, distance from torus centre to tube centre |
//! | `VIEWER_DISTANCE` | 5.0 | K2, distance from the viewer to the torus centre |
//!
//! # Sampling and Animation
//!
//! - `THETA_STEP`: 0.07 rad around the tube
//! - `PHI_STEP`: 0.03 rad around the ring
//! - `SPIN_STEP`: 0.05 rad per key press
//!
//! The steps are fine enough that neighbouring samples land at most one cell
//! apart on a 40x40 viewport, so the surface renders without gaps.
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{DonutConfig, SpinAction, SpinAngles, SPIN_STEP};
//!
//! let config = DonutConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.k1(), 25.0);
//!
//! let angles = SpinAngles::default().apply(SpinAction::IncreaseB, SPIN_STEP);
//! assert_eq!(angles.b, SPIN_STEP);
//! assert_eq!(angles.a, 0.0);
//! ```

use std::f32::consts::TAU;
use std::fmt;

/// Frame width in terminal columns.
pub const VIEWPORT_WIDTH: u16 = 40;

/// Frame height in terminal rows.
pub const VIEWPORT_HEIGHT: u16 = 40;

/// Tube radius (R1).
pub const TUBE_RADIUS: f32 = 1.0;

/// Ring radius (R2). Must exceed the tube radius.
pub const RING_RADIUS: f32 = 2.0;

/// Viewer distance (K2). Must exceed `TUBE_RADIUS + RING_RADIUS`.
pub const VIEWER_DISTANCE: f32 = 5.0;

/// Sampling step around the tube cross-section, in radians.
pub const THETA_STEP: f32 = 0.07;

/// Sampling step around the ring, in radians.
pub const PHI_STEP: f32 = 0.03;

/// Rotation applied per key press, in radians.
pub const SPIN_STEP: f32 = 0.05;

/// Finest sampling grid accepted: at most this many steps per full turn.
///
/// Steps much finer than this stop advancing an `f32` angle near `TAU`.
pub const MAX_STEPS_PER_TURN: f32 = 65536.0;

/// Luminance is multiplied by this before bucketing into the glyph ramp.
pub const LUMINANCE_SCALE: f32 = 8.0;

/// Glyphs ordered from dimmest to brightest.
///
/// `8 * sqrt(2)` is about 11.3, so every positive luminance maps into this ramp.
pub const GLYPH_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Blank cell.
pub const BLANK: char = ' ';

/// Immutable render configuration.
///
/// Built once at startup and passed explicitly to the sampler, the compositor
/// and the session loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutConfig {
    pub width: u16,
    pub height: u16,
    /// Tube radius (R1).
    pub r1: f32,
    /// Ring radius (R2).
    pub r2: f32,
    /// Viewer distance (K2).
    pub k2: f32,
    pub theta_step: f32,
    pub phi_step: f32,
    pub spin_step: f32,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            r1: TUBE_RADIUS,
            r2: RING_RADIUS,
            k2: VIEWER_DISTANCE,
            theta_step: THETA_STEP,
            phi_step: PHI_STEP,
            spin_step: SPIN_STEP,
        }
    }
}

impl DonutConfig {
    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Projection scale (K1).
    ///
    /// Chosen so the outer edge of the torus (x = R1 + R2 at z = K2) lands 3/8 of
    /// the viewport height away from the centre.
    pub fn k1(&self) -> f32 {
        self.height as f32 * self.k2 * 3.0 / (8.0 * (self.r1 + self.r2))
    }

    /// Check the geometric invariants the projection relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport);
        }
        if !(self.r1 > 0.0) {
            return Err(ConfigError::TubeRadiusNotPositive);
        }
        if !(self.r1 < self.r2) {
            return Err(ConfigError::TubeWiderThanRing);
        }
        // Every point must stay in front of the viewer plane (z > 0).
        if !(self.k2 > self.r1 + self.r2) {
            return Err(ConfigError::ViewerInsideTorus);
        }
        if !(self.theta_step > 0.0) || !(self.phi_step > 0.0) {
            return Err(ConfigError::StepNotPositive);
        }
        if TAU / self.theta_step > MAX_STEPS_PER_TURN || TAU / self.phi_step > MAX_STEPS_PER_TURN {
            return Err(ConfigError::StepTooFine);
        }
        if !self.spin_step.is_finite() {
            return Err(ConfigError::SpinStepNotFinite);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyViewport,
    TubeRadiusNotPositive,
    TubeWiderThanRing,
    ViewerInsideTorus,
    StepNotPositive,
    StepTooFine,
    SpinStepNotFinite,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::EmptyViewport => "empty_viewport",
            ConfigError::TubeRadiusNotPositive
            | ConfigError::TubeWiderThanRing
            | ConfigError::ViewerInsideTorus => "invalid_geometry",
            ConfigError::StepNotPositive
            | ConfigError::StepTooFine
            | ConfigError::SpinStepNotFinite => "invalid_step",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::EmptyViewport => "viewport width and height must be non-zero",
            ConfigError::TubeRadiusNotPositive => "tube radius must be positive",
            ConfigError::TubeWiderThanRing => "tube radius must be smaller than ring radius",
            ConfigError::ViewerInsideTorus => {
                "viewer distance must exceed tube radius plus ring radius"
            }
            ConfigError::StepNotPositive => "sampling steps must be positive",
            ConfigError::StepTooFine => "sampling steps allow at most 65536 samples per turn",
            ConfigError::SpinStepNotFinite => "spin step must be finite",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ConfigError {}

/// Accumulated rotation angles, in radians.
///
/// `a` rotates about the x axis, `b` about the viewing (z) axis. Neither is
/// wrapped; trigonometric periodicity takes care of that.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinAngles {
    pub a: f32,
    pub b: f32,
}

impl SpinAngles {
    pub fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    /// Advance one angle by `step` in the direction of `action`.
    #[must_use]
    pub fn apply(self, action: SpinAction, step: f32) -> Self {
        match action {
            SpinAction::IncreaseA => Self { a: self.a + step, ..self },
            SpinAction::DecreaseA => Self { a: self.a - step, ..self },
            SpinAction::IncreaseB => Self { b: self.b + step, ..self },
            SpinAction::DecreaseB => Self { b: self.b - step, ..self },
        }
    }
}

/// Rotation requests produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinAction {
    IncreaseA,
    DecreaseA,
    IncreaseB,
    DecreaseB,
}
