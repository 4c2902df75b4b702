//! Torus sampling and perspective projection.
//!
//! Everything here is a pure function of the configuration, the rotation
//! angles and the two surface parameters.

use std::f32::consts::TAU;

use crate::types::{DonutConfig, SpinAngles};

/// Per-frame trigonometry of the two rotation angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTrig {
    pub cos_a: f32,
    pub sin_a: f32,
    pub cos_b: f32,
    pub sin_b: f32,
}

impl SpinTrig {
    pub fn new(angles: SpinAngles) -> Self {
        Self {
            cos_a: angles.a.cos(),
            sin_a: angles.a.sin(),
            cos_b: angles.b.cos(),
            sin_b: angles.b.sin(),
        }
    }
}

/// One projected point on the torus surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Screen column, truncated toward zero. May fall outside the viewport.
    pub xp: i32,
    /// Screen row, truncated toward zero. May fall outside the viewport.
    pub yp: i32,
    /// Inverse depth; larger is closer.
    pub ooz: f32,
    /// In `[-sqrt(2), sqrt(2)]`; `<= 0` faces away from the light.
    pub luminance: f32,
}

/// Project the surface point at (`theta`, `phi`).
pub fn project(config: &DonutConfig, trig: &SpinTrig, theta: f32, phi: f32) -> Sample {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    project_trig(config, trig, cos_theta, sin_theta, cos_phi, sin_phi)
}

#[inline(always)]
fn project_trig(
    config: &DonutConfig,
    trig: &SpinTrig,
    cos_theta: f32,
    sin_theta: f32,
    cos_phi: f32,
    sin_phi: f32,
) -> Sample {
    let SpinTrig {
        cos_a,
        sin_a,
        cos_b,
        sin_b,
    } = *trig;

    // Tube cross-section before revolving around the ring axis.
    let circle_x = config.r2 + config.r1 * cos_theta;
    let circle_y = config.r1 * sin_theta;

    let x = circle_x * (cos_b * cos_phi + sin_a * sin_b * sin_phi) - circle_y * cos_a * sin_b;
    let y = circle_x * (sin_b * cos_phi - sin_a * cos_b * sin_phi) + circle_y * cos_a * cos_b;
    let z = config.k2 + cos_a * circle_x * sin_phi + circle_y * sin_a;
    let ooz = 1.0 / z;

    // Screen rows grow downward, so y is negated. Integer halves, then truncation.
    let k1 = config.k1();
    let half_w = (config.width / 2) as f32;
    let half_h = (config.height / 2) as f32;
    let xp = (half_w + k1 * ooz * x - 1.0) as i32;
    let yp = (half_h - k1 * ooz * y - 1.0) as i32;

    Sample {
        x,
        y,
        z,
        xp,
        yp,
        ooz,
        luminance: luminance(trig, cos_theta, sin_theta, cos_phi, sin_phi),
    }
}

/// Dot product of the rotated surface normal with the light direction (0, 1, -1).
#[inline(always)]
pub fn luminance(
    trig: &SpinTrig,
    cos_theta: f32,
    sin_theta: f32,
    cos_phi: f32,
    sin_phi: f32,
) -> f32 {
    let SpinTrig {
        cos_a,
        sin_a,
        cos_b,
        sin_b,
    } = *trig;
    cos_phi * cos_theta * sin_b - cos_a * cos_theta * sin_phi - sin_a * sin_theta
        + cos_b * (cos_a * sin_theta - cos_theta * sin_a * sin_phi)
}

/// Visit every sample of one frame, theta-major.
///
/// Both angles start at 0 and are accumulated in `f32` until they reach a full
/// turn, so the grid (and therefore the output) is reproducible bit for bit.
pub fn for_each_sample(config: &DonutConfig, angles: SpinAngles, mut f: impl FnMut(&Sample)) {
    let trig = SpinTrig::new(angles);

    let mut theta = 0.0f32;
    while theta < TAU {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let mut phi = 0.0f32;
        while phi < TAU {
            let (sin_phi, cos_phi) = phi.sin_cos();
            let sample = project_trig(config, &trig, cos_theta, sin_theta, cos_phi, sin_phi);
            f(&sample);
            phi += config.phi_step;
        }
        theta += config.theta_step;
    }
}

/// Number of samples `for_each_sample` visits per frame.
pub fn sample_count(config: &DonutConfig) -> usize {
    steps_per_turn(config.theta_step) * steps_per_turn(config.phi_step)
}

fn steps_per_turn(step: f32) -> usize {
    let mut n = 0;
    let mut angle = 0.0f32;
    while angle < TAU {
        n += 1;
        angle += step;
    }
    n
}
