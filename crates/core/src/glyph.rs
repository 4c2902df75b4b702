//! Luminance to glyph bucketing.

use crate::types::{GLYPH_RAMP, LUMINANCE_SCALE};

/// Ramp index for a luminance value: `floor(L * 8)`, clamped into the ramp.
#[inline]
pub fn luminance_index(luminance: f32) -> usize {
    // `as usize` saturates negatives to 0.
    let idx = (luminance * LUMINANCE_SCALE) as usize;
    idx.min(GLYPH_RAMP.len() - 1)
}

#[inline]
pub fn glyph_for(luminance: f32) -> char {
    GLYPH_RAMP[luminance_index(luminance)]
}
