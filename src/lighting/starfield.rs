//! Procedural starfield sampled at lens-warped coordinates.

use crate::engine::constants::*;
use crate::engine::types::{Rgb, Vec2};
use crate::math::noise::value_noise;
use crate::math::utils;
use crate::math::vec2::vec2_scale;

/// Sparse twinkling stars.
///
/// Only noise values in the top of the range light up. The twinkle phase
/// comes from the noise value itself, so neighbouring stars flicker out of
/// step without any per-star state. Output is achromatic and non-negative.
pub fn stars(warped: &Vec2, elapsed_seconds: f64) -> Rgb {
    let n = value_noise(&vec2_scale(warped, STAR_FREQUENCY));
    let mut s = utils::smoothstep(STAR_THRESHOLD, 1.0, n);
    if s == 0.0 {
        return Rgb::BLACK;
    }
    s *= STAR_TWINKLE_BASE
        + STAR_TWINKLE_DEPTH * (STAR_TWINKLE_PHASE * n + elapsed_seconds * STAR_TWINKLE_RATE).sin();
    Rgb::splat(s * STAR_GAIN)
}
