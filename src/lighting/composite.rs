//! Compositor post-stages: vignette, event-horizon mask, tone mapping.
//!
//! Applied in that order to the summed stars + disk + ring radiance. The
//! horizon mask comes after every additive term so nothing can bleed into
//! the shadow, and tone mapping comes last.

use crate::engine::constants::*;
use crate::engine::types::{Rgb, Vec2};
use crate::math::utils;
use crate::math::vec2::vec2_distance;

/// Radial vignette around the viewport midpoint (not the lensing center).
#[inline]
pub fn vignette(uv: &Vec2) -> f64 {
    utils::smoothstep(VIGNETTE_OUTER, VIGNETTE_INNER, vec2_distance(uv, &Vec2::HALF))
}

/// 0 inside `EVENT_RADIUS - HORIZON_SOFTNESS`, 1 from `EVENT_RADIUS` out.
///
/// `r` is the unwarped distance to the lensing center.
#[inline]
pub fn horizon_mask(r: f64) -> f64 {
    utils::smoothstep(EVENT_RADIUS - HORIZON_SOFTNESS, EVENT_RADIUS, r)
}

/// Exposure curve `1 - exp(-c * exposure)` then Reinhard `c / (1 + c)`.
///
/// Both steps are monotonic; a non-negative input lands in [0, 0.5).
#[inline]
pub fn tone_map(color: &Rgb) -> Rgb {
    color
        .map(|c| 1.0 - (-c * EXPOSURE).exp())
        .map(|c| c / (1.0 + c))
}

/// Full post chain for one sample.
pub fn composite(radiance: &Rgb, uv: &Vec2, r: f64) -> Rgb {
    let lit = radiance.scale(vignette(uv));
    let masked = lit.scale(horizon_mask(r));
    tone_map(&masked)
}
