//! Coordinate normalizer, center tracker and lens warp.
//!
//! These three run before any colour is sampled: every source (stars,
//! disk) is looked up at the warped coordinate, never the raw one.

use crate::engine::constants::*;
use crate::engine::types::{Vec2, Viewport};
use crate::math::utils;
use crate::math::vec2::*;

/// Map a raw position in pixels to normalized [0,1]² view space.
///
/// Each axis is divided by its own dimension (no aspect correction), which
/// is the UV a fullscreen triangle interpolates across the viewport.
#[inline]
pub fn normalize_coord(pixel: &Vec2, viewport: &Viewport) -> Vec2 {
    Vec2 {
        x: pixel.x / viewport.width,
        y: pixel.y / viewport.height,
    }
}

/// Black hole center for this frame.
///
/// `0.5 + (pointer/viewport - 0.5) * 0.2`. An in-window pointer moves the
/// center at most ±0.1 per axis. The pointer is not clamped, so an
/// off-window pointer can push the center further out.
pub fn center_from_pointer(pointer: &Vec2, viewport: &Viewport) -> Vec2 {
    let m = vec2_sub(&normalize_coord(pointer, viewport), &Vec2::HALF);
    vec2_add(&Vec2::HALF, &vec2_scale(&m, POINTER_DAMPING))
}

/// Magnitude of the lens displacement at distance `r` from the center.
///
/// Inverse-distance bend with an epsilon floor plus a Gaussian bump at
/// the photon ring, clamped to [0, `LENS_MAX_BEND`].
#[inline]
pub fn bend_magnitude(r: f64) -> f64 {
    let bend = LENS_STRENGTH / r.max(LENS_EPSILON)
        + LENS_BUMP_AMPLITUDE * utils::gaussian(r, PHOTON_RING, LENS_BUMP_SIGMA);
    utils::clamp(bend, 0.0, LENS_MAX_BEND)
}

/// Pull `coord` toward `center` by the bend magnitude.
///
/// At the exact center the direction is undefined; the displacement is
/// zero there and `coord` comes back unchanged.
pub fn lens_warp(coord: &Vec2, center: &Vec2) -> Vec2 {
    let d = vec2_sub(coord, center);
    let r = vec2_length(&d);
    let dir = vec2_normalize_or_zero(&d);
    vec2_sub(coord, &vec2_scale(&dir, bend_magnitude(r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HD: Viewport = Viewport { width: 1280.0, height: 720.0 };

    #[test]
    fn test_normalize_coord_axes_independent() {
        let uv = normalize_coord(&Vec2::new(320.0, 540.0), &HD);
        assert_eq!(uv, Vec2::new(0.25, 0.75));
    }

    #[test]
    fn test_center_at_midpoint() {
        let c = center_from_pointer(&Vec2::new(640.0, 360.0), &HD);
        assert_eq!(c, Vec2::HALF);
    }

    #[test]
    fn test_center_band_at_window_corners() {
        let lo = center_from_pointer(&Vec2::new(0.0, 0.0), &HD);
        let hi = center_from_pointer(&Vec2::new(1280.0, 720.0), &HD);
        assert!((lo.x - 0.4).abs() < 1e-12 && (lo.y - 0.4).abs() < 1e-12);
        assert!((hi.x - 0.6).abs() < 1e-12 && (hi.y - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_center_monotonic_in_pointer_x() {
        let mut prev = f64::NEG_INFINITY;
        for px in (0..=1280).step_by(40) {
            let c = center_from_pointer(&Vec2::new(px as f64, 200.0), &HD);
            assert!(c.x > prev);
            assert!((0.4 - 1e-12..=0.6 + 1e-12).contains(&c.x));
            prev = c.x;
        }
    }

    #[test]
    fn test_center_unclamped_off_window() {
        let c = center_from_pointer(&Vec2::new(12800.0, -7200.0), &HD);
        assert!((c.x - 2.4).abs() < 1e-9);
        assert!((c.y - (-1.6)).abs() < 1e-9);
    }

    #[test]
    fn test_bend_clamped() {
        assert_eq!(bend_magnitude(0.0), LENS_MAX_BEND);
        assert_eq!(bend_magnitude(0.05), LENS_MAX_BEND);
        let far = bend_magnitude(0.8);
        assert!((far - LENS_STRENGTH / 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_warp_at_center_is_identity() {
        let c = Vec2::HALF;
        assert_eq!(lens_warp(&c, &c), c);
    }

    #[test]
    fn test_warp_pulls_toward_center() {
        let c = Vec2::HALF;
        let p = Vec2::new(0.9, 0.5);
        let w = lens_warp(&p, &c);
        assert!(w.x < p.x);
        assert_eq!(w.y, p.y);
        assert!((p.x - w.x - bend_magnitude(0.4)).abs() < 1e-12);
    }
}
