//! Per-pixel shading function.
//!
//! Composition order:
//! 1. center from pointer (once per frame, in `FrameContext`)
//! 2. lens warp of the sample coordinate
//! 3. stars + disk at the warped coordinate, ring glow at the unwarped radius
//! 4. vignette, horizon mask, tone mapping
//!
//! The function is pure: the same `uv` and `FrameContext` always give the
//! same bits, so pixels can be shaded in any order on any thread.

use crate::engine::lens;
use crate::engine::types::{FrameInputs, Rgb, Vec2};
use crate::lighting::{composite, disk, ring, starfield};
use crate::math::vec2::vec2_distance;

/// Per-frame values shared read-only by every pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    pub inputs: FrameInputs,
    /// Lensing center in normalized view space
    pub center: Vec2,
}

impl FrameContext {
    pub fn new(inputs: FrameInputs) -> Self {
        let center = lens::center_from_pointer(&inputs.pointer, &inputs.viewport);
        Self { inputs, center }
    }

    #[inline(always)]
    pub fn time(&self) -> f64 {
        self.inputs.elapsed_seconds
    }
}

/// Intermediate values of one sample before compositing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelLayers {
    /// Unwarped distance from the lensing center
    pub r: f64,
    pub stars: Rgb,
    pub disk: Rgb,
    pub ring: Rgb,
}

impl PixelLayers {
    /// Additive radiance entering the compositor.
    pub fn radiance(&self) -> Rgb {
        self.stars.add(&self.disk).add(&self.ring)
    }
}

/// Evaluate the three radiance sources for normalized coordinate `uv`.
pub fn shade_layers(uv: &Vec2, frame: &FrameContext) -> PixelLayers {
    let warped = lens::lens_warp(uv, &frame.center);
    let r = vec2_distance(uv, &frame.center);

    PixelLayers {
        r,
        stars: starfield::stars(&warped, frame.time()),
        disk: disk::accretion(&warped, &frame.center, frame.time()),
        ring: ring::ring_glow(r),
    }
}

/// Final display colour in [0,1]³ for normalized coordinate `uv`.
pub fn shade(uv: &Vec2, frame: &FrameContext) -> Rgb {
    let layers = shade_layers(uv, frame);
    composite::composite(&layers.radiance(), uv, layers.r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::constants::*;
    use crate::engine::types::Viewport;

    fn frame(t: f64, pointer: Vec2) -> FrameContext {
        let viewport = Viewport { width: 1280.0, height: 720.0 };
        FrameContext::new(FrameInputs::new(t, viewport, pointer).unwrap())
    }

    #[test]
    fn test_center_sample_is_black() {
        let f = frame(0.0, Vec2::new(640.0, 360.0));
        assert_eq!(f.center, Vec2::HALF);
        assert_eq!(shade(&Vec2::HALF, &f), Rgb::BLACK);
    }

    #[test]
    fn test_inside_horizon_is_black_even_with_offset_center() {
        let f = frame(3.3, Vec2::new(100.0, 650.0));
        for k in 0..64 {
            let a = k as f64 * std::f64::consts::TAU / 64.0;
            let rad = (EVENT_RADIUS - HORIZON_SOFTNESS) * (k as f64 / 64.0);
            let uv = Vec2::new(f.center.x + rad * a.cos(), f.center.y + rad * a.sin());
            assert_eq!(shade(&uv, &f), Rgb::BLACK);
        }
    }

    #[test]
    fn test_ring_layer_peaks_at_photon_ring() {
        let f = frame(0.0, Vec2::new(640.0, 360.0));
        let at_ring = shade_layers(&Vec2::new(0.5 + PHOTON_RING, 0.5), &f);
        let outside = shade_layers(&Vec2::new(0.5 + 0.30, 0.5), &f);
        assert!((at_ring.r - PHOTON_RING).abs() < 1e-12);
        assert!(at_ring.ring.sum() > 0.99 * RING_TINT.scale(RING_INTENSITY).sum());
        assert!(at_ring.ring.sum() > outside.ring.sum());
    }

    #[test]
    fn test_shade_is_deterministic() {
        let f = frame(12.5, Vec2::new(300.0, 200.0));
        for k in 0..100 {
            let uv = Vec2::new(k as f64 / 100.0, 1.0 - k as f64 / 130.0);
            let a = shade(&uv, &f);
            let b = shade(&uv, &f);
            assert_eq!(a.r.to_bits(), b.r.to_bits());
            assert_eq!(a.g.to_bits(), b.g.to_bits());
            assert_eq!(a.b.to_bits(), b.b.to_bits());
        }
    }
}
