//! Accretion disk radiance.
//!
//! Shading order for one sample:
//! - annulus membership (soft at both edges); below epsilon → black, done
//! - rotating lane pattern from value noise → heat parameter
//! - heat ramp colour
//! - directional "doppler" brightening of one side
//! - inner fade toward the event horizon
//!
//! All of it is evaluated at the lens-warped coordinate.

use std::f64::consts::FRAC_PI_2;

use super::gradient::HEAT_RAMP;
use crate::engine::constants::*;
use crate::engine::types::{Rgb, Vec2};
use crate::math::noise::value_noise;
use crate::math::utils;
use crate::math::vec2::{vec2_angle, vec2_length, vec2_sub};

/// Soft annulus weight in [0,1]: 1 well inside [DISK_INNER, DISK_OUTER],
/// falling to 0 over `DISK_EDGE_SOFTNESS` at each edge.
#[inline]
pub fn membership(r: f64) -> f64 {
    utils::smoothstep(DISK_OUTER, DISK_OUTER - DISK_EDGE_SOFTNESS, r)
        * utils::smoothstep(DISK_INNER, DISK_INNER + DISK_EDGE_SOFTNESS, r)
}

/// Heat parameter from the lane pattern, in [DISK_LANE_BASE, 1].
///
/// `spin` is the disk-frame angle; the radial term drifts outward with time.
#[inline]
pub fn lane_heat(spin: f64, r: f64, elapsed_seconds: f64) -> f64 {
    let p = Vec2 {
        x: spin * DISK_LANE_ANGULAR_SCALE,
        y: r * DISK_LANE_RADIAL_SCALE + elapsed_seconds * DISK_LANE_DRIFT_RATE,
    };
    DISK_LANE_BASE + DISK_LANE_DEPTH * value_noise(&p)
}

/// Beaming approximation: brightest at angle π/2, zero at -π/2.
#[inline]
pub fn doppler(angle: f64) -> f64 {
    let d = (0.5 + 0.5 * (angle - FRAC_PI_2).cos()).max(0.0);
    d.powf(DISK_DOPPLER_EXPONENT)
}

/// Suppresses the disk as it approaches the horizon.
#[inline]
pub fn inner_fade(r: f64) -> f64 {
    utils::smoothstep(EVENT_RADIUS + DISK_FADE_START, EVENT_RADIUS + DISK_FADE_END, r)
}

/// Disk radiance at a warped coordinate.
pub fn accretion(warped: &Vec2, center: &Vec2, elapsed_seconds: f64) -> Rgb {
    let d = vec2_sub(warped, center);
    let r = vec2_length(&d);

    let ring = membership(r);
    if ring < DISK_MEMBERSHIP_EPSILON {
        return Rgb::BLACK;
    }

    let angle = vec2_angle(&d);
    let spin = angle - elapsed_seconds * DISK_SPIN_RATE;
    let heat = lane_heat(spin, r, elapsed_seconds);

    HEAT_RAMP
        .sample(heat)
        .scale(doppler(angle) * inner_fade(r) * DISK_GAIN * ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_peaks_mid_annulus() {
        let mid = membership((DISK_INNER + DISK_OUTER) / 2.0);
        assert_eq!(mid, 1.0);
        assert!(mid >= membership(DISK_INNER - 0.05));
        assert!(mid >= membership(DISK_OUTER + 0.05));
        assert_eq!(membership(DISK_INNER - 0.05), 0.0);
        assert_eq!(membership(DISK_OUTER + 0.05), 0.0);
    }

    #[test]
    fn test_membership_soft_edges() {
        let edge = membership(DISK_INNER + DISK_EDGE_SOFTNESS / 2.0);
        assert!(edge > 0.0 && edge < 1.0);
    }

    #[test]
    fn test_lane_heat_range() {
        for k in 0..400 {
            let h = lane_heat(k as f64 * 0.05 - 10.0, 0.2 + k as f64 * 0.0005, k as f64 * 0.1);
            assert!((DISK_LANE_BASE..=1.0).contains(&h));
        }
    }

    #[test]
    fn test_doppler_one_sided() {
        assert!((doppler(FRAC_PI_2) - 1.0).abs() < 1e-12);
        assert!(doppler(-FRAC_PI_2) < 1e-12);
        assert!(doppler(0.3) > doppler(-0.3));
    }

    #[test]
    fn test_outside_annulus_is_black() {
        let c = Vec2::HALF;
        assert_eq!(accretion(&Vec2::new(0.5, 0.5), &c, 1.0), Rgb::BLACK);
        assert_eq!(accretion(&Vec2::new(0.5, 1.2), &c, 1.0), Rgb::BLACK);
    }

    #[test]
    fn test_bright_side_brighter_than_dim_side() {
        let c = Vec2::HALF;
        let up = accretion(&Vec2::new(0.5, 0.8), &c, 0.0);
        let down = accretion(&Vec2::new(0.5, 0.2), &c, 0.0);
        assert!(up.sum() > 0.0);
        assert!(up.sum() > down.sum());
    }

    #[test]
    fn test_disk_rotates_with_time() {
        let c = Vec2::HALF;
        let p = Vec2::new(0.8, 0.6);
        let samples: Vec<f64> = (0..8).map(|i| accretion(&p, &c, i as f64 * 0.37).r).collect();
        assert!(samples.iter().any(|&v| (v - samples[0]).abs() > 1e-9));
    }
}
