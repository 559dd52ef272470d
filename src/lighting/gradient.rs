//! Colour ramp: maps a heat parameter in [0,1] to a colour via linear
//! interpolation between fixed stops.
//!
//! The accretion disk uses `HEAT_RAMP`, a dark red → orange → near-white
//! blackbody-like progression split into two linear segments at 0.5.

use crate::engine::types::Rgb;
use crate::math::utils;

/// A single color stop in the ramp.
#[derive(Clone, Copy, Debug)]
pub struct ColorStop {
    /// Position in [0, 1] range
    pub position: f64,
    /// Linear RGB; may exceed 1.0 (tone mapping compresses it later)
    pub color: Rgb,
}

/// Colour ramp over a static, position-sorted list of stops.
#[derive(Clone, Copy, Debug)]
pub struct ColorRamp {
    pub stops: &'static [ColorStop],
}

/// Disk heat ramp.
pub const HEAT_RAMP: ColorRamp = ColorRamp {
    stops: &[
        ColorStop { position: 0.0, color: Rgb::new(0.03, 0.0, 0.0) },   // ember
        ColorStop { position: 0.5, color: Rgb::new(0.85, 0.25, 0.02) }, // orange
        ColorStop { position: 1.0, color: Rgb::new(1.05, 0.98, 0.82) }, // white-hot
    ],
};

impl ColorRamp {
    /// Sample the ramp at position t (clamped to [0,1]).
    /// Uses linear interpolation between stops.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = utils::clamp(t, 0.0, 1.0);

        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgb::BLACK,
        };

        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (s0, s1) = (&pair[0], &pair[1]);
            if t >= s0.position && t <= s1.position {
                let range = s1.position - s0.position;
                let frac = if range > 1e-10 { (t - s0.position) / range } else { 0.0 };
                return Rgb {
                    r: utils::lerp(s0.color.r, s1.color.r, frac),
                    g: utils::lerp(s0.color.g, s1.color.g, frac),
                    b: utils::lerp(s0.color.b, s1.color.b, frac),
                };
            }
        }

        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_endpoints() {
        let c = HEAT_RAMP.sample(0.0);
        assert!((c.r - 0.03).abs() < 1e-12);
        let c = HEAT_RAMP.sample(1.0);
        assert!((c.r - 1.05).abs() < 1e-12);
        assert!((c.b - 0.82).abs() < 1e-12);
    }

    #[test]
    fn test_heat_midpoint_is_orange() {
        let c = HEAT_RAMP.sample(0.5);
        assert!((c.r - 0.85).abs() < 1e-12);
        assert!((c.g - 0.25).abs() < 1e-12);
        assert!((c.b - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_heat_segments_are_linear() {
        let c = HEAT_RAMP.sample(0.25);
        assert!((c.r - (0.03 + 0.85) / 2.0).abs() < 1e-12);
        let c = HEAT_RAMP.sample(0.75);
        assert!((c.g - (0.25 + 0.98) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_heat_clamps_input() {
        assert_eq!(HEAT_RAMP.sample(-3.0), HEAT_RAMP.sample(0.0));
        assert_eq!(HEAT_RAMP.sample(7.0), HEAT_RAMP.sample(1.0));
    }

    #[test]
    fn test_empty_ramp_is_black() {
        let ramp = ColorRamp { stops: &[] };
        assert_eq!(ramp.sample(0.5), Rgb::BLACK);
    }
}
