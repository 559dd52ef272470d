//! Photon ring glow: a thin Gaussian band at `PHOTON_RING`.
//!
//! Added regardless of disk membership, so the ring stays visible where
//! the disk is empty.

use crate::engine::constants::*;
use crate::engine::types::Rgb;
use crate::math::utils;

/// Ring glow at unwarped distance `r` from the center.
#[inline]
pub fn ring_glow(r: f64) -> Rgb {
    RING_TINT.scale(utils::gaussian(r, PHOTON_RING, RING_SIGMA) * RING_INTENSITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_at_photon_ring() {
        let peak = ring_glow(PHOTON_RING);
        assert!((peak.r - 1.1 * RING_INTENSITY).abs() < 1e-12);
        assert!(peak.sum() > ring_glow(PHOTON_RING + 0.004).sum());
        assert!(peak.sum() > ring_glow(PHOTON_RING - 0.004).sum());
    }

    #[test]
    fn test_negligible_away_from_ring() {
        assert!(ring_glow(0.30).sum() < 1e-9);
        assert!(ring_glow(EVENT_RADIUS).sum() < 1e-9);
    }
}
