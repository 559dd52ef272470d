//! Radiance sources and the compositor.
//!
//! - `starfield`: hash-noise stars at warped coordinates
//! - `disk`: rotating accretion disk with heat ramp and beaming
//! - `ring`: photon ring glow at the unwarped radius
//! - `composite`: vignette, horizon mask, tone mapping
//! - `gradient`: colour ramp used by the disk

pub mod composite;
pub mod disk;
pub mod gradient;
pub mod ring;
pub mod starfield;
