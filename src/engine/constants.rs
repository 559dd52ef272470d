//! Fixed visual constants.
//!
//! Every radius, frequency, gain and colour stop the pipeline uses lives
//! here so the composition order in `shader` can be audited against plain
//! names. None of these are derived from frame inputs.

use crate::engine::types::Rgb;

// ─── Geometry (normalized view space) ────────────────────────

/// Radius inside which the output is forced to black.
pub const EVENT_RADIUS: f64 = 0.12;
/// Radius of the photon ring glow and the lens bump.
pub const PHOTON_RING: f64 = 0.18;
pub const DISK_INNER: f64 = 0.16;
pub const DISK_OUTER: f64 = 0.45;

// The photon ring sits inside the disk annulus, just past its inner edge.
const _: () = assert!(EVENT_RADIUS > 0.0);
const _: () = assert!(EVENT_RADIUS < DISK_INNER);
const _: () = assert!(EVENT_RADIUS < PHOTON_RING);
const _: () = assert!(PHOTON_RING < DISK_OUTER);
const _: () = assert!(DISK_INNER < DISK_OUTER);

// ─── Center tracker ──────────────────────────────────────────

/// Fraction of the normalized pointer displacement applied to the center.
pub const POINTER_DAMPING: f64 = 0.2;

// ─── Lens warp ───────────────────────────────────────────────

pub const LENS_STRENGTH: f64 = 0.08;
/// Floor on the radius in the inverse-distance bend term.
pub const LENS_EPSILON: f64 = 1e-4;
pub const LENS_BUMP_AMPLITUDE: f64 = 0.06;
pub const LENS_BUMP_SIGMA: f64 = 0.03;
pub const LENS_MAX_BEND: f64 = 0.22;

// ─── Starfield ───────────────────────────────────────────────

pub const STAR_FREQUENCY: f64 = 800.0;
/// Noise level where stars start to appear; 1.0 is full brightness.
pub const STAR_THRESHOLD: f64 = 0.992;
pub const STAR_TWINKLE_PHASE: f64 = 20.0;
pub const STAR_TWINKLE_RATE: f64 = 3.0;
pub const STAR_TWINKLE_BASE: f64 = 0.6;
pub const STAR_TWINKLE_DEPTH: f64 = 0.4;
pub const STAR_GAIN: f64 = 1.2;

// ─── Accretion disk ──────────────────────────────────────────

/// Width of the smooth falloff at both annulus edges.
pub const DISK_EDGE_SOFTNESS: f64 = 0.01;
/// Below this membership the disk stage returns black without shading.
pub const DISK_MEMBERSHIP_EPSILON: f64 = 1e-4;
/// Radians per second.
pub const DISK_SPIN_RATE: f64 = 0.7;
pub const DISK_LANE_ANGULAR_SCALE: f64 = 6.0;
pub const DISK_LANE_RADIAL_SCALE: f64 = 40.0;
pub const DISK_LANE_DRIFT_RATE: f64 = 2.0;
pub const DISK_LANE_BASE: f64 = 0.6;
pub const DISK_LANE_DEPTH: f64 = 0.4;
pub const DISK_DOPPLER_EXPONENT: f64 = 1.5;
/// Inner fade runs from `EVENT_RADIUS + start` to `EVENT_RADIUS + end`.
pub const DISK_FADE_START: f64 = 0.02;
pub const DISK_FADE_END: f64 = 0.10;
pub const DISK_GAIN: f64 = 1.4;

// ─── Ring glow ───────────────────────────────────────────────

pub const RING_SIGMA: f64 = 0.008;
pub const RING_INTENSITY: f64 = 0.7;
pub const RING_TINT: Rgb = Rgb::new(1.1, 0.95, 0.8);

// ─── Compositor ──────────────────────────────────────────────

/// Vignette is 1 inside this distance from the viewport midpoint.
pub const VIGNETTE_INNER: f64 = 0.90;
/// Vignette reaches 0 at this distance.
pub const VIGNETTE_OUTER: f64 = 1.30;
/// Width of the horizon edge just inside `EVENT_RADIUS`.
pub const HORIZON_SOFTNESS: f64 = 0.0005;
pub const EXPOSURE: f64 = 1.1;
