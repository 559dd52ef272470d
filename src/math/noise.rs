//! Deterministic hash and 2D value noise.
//!
//! No random source: the same lattice point always hashes to the same
//! value, which is what makes a frame reproducible for a fixed time and
//! pointer. Used by the starfield and by the disk lane pattern.

use crate::engine::types::Vec2;
use crate::math::utils::{fract, lerp};
use crate::math::vec2::vec2_dot;

/// Hash a 2D point to a scalar in [0, 1).
#[inline]
pub fn hash(p: &Vec2) -> f64 {
    let mut q = Vec2 {
        x: fract(p.x * 123.34),
        y: fract(p.y * 456.21),
    };
    let d = vec2_dot(&q, &Vec2 { x: q.x + 45.32, y: q.y + 45.32 });
    q.x += d;
    q.y += d;
    fract(q.x * q.y)
}

/// Value noise: hashes at the four surrounding lattice corners blended
/// with a Hermite fade. Output in [0, 1).
pub fn value_noise(p: &Vec2) -> f64 {
    let ix = p.x.floor();
    let iy = p.y.floor();
    let fx = p.x - ix;
    let fy = p.y - iy;

    let a = hash(&Vec2 { x: ix, y: iy });
    let b = hash(&Vec2 { x: ix + 1.0, y: iy });
    let c = hash(&Vec2 { x: ix, y: iy + 1.0 });
    let d = hash(&Vec2 { x: ix + 1.0, y: iy + 1.0 });

    let ux = fx * fx * (3.0 - 2.0 * fx);
    let uy = fy * fy * (3.0 - 2.0 * fy);

    lerp(lerp(a, b, ux), lerp(c, d, ux), uy)
}
