//! 2D vector operations in normalized screen space.
//!
//! Free functions over `Vec2`, in the same shape as the rest of the
//! math module. Everything is `f64` so a frame is reproducible bit for bit.

use crate::engine::types::Vec2;

// ─── Vector operations ───────────────────────────────────────

#[inline(always)]
pub fn vec2_add(a: &Vec2, b: &Vec2) -> Vec2 {
    Vec2 {
        x: a.x + b.x,
        y: a.y + b.y,
    }
}

#[inline(always)]
pub fn vec2_sub(a: &Vec2, b: &Vec2) -> Vec2 {
    Vec2 {
        x: a.x - b.x,
        y: a.y - b.y,
    }
}

#[inline(always)]
pub fn vec2_scale(v: &Vec2, s: f64) -> Vec2 {
    Vec2 {
        x: v.x * s,
        y: v.y * s,
    }
}

#[inline(always)]
pub fn vec2_dot(a: &Vec2, b: &Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

#[inline(always)]
pub fn vec2_length(v: &Vec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[inline(always)]
pub fn vec2_distance(a: &Vec2, b: &Vec2) -> f64 {
    vec2_length(&vec2_sub(a, b))
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has
/// zero length. Lens Warp relies on the zero result at the exact centre.
#[inline(always)]
pub fn vec2_normalize_or_zero(v: &Vec2) -> Vec2 {
    let len = vec2_length(v);
    if len > 0.0 {
        let inv = 1.0 / len;
        Vec2 { x: v.x * inv, y: v.y * inv }
    } else {
        Vec2::ZERO
    }
}

/// Polar angle of `v` in (-π, π].
#[inline(always)]
pub fn vec2_angle(v: &Vec2) -> f64 {
    v.y.atan2(v.x)
}
