//! Scalar helpers shared by every shading stage.
//!
//! These mirror the fragment-program built-ins the pipeline is written
//! against (`clamp`, `mix`, `fract`, `smoothstep`) so each stage reads
//! like its formula.

/// Clamp a value to [min, max] range.
#[inline(always)]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min { min } else if v > max { max } else { v }
}

/// Linear interpolation between a and b.
#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fractional part, always in [0, 1) (`x - floor(x)`, not `x.fract()`).
#[inline(always)]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Smooth step (Hermite interpolation).
///
/// `edge0 > edge1` is allowed and yields a falloff: 1 below `edge1`,
/// 0 above `edge0`. The vignette, disk outer edge and horizon mask
/// rely on this.
#[inline(always)]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Gaussian bump of unit height centred on `mu`.
#[inline(always)]
pub fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    let d = x - mu;
    (-(d * d) / (2.0 * sigma * sigma)).exp()
}

/// Pack a float to a byte [0, 255].
#[inline(always)]
pub fn float_to_byte(v: f64) -> u8 {
    let vi = (v * 255.0) as i32;
    if vi < 0 { 0 } else if vi > 255 { 255 } else { vi as u8 }
}
