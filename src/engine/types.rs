//! Core value types for one frame and one pixel.
//! The host never sees these directly; it passes flat f64 parameter arrays
//! that `FrameInputs::from_buffer` unpacks.

use crate::error::FrameError;

/// Number of f64 slots in the host parameter buffer.
pub const FRAME_PARAMS_LEN: usize = 5;

/// 2D point or offset in normalized view space (or raw pixels for the pointer).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Midpoint of normalized view space.
    pub const HALF: Vec2 = Vec2 { x: 0.5, y: 0.5 };

    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear RGB radiance sample. Channels are non-negative until tone mapping.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    #[inline(always)]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Achromatic sample with all three channels set to `v`.
    #[inline(always)]
    pub const fn splat(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    #[inline(always)]
    pub fn add(&self, other: &Rgb) -> Rgb {
        Rgb {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }

    #[inline(always)]
    pub fn scale(&self, s: f64) -> Rgb {
        Rgb {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }

    /// Apply `f` to each channel.
    #[inline(always)]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Rgb {
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    pub fn sum(&self) -> f64 {
        self.r + self.g + self.b
    }
}

/// Drawable size in pixels. Both dimensions are positive once validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Width and height in whole pixels, as the RGBA buffer is laid out.
    pub fn pixel_dims(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    /// Bytes needed for an RGBA8 image of this viewport, or `None` if that
    /// does not fit in `usize`.
    pub fn rgba_len(&self) -> Option<usize> {
        let (w, h) = self.pixel_dims();
        (w as usize).checked_mul(h as usize)?.checked_mul(4)
    }
}

/// Everything the host supplies once per frame. Immutable for the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    /// Seconds since the host started its clock (monotonic across frames)
    pub elapsed_seconds: f64,
    /// Viewport size in pixels
    pub viewport: Viewport,
    /// Pointer position in raw pixels; unclamped, may lie off-window
    pub pointer: Vec2,
}

impl FrameInputs {
    /// Validate host-supplied values.
    ///
    /// Only host preconditions are checked here (positive finite viewport,
    /// non-negative time, finite pointer). Off-window pointers are accepted.
    pub fn new(elapsed_seconds: f64, viewport: Viewport, pointer: Vec2) -> Result<Self, FrameError> {
        if !(viewport.width.is_finite() && viewport.height.is_finite())
            || viewport.width < 1.0
            || viewport.height < 1.0
        {
            return Err(FrameError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
            return Err(FrameError::InvalidTime(elapsed_seconds));
        }
        if !(pointer.x.is_finite() && pointer.y.is_finite()) {
            return Err(FrameError::InvalidPointer { x: pointer.x, y: pointer.y });
        }
        Ok(Self { elapsed_seconds, viewport, pointer })
    }

    /// Build FrameInputs from the flat host parameter buffer.
    ///
    /// Layout: [elapsed_seconds, width, height, pointer_x, pointer_y]
    pub fn from_buffer(data: &[f64]) -> Result<Self, FrameError> {
        if data.len() < FRAME_PARAMS_LEN {
            return Err(FrameError::ShortParams {
                expected: FRAME_PARAMS_LEN,
                got: data.len(),
            });
        }
        Self::new(
            data[0],
            Viewport { width: data[1], height: data[2] },
            Vec2 { x: data[3], y: data[4] },
        )
    }

    /// Inverse of `from_buffer`.
    pub fn to_buffer(&self) -> [f64; FRAME_PARAMS_LEN] {
        [
            self.elapsed_seconds,
            self.viewport.width,
            self.viewport.height,
            self.pointer.x,
            self.pointer.y,
        ]
    }
}
