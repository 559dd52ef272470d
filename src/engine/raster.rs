//! Frame production: runs the shading function over an RGBA8 buffer.
//!
//! Pixels are independent, so a frame can be split any way the host
//! likes. The browser host gives each Web Worker an interleaved set of
//! rows (`render_scanlines`); native hosts can use `render_frame_parallel`.
//! Every path writes bit-identical bytes.

use log::debug;
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::engine::lens;
use crate::engine::shader::{self, FrameContext};
use crate::engine::types::{FrameInputs, Rgb, Vec2, Viewport};
use crate::error::FrameError;
use crate::math::utils;

/// Normalized coordinate at the center of pixel (x, y).
///
/// This is the UV a fullscreen triangle with clip-space vertices
/// (-1,-1), (3,-1), (-1,3) and `uv = pos * 0.5 + 0.5` interpolates at the
/// fragment center. Rows are stored top-down but `v` grows upward, as in a
/// GL framebuffer, so row 0 samples v ≈ 1.
#[inline]
pub fn pixel_to_uv(x: u32, y: u32, viewport: &Viewport) -> Vec2 {
    let gl_row = viewport.height - (y as f64 + 0.5);
    lens::normalize_coord(&Vec2 { x: x as f64 + 0.5, y: gl_row }, viewport)
}

#[inline(always)]
fn write_rgba(out: &mut [u8], color: &Rgb) {
    out[0] = utils::float_to_byte(color.r);
    out[1] = utils::float_to_byte(color.g);
    out[2] = utils::float_to_byte(color.b);
    out[3] = 255;
}

/// Shade one row into its `width * 4` byte slice.
fn shade_row(frame: &FrameContext, y: u32, row: &mut [u8]) {
    let viewport = &frame.inputs.viewport;
    for (x, px) in row.chunks_exact_mut(4).enumerate() {
        let uv = pixel_to_uv(x as u32, y, viewport);
        write_rgba(px, &shader::shade(&uv, frame));
    }
}

fn check_buffer(inputs: &FrameInputs, rgba_out: &[u8]) -> Result<usize, FrameError> {
    let viewport = &inputs.viewport;
    let needed = viewport.rgba_len().ok_or(FrameError::ViewportTooLarge {
        width: viewport.width,
        height: viewport.height,
    })?;
    if rgba_out.len() < needed {
        return Err(FrameError::BufferTooSmall { needed, got: rgba_out.len() });
    }
    Ok(needed)
}

/// Render rows `worker_id, worker_id + worker_count, ...` into `rgba_out`.
///
/// `rgba_out` holds the whole frame; other rows are left untouched.
/// Returns the number of rows written.
pub fn render_scanlines(
    inputs: &FrameInputs,
    rgba_out: &mut [u8],
    worker_id: u32,
    worker_count: u32,
) -> Result<u32, FrameError> {
    check_buffer(inputs, rgba_out)?;
    let frame = FrameContext::new(*inputs);
    let (w, h) = inputs.viewport.pixel_dims();
    let stride = w as usize * 4;
    let step = worker_count.max(1);

    let mut rows_rendered = 0u32;
    let mut y = worker_id;
    while y < h {
        let start = y as usize * stride;
        shade_row(&frame, y, &mut rgba_out[start..start + stride]);
        rows_rendered += 1;
        y += step;
    }

    debug!(
        "worker {worker_id}/{step}: {rows_rendered} rows of {w}x{h} at t={:.3}",
        inputs.elapsed_seconds
    );
    Ok(rows_rendered)
}

/// Render the whole frame on the calling thread.
pub fn render_frame(inputs: &FrameInputs, rgba_out: &mut [u8]) -> Result<u32, FrameError> {
    render_scanlines(inputs, rgba_out, 0, 1)
}

/// Render the whole frame with one rayon task per row.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_frame_parallel(inputs: &FrameInputs, rgba_out: &mut [u8]) -> Result<u32, FrameError> {
    let needed = check_buffer(inputs, rgba_out)?;
    let frame = FrameContext::new(*inputs);
    let (w, h) = inputs.viewport.pixel_dims();

    rgba_out[..needed]
        .par_chunks_exact_mut(w as usize * 4)
        .enumerate()
        .for_each(|(y, row)| shade_row(&frame, y as u32, row));

    debug!("parallel frame {w}x{h} at t={:.3}", inputs.elapsed_seconds);
    Ok(h)
}
