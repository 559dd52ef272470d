use log::{error, info};
use wasm_bindgen::prelude::*;

pub mod engine;
pub mod error;
pub mod lighting;
pub mod math;

pub use engine::shader::{shade, FrameContext};
pub use engine::types::{FrameInputs, Rgb, Vec2, Viewport};
pub use error::FrameError;

/// Initialize the WASM module (called automatically on load).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        // Already set when the module is re-initialised in the same worker
        let _ = console_log::init_with_level(log::Level::Info);
    }
    info!("blackhole-wasm {} ready", env!("CARGO_PKG_VERSION"));
}

/// Render a full frame into an RGBA buffer for display.
///
/// `frame_params` — Float64Array: [elapsed_seconds, width, height, pointer_x, pointer_y]
/// `rgba_out` — Uint8Array: output RGBA (width * height * 4 bytes)
///
/// Returns the number of rows rendered; 0 if the frame was rejected.
#[wasm_bindgen]
pub fn render_frame(frame_params: &[f64], rgba_out: &mut [u8]) -> u32 {
    render_scanlines(frame_params, rgba_out, 0, 1)
}

/// Render scanlines into a shared RGBA buffer.
///
/// Called from each Web Worker with its assigned scanline range.
///
/// `frame_params` — Float64Array, same layout as `render_frame`
/// `rgba_out` — Uint8Array view into SharedArrayBuffer (width * height * 4 bytes)
/// `worker_id` / `worker_count` — interleaved scanline assignment
#[wasm_bindgen]
pub fn render_scanlines(
    frame_params: &[f64],
    rgba_out: &mut [u8],
    worker_id: u32,
    worker_count: u32,
) -> u32 {
    let result = FrameInputs::from_buffer(frame_params).and_then(|inputs| {
        engine::raster::render_scanlines(&inputs, rgba_out, worker_id, worker_count)
    });
    match result {
        Ok(rows) => rows,
        Err(e) => {
            error!("frame rejected: {e}");
            0
        }
    }
}

/// Shade a single normalized coordinate.
///
/// Returns [r, g, b, a] in [0, 1], or an empty array if the frame was rejected.
#[wasm_bindgen]
pub fn shade_uv(u: f64, v: f64, frame_params: &[f64]) -> Vec<f64> {
    match FrameInputs::from_buffer(frame_params) {
        Ok(inputs) => {
            let c = shade(&Vec2::new(u, v), &FrameContext::new(inputs));
            vec![c.r, c.g, c.b, 1.0]
        }
        Err(e) => {
            error!("frame rejected: {e}");
            Vec::new()
        }
    }
}
