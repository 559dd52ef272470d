//! Shading engine: frame types, fixed constants, lens stage, the per-pixel
//! shading function and frame rasterization.

pub mod constants;
pub mod lens;
pub mod raster;
pub mod shader;
pub mod types;
