//! Numeric helpers: scalar built-ins, 2D vectors, hash and value noise.

pub mod noise;
pub mod utils;
pub mod vec2;
