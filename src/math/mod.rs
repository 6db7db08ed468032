// src/math/mod.rs
#![allow(clippy::module_name_repetitions)] // Common in math modules

pub mod bits;
pub mod extensions;
pub mod vec3d;

pub use bits::{compress_bits, spread_bits};
