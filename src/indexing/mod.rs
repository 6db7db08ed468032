// src/indexing/mod.rs

pub mod from_nest;
pub mod to_nest;

// Re-export public functions from submodules for easier access
pub use from_nest::{pix_to_ang_nest, pix_to_vec_nest};
pub use to_nest::{ang_to_pix_nest, vec_to_pix_nest};
