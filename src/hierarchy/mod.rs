// src/hierarchy/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod parent_child;

pub use parent_child::{
  child_pos_to_pixel, pixel_to_child_pos, pixel_to_children, pixel_to_children_size, pixel_to_parent,
};
