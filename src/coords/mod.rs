// src/coords/mod.rs

pub mod face_xy;
