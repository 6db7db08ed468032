#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Every fallible function returns HealpixError
#![allow(clippy::cast_possible_truncation)] // Face and coordinate narrowing is range-checked
#![allow(clippy::cast_precision_loss)] // Pixel counts as f64 for area math
#![allow(clippy::cast_sign_loss)] // Signed lattice arithmetic narrows to u32 coordinates
#![allow(clippy::cast_possible_wrap)] // nside <= 2^29 always fits in i64
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended
#![allow(clippy::unreadable_literal)] // Reference values are clearer unseparated
#![allow(clippy::similar_names)] // jp/jm, ix/iy are standard HEALPix names
#![allow(clippy::wildcard_imports)] // Allow for re-exporting from modules

//! `xs-healpix` is a Rust implementation of HEALPix pixelization in the
//! nested numbering scheme.
//!
//! The sphere is split into 12 base faces, each subdivided into
//! `nside x nside` equal-area pixels. A pixel is addressed by a single
//! [`NestedIndex`] in `[0, 12 * nside^2)`, and the crate converts between
//! those indices, angular positions ([`Pointing`]) and unit vectors
//! ([`Vec3d`]).
//!
//! ```
//! use xs_healpix::{ang_to_pix_nest, pix_to_ang_nest, NestedIndex, Pointing};
//!
//! let equator = Pointing::new(std::f64::consts::FRAC_PI_2, 0.0);
//! assert_eq!(ang_to_pix_nest(2, &equator), Ok(NestedIndex(19)));
//! let center = pix_to_ang_nest(2, NestedIndex(19)).unwrap();
//! assert!((center.theta - (1.0f64 / 3.0).acos()).abs() < 1e-12);
//! ```

// Declare modules
pub mod base_faces;
pub mod constants;
pub mod coords;
pub mod hierarchy;
pub mod indexing;
pub mod iterators;
pub mod math;
pub mod measures;
pub mod nested_index;
pub mod pointing;
pub mod types;

// Re-export key public types and functions for easier use
pub use base_faces::{face_region, is_valid_face, FaceRegion};
pub use constants::{MAX_NSIDE, MAX_ORDER, NUM_BASE_FACES};
pub use types::{FaceXY, HealpixError, NestedIndex, Pointing, Vec3d, ZPhi};

pub use hierarchy::{child_pos_to_pixel, pixel_to_child_pos, pixel_to_children, pixel_to_children_size, pixel_to_parent};
pub use indexing::{ang_to_pix_nest, pix_to_ang_nest, pix_to_vec_nest, vec_to_pix_nest};
pub use iterators::{iter_face_pixels, iter_pixels, IterPixels};
pub use math::{compress_bits, spread_bits};
pub use measures::{pixel_area_degs2, pixel_area_rads2, pixel_resolution_degs, pixel_resolution_rads};
pub use nested_index::inspection::{
  checked_nside_to_npix,
  is_valid_nside,
  is_valid_pixel,
  npix_to_nside,
  nside_to_npix,
  nside_to_order,
  order_to_nside,
};
pub use nested_index::{face_xy_to_nest, get_face, nest_to_face_xy};
pub use pointing::{ang_dist, ang_to_vec, degs_to_rads, rads_to_degs, vec_to_ang};
