// src/hierarchy/parent_child.rs

//! Quad-tree navigation between resolutions.
//!
//! Going from `nside` to `2 * nside` splits every pixel into four, and the
//! nested scheme numbers those four children `4 * pix .. 4 * pix + 4`. Moving
//! `d` orders is therefore a shift by `2 * d` bits.

use crate::iterators::IterPixels;
use crate::nested_index::inspection::{_check_nside, _check_pixel};
use crate::types::{HealpixError, NestedIndex};

/// Number of index bits separating two valid resolutions, `coarse <= fine`.
///
/// Returns `ResMismatch` when `coarse` is finer than `fine`.
fn _level_shift(coarse: u64, fine: u64) -> Result<u32, HealpixError> {
  if coarse > fine {
    tracing::debug!(coarse, fine, "rejected resolution pair: coarse nside is finer");
    return Err(HealpixError::ResMismatch);
  }
  Ok(2 * (fine.trailing_zeros() - coarse.trailing_zeros()))
}

/// Produces the pixel at `parent_nside` containing `pix`.
///
/// # Arguments
/// * `nside` - Resolution of `pix`.
/// * `pix` - The pixel to look up.
/// * `parent_nside` - Coarser (or equal) resolution of the result.
///
/// # Returns
/// `Ok(NestedIndex)` on success; `ResMismatch` if `parent_nside > nside`.
pub fn pixel_to_parent(nside: u64, pix: NestedIndex, parent_nside: u64) -> Result<NestedIndex, HealpixError> {
  _check_pixel(nside, pix)?;
  _check_nside(parent_nside)?;
  let shift = _level_shift(parent_nside, nside)?;
  Ok(NestedIndex(pix.0 >> shift))
}

/// Number of descendants a pixel at `nside` has at `child_nside`:
/// `(child_nside / nside)^2`.
pub fn pixel_to_children_size(nside: u64, child_nside: u64) -> Result<u64, HealpixError> {
  _check_nside(nside)?;
  _check_nside(child_nside)?;
  let shift = _level_shift(nside, child_nside)?;
  Ok(1u64 << shift)
}

/// Iterates over the descendants of `pix` at `child_nside`, in index order.
///
/// When `child_nside == nside` the iterator yields `pix` itself.
pub fn pixel_to_children(nside: u64, pix: NestedIndex, child_nside: u64) -> Result<IterPixels, HealpixError> {
  _check_pixel(nside, pix)?;
  _check_nside(child_nside)?;
  let shift = _level_shift(nside, child_nside)?;
  let start = pix.0 << shift;
  Ok(IterPixels::_new(start, start + (1u64 << shift)))
}

/// Position of `pix` among the descendants of its parent at `parent_nside`.
///
/// Positions follow index order and lie in `[0, (nside / parent_nside)^2)`.
pub fn pixel_to_child_pos(nside: u64, pix: NestedIndex, parent_nside: u64) -> Result<u64, HealpixError> {
  _check_pixel(nside, pix)?;
  _check_nside(parent_nside)?;
  let shift = _level_shift(parent_nside, nside)?;
  Ok(pix.0 & ((1u64 << shift) - 1))
}

/// Returns the descendant of `parent` at `child_nside` found at `child_pos`.
///
/// This is the inverse of [`pixel_to_child_pos`]. A position beyond the
/// number of descendants returns `PixelDomain`.
pub fn child_pos_to_pixel(
  parent_nside: u64,
  parent: NestedIndex,
  child_pos: u64,
  child_nside: u64,
) -> Result<NestedIndex, HealpixError> {
  _check_pixel(parent_nside, parent)?;
  _check_nside(child_nside)?;
  let shift = _level_shift(parent_nside, child_nside)?;
  if child_pos >= 1u64 << shift {
    tracing::debug!(child_pos, parent_nside, child_nside, "rejected child position out of range");
    return Err(HealpixError::PixelDomain);
  }
  Ok(NestedIndex((parent.0 << shift) | child_pos))
}
