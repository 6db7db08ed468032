use xs_healpix::{
  ang_to_pix_nest, child_pos_to_pixel, pixel_to_child_pos, pixel_to_children, pixel_to_children_size, pixel_to_parent,
  HealpixError, Pointing,
};

fn main() -> Result<(), HealpixError> {
  println!("--- HEALPix Pixel Hierarchy Example ---");

  let point = Pointing::new(1.0, 2.5);
  let fine_nside = 1 << 16;
  let fine = ang_to_pix_nest(fine_nside, &point)?;
  println!("Pixel at nside {}: {}", fine_nside, fine.0);

  // Walk up the quad-tree to the base face
  let mut nside = fine_nside;
  while nside > 1 {
    nside >>= 1;
    let parent = pixel_to_parent(fine_nside, fine, nside)?;
    let pos = pixel_to_child_pos(fine_nside, fine, nside)?;
    println!("  nside {:>5}: pixel {:>11}, descendant position {}", nside, parent.0, pos);
  }

  // Walk back down: the children of a coarse pixel are a contiguous range
  let coarse_nside = 4;
  let coarse = pixel_to_parent(fine_nside, fine, coarse_nside)?;
  let child_nside = 16;
  println!(
    "Pixel {} at nside {} has {} children at nside {}:",
    coarse.0,
    coarse_nside,
    pixel_to_children_size(coarse_nside, child_nside)?,
    child_nside
  );
  let children: Vec<u64> = pixel_to_children(coarse_nside, coarse, child_nside)?.map(|p| p.0).collect();
  println!("  {:?}", children);

  let third = child_pos_to_pixel(coarse_nside, coarse, 3, child_nside)?;
  println!("Child at position 3: {}", third.0);

  Ok(())
}
