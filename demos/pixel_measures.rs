use xs_healpix::{
  iter_face_pixels, order_to_nside, pixel_area_degs2, pixel_area_rads2, pixel_resolution_degs, pix_to_ang_nest,
  rads_to_degs, HealpixError, MAX_ORDER,
};

fn main() -> Result<(), HealpixError> {
  println!("--- HEALPix Pixel Measures Example ---");
  println!("{:>5} {:>10} {:>14} {:>14} {:>12}", "order", "nside", "area (sr)", "area (deg2)", "res (arcmin)");

  for order in (0..=MAX_ORDER).step_by(4) {
    let nside = order_to_nside(order)?;
    println!(
      "{:>5} {:>10} {:>14.6e} {:>14.6e} {:>12.4}",
      order,
      nside,
      pixel_area_rads2(nside)?,
      pixel_area_degs2(nside)?,
      pixel_resolution_degs(nside)? * 60.0
    );
  }

  // Pixel centers of one small face, in index (Morton) order
  let nside = 2;
  println!("Pixel centers of face 5 at nside {}:", nside);
  for pix in iter_face_pixels(nside, 5)? {
    let c = pix_to_ang_nest(nside, pix)?;
    println!(
      "  {:>2}: theta {:>8.3} deg, phi {:>8.3} deg",
      pix.0,
      rads_to_degs(c.theta),
      rads_to_degs(c.phi)
    );
  }

  Ok(())
}
