use xs_healpix::{
  ang_to_pix_nest, degs_to_rads, get_face, nest_to_face_xy, nside_to_npix, nside_to_order, pix_to_ang_nest,
  pix_to_vec_nest, rads_to_degs, vec_to_pix_nest, HealpixError, NestedIndex, Pointing, Vec3d,
};

fn main() -> Result<(), HealpixError> {
  println!("--- Basic HEALPix Nested Indexing Example ---");

  // 1. Define a pointing (colatitude / longitude, given here in degrees)
  let theta_deg = 52.2;
  let phi_deg = 237.6;
  let point = Pointing::new(degs_to_rads(theta_deg), degs_to_rads(phi_deg));
  println!("Original Point: theta {:.6} deg, phi {:.6} deg", theta_deg, phi_deg);

  // 2. Find the pixel containing this point at nside 1024
  let nside = 1024;
  let pix: NestedIndex = ang_to_pix_nest(nside, &point)?;
  println!(
    "Pixel at nside {} (order {}, {} pixels): {}",
    nside,
    nside_to_order(nside)?,
    nside_to_npix(nside),
    pix.0
  );

  // 3. Where the pixel sits inside its base face
  let fxy = nest_to_face_xy(nside, pix)?;
  println!("Base face: {} (ix {}, iy {})", get_face(nside, pix)?, fxy.ix, fxy.iy);

  // 4. Get the center of the pixel
  let center = pix_to_ang_nest(nside, pix)?;
  println!(
    "Pixel Center: theta {:.6} deg, phi {:.6} deg",
    rads_to_degs(center.theta),
    rads_to_degs(center.phi)
  );
  let v = pix_to_vec_nest(nside, pix)?;
  println!("Pixel Center Vector: ({:.6}, {:.6}, {:.6})", v.x, v.y, v.z);

  // 5. The same direction as an unnormalized vector finds the same pixel
  let scaled = Vec3d::new(v.x * 10.0, v.y * 10.0, v.z * 10.0);
  println!("Pixel from scaled center vector: {}", vec_to_pix_nest(nside, &scaled)?.0);

  // 6. Invalid input is reported as an error code
  match ang_to_pix_nest(1000, &point) {
    Ok(p) => println!("Unexpected pixel {}", p.0),
    Err(e) => println!("nside 1000 rejected: {} (code {})", e, e as u32),
  }

  Ok(())
}
