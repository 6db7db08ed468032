// tests/indexing_tests.rs

use xs_healpix::*; // Import all public items from the xs_healpix crate

// Reference outputs of a HEALPix nested implementation for the same inputs.
const NSIDES: [u64; 10] = [1, 2, 4, 16, 64, 256, 1024, 4096, 32768, 1048576];

// Pixels containing (theta, phi) = (PI/2, 0) at each of `NSIDES`.
const EQUATOR_PIXELS: [u64; 10] = [
  4,
  19,
  76,
  1216,
  19456,
  311296,
  4980736,
  79691776,
  5100273664,
  5222680231936,
];

// Colatitude of the centers of `EQUATOR_PIXELS`.
const EQUATOR_CENTER_THETAS: [f64; 10] = [
  1.5707963267948966,
  1.2309594173407747,
  1.4033482475752073,
  1.5291175943723188,
  1.5603794717389192,
  1.5681921571847817,
  1.5701452850822386,
  1.5706335663775113,
  1.5707759817428117,
  1.5707956910120189,
];

// Pixels containing the vector (1, 0, 0) at each of `NSIDES`.
const X_AXIS_PIXELS: [u64; 10] = [
  4,
  17,
  70,
  1130,
  18090,
  289450,
  4631210,
  74099370,
  4742359722,
  4856176356010,
];

// Centers of `X_AXIS_PIXELS` as unit vectors; z is 0 for all of them.
const X_AXIS_CENTER_X: [f64; 10] = [
  1.0,
  0.9238795325112867,
  0.9807852804032304,
  0.9987954562051724,
  0.9999247018391445,
  0.9999952938095762,
  0.9999997058628822,
  0.9999999816164293,
  0.9999999997127567,
  0.9999999999997194,
];
const X_AXIS_CENTER_Y: [f64; 10] = [
  0.0,
  0.3826834323650898,
  0.19509032201612825,
  0.049067674327418015,
  0.012271538285719925,
  0.003067956762965976,
  0.0007669903187427045,
  0.0001917475973107033,
  2.396844980841822e-05,
  7.490140565847157e-07,
];

const EPS: f64 = 1e-8;

#[test]
fn test_ang_to_pix_nest_reference() {
  let p = Pointing::new(std::f64::consts::FRAC_PI_2, 0.0);
  for (nside, expected) in NSIDES.iter().zip(EQUATOR_PIXELS) {
    match ang_to_pix_nest(*nside, &p) {
      Ok(pix) => assert_eq!(pix, NestedIndex(expected), "nside {nside}"),
      Err(e) => panic!("ang_to_pix_nest failed for nside {nside}: {e:?}"),
    }
  }
}

#[test]
fn test_pix_to_ang_nest_reference() {
  for ((nside, pix), theta) in NSIDES.iter().zip(EQUATOR_PIXELS).zip(EQUATOR_CENTER_THETAS) {
    let center = pix_to_ang_nest(*nside, NestedIndex(pix)).unwrap();
    assert!(
      (center.theta - theta).abs() < EPS,
      "theta for nside {nside}: expected {theta}, got {}",
      center.theta
    );
    assert!(center.phi.abs() < EPS, "phi for nside {nside}: {}", center.phi);
  }
}

#[test]
fn test_vec_to_pix_nest_reference() {
  let v = Vec3d::new(1.0, 0.0, 0.0);
  for (nside, expected) in NSIDES.iter().zip(X_AXIS_PIXELS) {
    assert_eq!(vec_to_pix_nest(*nside, &v), Ok(NestedIndex(expected)), "nside {nside}");
  }
}

#[test]
fn test_pix_to_vec_nest_reference() {
  for (i, (nside, pix)) in NSIDES.iter().zip(X_AXIS_PIXELS).enumerate() {
    let v = pix_to_vec_nest(*nside, NestedIndex(pix)).unwrap();
    assert!(
      (v.x - X_AXIS_CENTER_X[i]).abs() < EPS && (v.y - X_AXIS_CENTER_Y[i]).abs() < EPS && v.z.abs() < EPS,
      "center of pixel {pix} at nside {nside}: {v:?}"
    );
  }
}

#[test]
fn test_npix_to_nside_reference() {
  assert_eq!(npix_to_nside(786432), Ok(256));
  assert_eq!(nside_to_npix(256), 786432);
  assert_eq!(npix_to_nside(100), Err(HealpixError::PixelCountDomain));
}

#[test]
fn test_vec_ang_reference() {
  let cases = [
    (Vec3d::new(1.0, 0.0, 0.0), Pointing::new(1.57079633, 0.0)),
    (Vec3d::new(0.0, 1.0, 0.0), Pointing::new(1.57079633, 1.57079633)),
    (Vec3d::new(0.0, 0.0, 1.0), Pointing::new(0.0, 0.0)),
  ];
  for (v, p) in cases {
    let got = vec_to_ang(&v);
    assert!((got.theta - p.theta).abs() < EPS && (got.phi - p.phi).abs() < EPS, "{v:?} -> {got:?}");
    let back = ang_to_vec(&p);
    assert!(
      (back.x - v.x).abs() < EPS && (back.y - v.y).abs() < EPS && (back.z - v.z).abs() < EPS,
      "{p:?} -> {back:?}"
    );
  }
}

#[test]
fn test_degree_input() {
  // Colatitude 60 degrees (z = 0.5) on the prime meridian is in the equatorial band.
  let p = Pointing::new(degs_to_rads(60.0), 0.0);
  let pix = ang_to_pix_nest(1, &p).unwrap();
  assert_eq!(get_face(1, pix), Ok(4));
  // Colatitude 45 degrees (z ~ 0.707) is above the band, in face 0.
  let p = Pointing::new(degs_to_rads(45.0), 0.0);
  assert_eq!(ang_to_pix_nest(1, &p), Ok(NestedIndex(0)));
  let p = Pointing::new(degs_to_rads(20.0), degs_to_rads(45.0));
  assert_eq!(ang_to_pix_nest(1, &p), Ok(NestedIndex(0)), "north cap, first quadrant");
}

#[test]
fn test_invalid_inputs() {
  let p = Pointing::new(1.0, 1.0);
  assert_eq!(ang_to_pix_nest(0, &p), Err(HealpixError::NsideDomain));
  assert_eq!(ang_to_pix_nest(MAX_NSIDE * 2, &p), Err(HealpixError::NsideDomain));
  assert_eq!(
    ang_to_pix_nest(8, &Pointing::new(std::f64::consts::PI + 0.1, 0.0)),
    Err(HealpixError::ThetaDomain)
  );
  assert_eq!(
    ang_to_pix_nest(8, &Pointing::new(0.5, f64::NEG_INFINITY)),
    Err(HealpixError::PhiDomain)
  );
  assert_eq!(
    vec_to_pix_nest(8, &Vec3d::new(f64::INFINITY, 0.0, 0.0)),
    Err(HealpixError::VectorDomain)
  );
  assert_eq!(pix_to_ang_nest(8, NestedIndex(768)), Err(HealpixError::PixelDomain));
  assert_eq!(pix_to_vec_nest(8, NestedIndex(u64::MAX)), Err(HealpixError::PixelDomain));
}
