//! C ABI entry points with the classic PNPOLY parameter shape: vertex count,
//! x column, y column, test x, test y. The result is numeric, `1.0` for inside
//! and `0.0` for outside, so a numerical host can store it as a scalar double.

use crate::poly::{pnpoly as pnpoly_points, Point};

// Largest element count a `&[f64]` can hold.
const MAX_VERTICES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

#[inline]
fn as_scalar(inside: bool) -> f64 {
    if inside { 1.0 } else { 0.0 }
}

/// Column form of the test. Pairs beyond the shorter column are ignored.
pub fn pnpoly_columns(vertx: &[f64], verty: &[f64], testx: f64, testy: f64) -> f64 {
    let vertices: Vec<Point> = vertx.iter().zip(verty).map(|(&x, &y)| Point::new(x, y)).collect();
    as_scalar(pnpoly_points(&vertices, Point::new(testx, testy)))
}

/// # Safety
///
/// When non-null, `vertx` and `verty` must each point to at least `nvert`
/// readable doubles. `nvert` is truncated towards zero; non-positive or
/// non-finite counts, counts past the addressable slice length and null
/// pointers give `0.0`.
#[no_mangle]
pub unsafe extern "C" fn pnpoly(nvert: f64, vertx: *const f64, verty: *const f64, testx: f64, testy: f64) -> f64 {
    if vertx.is_null() || verty.is_null() || !nvert.is_finite() || nvert < 1.0 || nvert >= MAX_VERTICES as f64 {
        return 0.0;
    }
    let n = nvert as usize;
    let xs = std::slice::from_raw_parts(vertx, n);
    let ys = std::slice::from_raw_parts(verty, n);
    pnpoly_columns(xs, ys, testx, testy)
}

#[test]
fn pnpoly_columns_test() {
    let xs = [0.0, 0.0, 1.0, 1.0];
    let ys = [0.0, 1.0, 1.0, 0.0];
    assert_eq!(pnpoly_columns(&xs, &ys, 0.5, 0.5), 1.0);
    assert_eq!(pnpoly_columns(&xs, &ys, 2.0, 2.0), 0.0);
    // Trailing x without a y is ignored, leaving the same triangle
    assert_eq!(pnpoly_columns(&[0.0, 4.0, 0.0, 9.0], &[0.0, 0.0, 4.0], 1.0, 1.0), 1.0);
    assert_eq!(pnpoly_columns(&[], &[], 0.0, 0.0), 0.0);
}

#[test]
fn pnpoly_extern_test() {
    let xs = [0.0, 4.0, 0.0];
    let ys = [0.0, 0.0, 4.0];
    unsafe {
        assert_eq!(pnpoly(3.0, xs.as_ptr(), ys.as_ptr(), 1.0, 1.0), 1.0);
        assert_eq!(pnpoly(3.0, xs.as_ptr(), ys.as_ptr(), 3.0, 3.0), 0.0);
        // Count arrives as a double and is truncated
        assert_eq!(pnpoly(3.9, xs.as_ptr(), ys.as_ptr(), 1.0, 1.0), 1.0);
        assert_eq!(pnpoly(0.0, xs.as_ptr(), ys.as_ptr(), 1.0, 1.0), 0.0);
        assert_eq!(pnpoly(-2.0, xs.as_ptr(), ys.as_ptr(), 1.0, 1.0), 0.0);
        assert_eq!(pnpoly(f64::NAN, xs.as_ptr(), ys.as_ptr(), 1.0, 1.0), 0.0);
        assert_eq!(pnpoly(3.0, std::ptr::null(), ys.as_ptr(), 1.0, 1.0), 0.0);
        // Rejected before any slice is built
        assert_eq!(pnpoly(1e300, xs.as_ptr(), ys.as_ptr(), 1.0, 1.0), 0.0);
        assert_eq!(pnpoly(MAX_VERTICES as f64, xs.as_ptr(), ys.as_ptr(), 1.0, 1.0), 0.0);
    }
}
