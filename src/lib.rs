//! Point-in-polygon testing with the even-odd crossing number rule (PNPOLY),
//! plus a C ABI export for numerical hosts and a small point filter.

pub mod bounds;
pub mod classify;
pub mod ffi;
pub mod filter;
pub mod format;
pub mod poly;

pub use poly::{pnpoly, winding_number, Point};
