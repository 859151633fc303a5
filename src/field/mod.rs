//! Field arithmetic over GF(2^8).
//!
//! - `gf256`: scalar elements and the `mult`/`div` primitives used by the direct interpolator.
//! - `bitslice`: 32-lane bitsliced arithmetic used by the block backend.

pub mod bitslice;
pub mod gf256;
