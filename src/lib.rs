//! Lagrange interpolation over GF(256) for Shamir secret sharing (SLIP-39).
//!
//! Given share points with distinct x-coordinates, [`sss::Interpolator`] evaluates the
//! implicit polynomial at any x: the secret index to recover the secret, or a fresh index
//! to mint another share. Two interchangeable backends are provided, selected through
//! [`config::InterpolationConfig`].
//!
//! ```
//! use gf256_interpolate::sss::{DirectInterpolator, Interpolator};
//!
//! let y: [&[u8]; 3] = [&[5], &[9], &[13]];
//! let at_zero = DirectInterpolator.interpolate(&[1, 2, 3], 1, &y, 0).unwrap();
//! assert_eq!(&at_zero[..], &[0x01]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod ffi;
pub mod field;
pub mod sss;

pub use config::{Backend, InterpolationConfig};
pub use sss::reconstruct::Recovery;
pub use sss::share::SharePoint;
pub use sss::{BitslicedInterpolator, DirectInterpolator, InterpolationError, Interpolator};
