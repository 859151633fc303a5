//! Lagrange interpolation for Shamir secret sharing over GF(256).
//!
//! Given `n` points with distinct x-coordinates and equal-length y-vectors, these routines
//! evaluate the implicit degree-`(n-1)` polynomial at any x. Evaluating at the secret index
//! recovers the secret; evaluating at an unused index mints an additional share.
//!
//! # Components
//! - `lagrange`: direct scalar evaluation (`DirectInterpolator`).
//! - `bitsliced`: 32-byte block backend (`BitslicedInterpolator`).
//! - `block`: bounded, zero-padded buffers fed to the block backend.
//! - `share`: share points (x, y-vector) with redacted `Debug` and zeroize-on-drop.
//! - `reconstruct`: secret recovery and share extension on top of an [`Interpolator`].
//!
//! # Security
//! - **No Zero Division**: duplicate coordinates are detected by comparison before any
//!   division and reported as [`InterpolationError::DuplicateCoordinate`].
//! - **No Partial Output**: every basis coefficient is computed before the output buffer
//!   is touched.
//! - **Zeroization**: basis scratch buffers and padded blocks are wiped on drop.

pub mod bitsliced;
pub mod block;
pub mod lagrange;
pub mod reconstruct;
pub mod share;

use alloc::vec::Vec;
use core::fmt;

use zeroize::Zeroizing;

pub use bitsliced::BitslicedInterpolator;
pub use lagrange::DirectInterpolator;

/// Errors for interpolation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationError {
    /// Two supplied x-coordinates are equal. Indicates corrupted or crafted shares.
    DuplicateCoordinate { x: u8 },
    /// No points were supplied.
    NoPoints,
    /// Basis index is not below the point count.
    BasisIndexOutOfRange { index: usize, count: usize },
    /// Point count or y-vector length differs from what the call declared.
    LengthMismatch { expected: usize, found: usize },
    /// Vector does not fit the backend's fixed block width.
    VectorTooLong { len: usize, max: usize },
    /// Requested share index is already taken.
    CoordinateInUse { x: u8 },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::DuplicateCoordinate { x } => {
                write!(f, "Duplicate x-coordinate {}", x)
            }
            InterpolationError::NoPoints => write!(f, "No points to interpolate"),
            InterpolationError::BasisIndexOutOfRange { index, count } => {
                write!(f, "Basis index {} out of range for {} points", index, count)
            }
            InterpolationError::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {}, found {}", expected, found)
            }
            InterpolationError::VectorTooLong { len, max } => {
                write!(f, "Vector of {} bytes exceeds block width {}", len, max)
            }
            InterpolationError::CoordinateInUse { x } => {
                write!(f, "Share index {} is already in use", x)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpolationError {}

/// Polynomial interpolation over GF(256).
///
/// Both implementations satisfy the same contract and produce byte-identical output
/// wherever both accept the input.
pub trait Interpolator: Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Value at `x` of the `m`-th Lagrange basis polynomial over the coordinates `xi`:
    /// the product over `i != m` of `(x - xi[i]) / (xi[m] - xi[i])`.
    ///
    /// # Errors
    /// * `DuplicateCoordinate` if `xi[m]` occurs again in `xi`.
    /// * `NoPoints` / `BasisIndexOutOfRange` on an empty `xi` or `m >= xi.len()`.
    fn basis(&self, xi: &[u8], m: usize, x: u8) -> Result<u8, InterpolationError>;

    /// Longest y-vector the backend accepts, if it has a fixed width.
    fn max_len(&self) -> Option<usize> {
        None
    }

    /// Interpolates the y-vectors `yij` (one per coordinate in `xi`) at `x`, writing
    /// `out.len()` bytes into `out`.
    ///
    /// Returns the number of bytes written. On error `out` is left untouched.
    fn interpolate_into(
        &self,
        xi: &[u8],
        yij: &[&[u8]],
        x: u8,
        out: &mut [u8],
    ) -> Result<usize, InterpolationError>;

    /// Allocating form of [`Interpolator::interpolate_into`] for `yl`-byte vectors.
    ///
    /// `yl` is checked against [`Interpolator::max_len`] and the y-vectors before the
    /// output is allocated.
    fn interpolate(
        &self,
        xi: &[u8],
        yl: usize,
        yij: &[&[u8]],
        x: u8,
    ) -> Result<Zeroizing<Vec<u8>>, InterpolationError> {
        if let Some(max) = self.max_len().filter(|&max| yl > max) {
            return Err(InterpolationError::VectorTooLong { len: yl, max });
        }
        check_shape(xi, yij, yl)?;
        let mut out = Zeroizing::new(alloc::vec![0u8; yl]);
        self.interpolate_into(xi, yij, x, &mut out)?;
        Ok(out)
    }
}

/// Checks the shape of an interpolation request: a non-empty coordinate list, one
/// y-vector per coordinate, and every y-vector exactly `yl` bytes long.
pub(crate) fn check_shape(xi: &[u8], yij: &[&[u8]], yl: usize) -> Result<(), InterpolationError> {
    if xi.is_empty() {
        return Err(InterpolationError::NoPoints);
    }
    if yij.len() != xi.len() {
        return Err(InterpolationError::LengthMismatch {
            expected: xi.len(),
            found: yij.len(),
        });
    }
    if let Some(y) = yij.iter().find(|y| y.len() != yl) {
        return Err(InterpolationError::LengthMismatch {
            expected: yl,
            found: y.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_basis_index(xi: &[u8], m: usize) -> Result<(), InterpolationError> {
    if xi.is_empty() {
        return Err(InterpolationError::NoPoints);
    }
    if m >= xi.len() {
        return Err(InterpolationError::BasisIndexOutOfRange {
            index: m,
            count: xi.len(),
        });
    }
    Ok(())
}
