//! Share points.
//!
//! A share is a point $(x, y)$ on the polynomial hiding the secret, with one y-byte per
//! secret byte.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe the y-vector from memory.
//! - `Debug` implementation redacts the y-vector.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::InterpolationError;

/// One participant's share: an x-coordinate and its y-vector.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharePoint {
    /// The x-coordinate (share index). Public.
    #[zeroize(skip)]
    pub x: u8,

    /// The y-coordinates, one per byte of the secret. Sensitive.
    pub y: Vec<u8>,
}

impl fmt::Debug for SharePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharePoint")
            .field("x", &self.x)
            .field("length", &self.y.len())
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl SharePoint {
    /// Creates a share point. Any index is accepted; which index holds the secret is up
    /// to the caller's configuration.
    pub fn new(x: u8, y: Vec<u8>) -> Self {
        Self { x, y }
    }

    /// Returns a reference to the y-vector.
    pub fn value(&self) -> &[u8] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// Common y-vector length of `points`.
///
/// # Errors
/// * `NoPoints` for an empty slice.
/// * `LengthMismatch` if the y-vectors differ in length.
pub fn share_len(points: &[SharePoint]) -> Result<usize, InterpolationError> {
    let first = points.first().ok_or(InterpolationError::NoPoints)?;
    let len = first.y.len();
    for point in points {
        if point.y.len() != len {
            return Err(InterpolationError::LengthMismatch {
                expected: len,
                found: point.y.len(),
            });
        }
    }
    Ok(len)
}

/// Splits points into the coordinate list and y-vector list the interpolators take.
pub fn coordinates(points: &[SharePoint]) -> (Vec<u8>, Vec<&[u8]>) {
    points.iter().map(|p| (p.x, p.y.as_slice())).unzip()
}
