//! Direct Lagrange interpolation over GF(256).
//!
//! ```text
//!                  n
//!                 ---
//! l_m(x, [xi]) =  | |  (x - xi[i]) / (xi[m] - xi[i])
//!                i != m
//!
//! P(x) = sum_i  l_i(x, [xi]) * y_i
//! ```
//!
//! Subtraction in GF(2^8) is XOR. Each basis value costs O(n) field operations, so a
//! full interpolation costs O(n^2 + n * yl).

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::field::gf256::{div, mult};
use crate::sss::{check_basis_index, check_shape, InterpolationError, Interpolator};

/// Scalar interpolation backend built on the `mult`/`div` field primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectInterpolator;

impl DirectInterpolator {
    pub const NAME: &'static str = "direct";
}

/// Value of the `m`-th basis polynomial at `x`. `m` must index into `xi`.
pub(crate) fn lagrange_basis(xi: &[u8], m: usize, x: u8) -> Result<u8, InterpolationError> {
    let xm = xi[m];
    let mut result: u8 = 1;

    for (i, &xc) in xi.iter().enumerate() {
        if i == m {
            continue;
        }
        if xc == xm {
            log::warn!("Rejecting interpolation: duplicate x-coordinate {}", xm);
            return Err(InterpolationError::DuplicateCoordinate { x: xm });
        }
        // xm ^ xc is nonzero here, so the division is always defined.
        let term = div(x ^ xc, xm ^ xc).ok_or(InterpolationError::DuplicateCoordinate { x: xm })?;
        result = mult(result, term);
    }

    Ok(result)
}

/// Basis values for every point, or the first duplicate-coordinate failure.
pub(crate) fn lagrange_coefficients(
    xi: &[u8],
    x: u8,
) -> Result<Zeroizing<Vec<u8>>, InterpolationError> {
    let mut lags = Zeroizing::new(Vec::with_capacity(xi.len()));
    for m in 0..xi.len() {
        lags.push(lagrange_basis(xi, m, x)?);
    }
    Ok(lags)
}

impl Interpolator for DirectInterpolator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn basis(&self, xi: &[u8], m: usize, x: u8) -> Result<u8, InterpolationError> {
        check_basis_index(xi, m)?;
        lagrange_basis(xi, m, x)
    }

    fn interpolate_into(
        &self,
        xi: &[u8],
        yij: &[&[u8]],
        x: u8,
        out: &mut [u8],
    ) -> Result<usize, InterpolationError> {
        let yl = out.len();
        check_shape(xi, yij, yl)?;
        log::trace!("direct interpolation: {} points, {} bytes", xi.len(), yl);

        let lags = lagrange_coefficients(xi, x)?;

        for (j, byte) in out.iter_mut().enumerate() {
            let mut acc: u8 = 0;
            for (&lag, y) in lags.iter().zip(yij.iter()) {
                // Zero terms contribute nothing; skip the multiply.
                if lag != 0 && y[j] != 0 {
                    acc ^= mult(lag, y[j]);
                }
            }
            *byte = acc;
        }

        Ok(yl)
    }
}
