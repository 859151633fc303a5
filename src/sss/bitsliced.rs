//! Block backend: interpolation over 32-byte bitsliced blocks.
//!
//! Y-vectors are zero-padded into [`Block`]s and multiplied by their basis coefficients 32
//! bytes at a time. Basis values are computed 32 at a time as well, one basis index per
//! lane: each lane accumulates its own numerator and denominator products and all
//! denominators are inverted together at the end. A lane whose denominator ends up zero
//! had a duplicate coordinate.
//!
//! Output matches [`DirectInterpolator`](super::DirectInterpolator) byte for byte for
//! vectors up to [`BLOCK_LEN`] bytes. Longer vectors are rejected.

use alloc::vec::Vec;
use zeroize::{Zeroize, Zeroizing};

use crate::field::bitslice::{Bitsliced, LANES};
use crate::sss::block::{check_len, Block, BLOCK_LEN};
use crate::sss::{check_basis_index, check_shape, InterpolationError, Interpolator};

/// Interpolation backend working on fixed [`BLOCK_LEN`]-byte blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitslicedInterpolator;

impl BitslicedInterpolator {
    pub const NAME: &'static str = "bitsliced";
}

/// Basis values for indices `base..base + 32` (clipped to `xi.len()`) at `x`, with a mask
/// of the lanes whose coordinate occurs twice.
fn basis_lanes(xi: &[u8], base: usize, x: u8) -> ([u8; LANES], u32) {
    let count = LANES.min(xi.len() - base);
    let valid: u32 = if count == LANES { !0 } else { (1u32 << count) - 1 };

    let mut lane_x = [0u8; LANES];
    lane_x[..count].copy_from_slice(&xi[base..base + count]);
    let xm = Bitsliced::from_bytes(&lane_x);

    let mut num = Bitsliced::ONE;
    let mut den = Bitsliced::ONE;
    for (i, &xc) in xi.iter().enumerate() {
        // A lane's own coordinate and the unused lanes contribute a factor of 1.
        let own = if i >= base && i < base + count { 1u32 << (i - base) } else { 0 };
        let skip = own | !valid;

        let xc_all = Bitsliced::splat(xc);
        num = num.mul(&Bitsliced::splat(x ^ xc).select(skip, &Bitsliced::ONE));
        den = den.mul(&xm.add(&xc_all).select(skip, &Bitsliced::ONE));
    }

    let duplicates = valid & !den.nonzero_lanes();
    let mut basis = num.mul(&den.inv());
    let values = basis.to_bytes();
    basis.0.zeroize();
    num.0.zeroize();
    (values, duplicates)
}

fn duplicate_error(xi: &[u8], base: usize, duplicates: u32) -> InterpolationError {
    let m = base + duplicates.trailing_zeros() as usize;
    log::warn!("Rejecting interpolation: duplicate x-coordinate {}", xi[m]);
    InterpolationError::DuplicateCoordinate { x: xi[m] }
}

/// Basis values for every point, or the lowest-indexed duplicate-coordinate failure.
fn basis_all(xi: &[u8], x: u8) -> Result<Zeroizing<Vec<u8>>, InterpolationError> {
    let mut lags = Zeroizing::new(Vec::with_capacity(xi.len()));
    for base in (0..xi.len()).step_by(LANES) {
        let (mut values, duplicates) = basis_lanes(xi, base, x);
        if duplicates != 0 {
            values.zeroize();
            return Err(duplicate_error(xi, base, duplicates));
        }
        let count = LANES.min(xi.len() - base);
        lags.extend_from_slice(&values[..count]);
        values.zeroize();
    }
    Ok(lags)
}

impl Interpolator for BitslicedInterpolator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn basis(&self, xi: &[u8], m: usize, x: u8) -> Result<u8, InterpolationError> {
        check_basis_index(xi, m)?;
        let base = m - m % LANES;
        let lane = m - base;
        let (values, duplicates) = basis_lanes(xi, base, x);
        if duplicates & (1 << lane) != 0 {
            return Err(duplicate_error(xi, m, 1));
        }
        Ok(values[lane])
    }

    fn max_len(&self) -> Option<usize> {
        Some(BLOCK_LEN)
    }

    fn interpolate_into(
        &self,
        xi: &[u8],
        yij: &[&[u8]],
        x: u8,
        out: &mut [u8],
    ) -> Result<usize, InterpolationError> {
        let yl = out.len();
        check_len(yl)?;
        check_shape(xi, yij, yl)?;
        log::trace!("bitsliced interpolation: {} points, {} bytes", xi.len(), yl);

        let blocks = yij
            .iter()
            .map(|y| Block::from_slice(y))
            .collect::<Result<Vec<Block>, _>>()?;
        let lags = basis_all(xi, x)?;

        let mut acc = Bitsliced::ZERO;
        for (&lag, block) in lags.iter().zip(blocks.iter()) {
            acc = acc.add(&Bitsliced::splat(lag).mul(&block.to_bitsliced()));
        }

        let mut result: [u8; BLOCK_LEN] = acc.to_bytes();
        out.copy_from_slice(&result[..yl]);
        result.zeroize();
        acc.0.zeroize();

        Ok(yl)
    }
}
