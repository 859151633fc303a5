//! C ABI for existing SLIP-39 implementations.
//!
//! Mirrors the classic `int16_t lagrange(...)` / `int16_t interpolate(...)` signatures:
//! a non-negative return is the result, `-1` is failure. Failures cover duplicate
//! coordinates, null pointers, and lengths that do not fit the return type.
//! Both entry points use [`DirectInterpolator`].

use alloc::vec::Vec;
use core::slice;

use crate::sss::{DirectInterpolator, Interpolator};

const FAILURE: i16 = -1;
const EMPTY: &[u8] = &[];

/// Version of the interpolation ABI, `0xMMmmpp`.
#[no_mangle]
pub extern "C" fn gf256_interpolate_version() -> u32 {
    0x010000
}

/// Value at `x` of the `m`-th Lagrange basis polynomial over `n` coordinates.
///
/// # Safety
/// `xi` must point to `n` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn gf256_lagrange(n: u8, m: u8, xi: *const u8, x: u8) -> i16 {
    if xi.is_null() {
        return FAILURE;
    }
    let xi = slice::from_raw_parts(xi, n as usize);
    match DirectInterpolator.basis(xi, m as usize, x) {
        Ok(value) => value as i16,
        Err(_) => FAILURE,
    }
}

/// Interpolates `n` y-vectors of `yl` bytes at `x` into `result`.
///
/// Returns `yl` on success. On failure returns -1 and leaves `result` untouched.
///
/// # Safety
/// `xi` must point to `n` readable bytes, `yij` to `n` pointers each addressing `yl`
/// readable bytes, and `result` to `yl` writable bytes not aliasing any input.
#[no_mangle]
pub unsafe extern "C" fn gf256_interpolate(
    n: u8,
    xi: *const u8,
    yl: u32,
    yij: *const *const u8,
    x: u8,
    result: *mut u8,
) -> i16 {
    let ret = match i16::try_from(yl) {
        Ok(ret) => ret,
        Err(_) => return FAILURE,
    };
    if xi.is_null() || yij.is_null() || (result.is_null() && yl > 0) {
        return FAILURE;
    }

    let yl = yl as usize;
    let xi = slice::from_raw_parts(xi, n as usize);
    let rows = slice::from_raw_parts(yij, n as usize);
    if rows.iter().any(|row| row.is_null() && yl > 0) {
        return FAILURE;
    }
    let ys: Vec<&[u8]> = rows
        .iter()
        .map(|&row| if yl == 0 { EMPTY } else { slice::from_raw_parts(row, yl) })
        .collect();
    let out: &mut [u8] = if yl == 0 { &mut [] } else { slice::from_raw_parts_mut(result, yl) };

    match DirectInterpolator.interpolate_into(xi, &ys, x, out) {
        Ok(_) => ret,
        Err(_) => FAILURE,
    }
}
