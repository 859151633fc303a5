//! GF(2^8) arithmetic module.
//!
//! Finite field arithmetic over GF(2^8) with the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B), the field SLIP-39 shares are defined over.
//!
//! # Design Choices
//! - **No Tables by Default**: Multiplication is bit-serial with masks instead of branches, so
//!   no secret-dependent memory access happens. The `gf256-table` feature switches `mult` to
//!   log/antilog tables generated at compile time.
//! - **Checked Division**: `div` returns `None` for a zero divisor. Interpolation never reaches
//!   that path because coordinates are compared for distinctness first.
//!
//! # Usage
//! ```
//! use gf256_interpolate::field::gf256::GF256;
//!
//! let a = GF256(0x57);
//! let b = GF256(0x83);
//! assert_eq!(a + b, GF256(0xD4)); // XOR
//! assert_eq!(a * b, GF256(0xC1)); // mod 0x11B
//! assert_eq!(a.div(a), Some(GF256(1)));
//! ```

#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub};

/// Low byte of the irreducible polynomial (full poly: 0x11B).
const POLY: u8 = 0x1B;

/// The finite field element type, wrapping a u8.
///
/// Keeps field addition (XOR) and field multiplication from being confused with integer
/// arithmetic on raw bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct GF256(pub u8);

impl GF256 {
    /// Additive identity.
    pub const ZERO: GF256 = GF256(0);
    /// Multiplicative identity.
    pub const ONE: GF256 = GF256(1);
}

impl From<u8> for GF256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(gf: GF256) -> u8 {
        gf.0
    }
}

/// GF(2^8) addition: XOR, as the field characteristic is 2.
impl Add for GF256 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Subtraction is identical to addition in characteristic 2.
impl Sub for GF256 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        GF256(self.0 ^ rhs.0)
    }
}

/// GF(2^8) multiplication with reduction modulo 0x11B.
impl Mul for GF256 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        GF256(mult(self.0, rhs.0))
    }
}

impl MulAssign for GF256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl GF256 {
    /// Computes the multiplicative inverse a^{-1} = a^254.
    /// Returns 0 for a=0 (convention; callers that care use [`GF256::div`]).
    ///
    /// Fixed 8 square-and-multiply rounds; the exponent is public so there is no
    /// data-dependent control flow.
    #[inline(always)]
    pub fn inv(self) -> Self {
        let mut result = GF256::ONE;
        let mut base = self;
        let mut exp: u8 = 0xFE; // 254 = -1 mod 255

        for _ in 0..8 {
            let mask = (exp & 1).wrapping_neg();
            let factor = GF256((base.0 & mask) | (1 & !mask));
            result *= factor;
            base *= base;
            exp >>= 1;
        }

        result
    }

    /// Computes self / rhs, returning None on division by zero.
    pub fn div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            None
        } else {
            Some(self * rhs.inv())
        }
    }
}

/// Scalar field multiplication.
///
/// Bit-serial and branch-free unless the `gf256-table` feature is enabled.
#[cfg(not(feature = "gf256-table"))]
#[inline(always)]
pub fn mult(a: u8, b: u8) -> u8 {
    let mut result: u8 = 0;
    let mut aa = a;
    let mut bb = b;

    for _ in 0..8 {
        // result ^= aa if the low bit of bb is set
        result ^= aa & (bb & 1).wrapping_neg();

        // aa *= x, reducing by the polynomial on carry
        let carry = (aa >> 7).wrapping_neg();
        aa = (aa << 1) ^ (POLY & carry);

        bb >>= 1;
    }

    result
}

/// Scalar field multiplication via log/antilog tables.
#[cfg(feature = "gf256-table")]
#[inline(always)]
pub fn mult(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        0
    } else {
        let log_sum = tables::LOG[a as usize] as usize + tables::LOG[b as usize] as usize;
        tables::EXP[log_sum]
    }
}

/// Scalar field division. `None` when `b == 0`.
#[inline(always)]
pub fn div(a: u8, b: u8) -> Option<u8> {
    GF256(a).div(GF256(b)).map(u8::from)
}

#[cfg(feature = "gf256-table")]
mod tables {
    use super::POLY;

    const fn xtime(x: u8) -> u8 {
        (x << 1) ^ (POLY & (x >> 7).wrapping_neg())
    }

    // 3 generates the multiplicative group of GF(2^8)/0x11B.
    const fn mul3(x: u8) -> u8 {
        xtime(x) ^ x
    }

    pub(super) const LOG: [u8; 256] = {
        let mut log = [0u8; 256];
        let mut x: u8 = 1;
        let mut i: usize = 0;
        while i < 255 {
            log[x as usize] = i as u8;
            x = mul3(x);
            i += 1;
        }
        log
    };

    // Doubled so `LOG[a] + LOG[b]` indexes without a reduction mod 255.
    pub(super) const EXP: [u8; 510] = {
        let mut exp = [0u8; 510];
        let mut x: u8 = 1;
        let mut i: usize = 0;
        while i < 255 {
            exp[i] = x;
            exp[i + 255] = x;
            x = mul3(x);
            i += 1;
        }
        exp
    };
}

/// Polynomial evaluation over GF(2^8): sum c_i * x^i using Horner's method.
///
/// `coeffs[0]` is the constant term. An empty slice evaluates to 0.
pub fn poly_eval(coeffs: &[GF256], x: GF256) -> GF256 {
    let mut result = GF256::ZERO;
    for &c in coeffs.iter().rev() {
        result = result * x + c;
    }
    result
}
