//! Bitsliced GF(2^8) arithmetic over 32 lanes.
//!
//! A [`Bitsliced`] value holds 32 field elements transposed into eight `u32` bit planes:
//! bit `l` of plane `k` is bit `k` of lane `l`. Every operation below acts on all 32 lanes
//! with a fixed sequence of word-wide AND/XOR instructions, so timing is independent of the
//! lane contents. Same field as [`super::gf256`] (0x11B), so results agree byte for byte.

#![forbid(unsafe_code)]

/// Number of lanes processed per bitsliced word.
pub const LANES: usize = 32;

/// 32 GF(2^8) elements in bit-plane form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bitsliced(pub [u32; 8]);

impl Bitsliced {
    pub const ZERO: Bitsliced = Bitsliced([0; 8]);
    /// Every lane set to 1.
    pub const ONE: Bitsliced = Bitsliced([!0, 0, 0, 0, 0, 0, 0, 0]);

    /// Transposes 32 bytes into bit planes.
    pub fn from_bytes(bytes: &[u8; LANES]) -> Self {
        let mut planes = [0u32; 8];
        for (lane, &byte) in bytes.iter().enumerate() {
            for (k, plane) in planes.iter_mut().enumerate() {
                *plane |= (((byte >> k) & 1) as u32) << lane;
            }
        }
        Bitsliced(planes)
    }

    /// Inverse of [`Bitsliced::from_bytes`].
    pub fn to_bytes(&self) -> [u8; LANES] {
        let mut bytes = [0u8; LANES];
        for (lane, byte) in bytes.iter_mut().enumerate() {
            for (k, plane) in self.0.iter().enumerate() {
                *byte |= (((plane >> lane) & 1) as u8) << k;
            }
        }
        bytes
    }

    /// Broadcasts one element to all 32 lanes.
    pub fn splat(value: u8) -> Self {
        let mut planes = [0u32; 8];
        for (k, plane) in planes.iter_mut().enumerate() {
            *plane = (((value >> k) & 1) as u32).wrapping_neg();
        }
        Bitsliced(planes)
    }

    pub fn add(&self, rhs: &Self) -> Self {
        let mut planes = self.0;
        for (p, r) in planes.iter_mut().zip(rhs.0.iter()) {
            *p ^= r;
        }
        Bitsliced(planes)
    }

    /// Lane-wise multiplication modulo 0x11B.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut a = self.0;
        let mut r = [0u32; 8];

        for &b in rhs.0.iter() {
            for k in 0..8 {
                r[k] ^= a[k] & b;
            }

            // a *= x; the carry out of bit 7 folds back in as 0x1B (bits 0, 1, 3, 4)
            let carry = a[7];
            a[7] = a[6];
            a[6] = a[5];
            a[5] = a[4];
            a[4] = a[3] ^ carry;
            a[3] = a[2] ^ carry;
            a[2] = a[1];
            a[1] = a[0] ^ carry;
            a[0] = carry;
        }

        Bitsliced(r)
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Lane-wise inverse a^254; zero lanes stay zero.
    pub fn inv(&self) -> Self {
        // 254 = 2 + 4 + 8 + 16 + 32 + 64 + 128
        let mut power = *self;
        let mut result = Bitsliced::ONE;
        for _ in 1..8 {
            power = power.square();
            result = result.mul(&power);
        }
        result
    }

    /// Per lane: `on_true` where the `mask` bit is set, `self` elsewhere.
    pub fn select(&self, mask: u32, on_true: &Self) -> Self {
        let mut planes = [0u32; 8];
        for (k, plane) in planes.iter_mut().enumerate() {
            *plane = (self.0[k] & !mask) | (on_true.0[k] & mask);
        }
        Bitsliced(planes)
    }

    /// Bit `l` is set iff lane `l` is nonzero.
    pub fn nonzero_lanes(&self) -> u32 {
        self.0.iter().fold(0, |acc, plane| acc | plane)
    }
}
