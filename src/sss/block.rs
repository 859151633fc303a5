//! Fixed-width blocks for the bitsliced backend.
//!
//! A [`Block`] carries up to [`BLOCK_LEN`] bytes padded with trailing zeros, plus the
//! length the caller actually supplied. Inputs longer than the block are rejected at
//! construction instead of being truncated.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::field::bitslice::{Bitsliced, LANES};
use crate::sss::InterpolationError;

/// Native width of the bitsliced backend, in bytes.
pub const BLOCK_LEN: usize = LANES;

/// Zero-padded y-vector of at most [`BLOCK_LEN`] bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Block {
    bytes: [u8; BLOCK_LEN],
    #[zeroize(skip)]
    len: usize,
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("len", &self.len)
            .field("bytes", &"***SENSITIVE***")
            .finish()
    }
}

impl Block {
    /// Copies `data` into a new zero-padded block.
    ///
    /// # Errors
    /// * `VectorTooLong` if `data` exceeds [`BLOCK_LEN`].
    pub fn from_slice(data: &[u8]) -> Result<Self, InterpolationError> {
        check_len(data.len())?;
        let mut bytes = [0u8; BLOCK_LEN];
        bytes[..data.len()].copy_from_slice(data);
        Ok(Self {
            bytes,
            len: data.len(),
        })
    }

    /// The caller-supplied bytes, without padding.
    #[cfg(test)]
    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The full padded block.
    pub(crate) fn padded(&self) -> &[u8; BLOCK_LEN] {
        &self.bytes
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn to_bitsliced(&self) -> Bitsliced {
        Bitsliced::from_bytes(self.padded())
    }
}

/// Rejects lengths the block cannot hold.
pub fn check_len(len: usize) -> Result<(), InterpolationError> {
    if len > BLOCK_LEN {
        return Err(InterpolationError::VectorTooLong {
            len,
            max: BLOCK_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        let block = Block::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(block.len(), 3);
        assert_eq!(block.as_slice(), &[1, 2, 3]);
        assert_eq!(&block.padded()[..3], &[1, 2, 3]);
        assert!(block.padded()[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bounds() {
        assert!(Block::from_slice(&[]).unwrap().is_empty());
        assert_eq!(Block::from_slice(&[7u8; BLOCK_LEN]).unwrap().len(), BLOCK_LEN);
        assert_eq!(
            Block::from_slice(&[7u8; BLOCK_LEN + 1]),
            Err(InterpolationError::VectorTooLong { len: 33, max: 32 })
        );
    }

    #[test]
    fn test_debug_redaction() {
        let block = Block::from_slice(&[0xFF; 4]).unwrap();
        let debug_str = alloc::format!("{:?}", block);
        assert!(debug_str.contains("len: 4"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("255"));
    }
}
