// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Byte Conversion
//!
//! Little- and big-endian encodings of `Uint128` (16 bytes) and `Uint256`
//! (32 bytes). The array forms are infallible. The slice forms accept any
//! buffer at least as long as the encoding, touch only its leading bytes,
//! and report a short buffer as [`BufferTooShortError`].
//!
//! ```rust
//! # use wideint_core::Uint128;
//!
//! let x = Uint128 { lo: 0x0807_0605_0403_0201, hi: 0x100f_0e0d_0c0b_0a09 };
//! let counting: [u8; 16] = core::array::from_fn(|i| i as u8 + 1);
//! assert_eq!(x.to_le_bytes(), counting);
//! assert_eq!(Uint128::from_be_bytes(x.to_be_bytes()), x);
//! ```

use crate::{error::BufferTooShortError, uint128::Uint128, uint256::Uint256};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

#[inline]
fn check_len(buf: &[u8], needed: usize) -> Result<(), BufferTooShortError> {
    if buf.len() < needed {
        return Err(BufferTooShortError {
            needed,
            actual: buf.len(),
        });
    }
    Ok(())
}

impl Uint128 {
    /// The size of the byte encoding.
    pub const BYTES: usize = 16;

    /// Returns the little-endian encoding; byte 0 is the least significant.
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        LittleEndian::write_u64_into(&self.to_limbs(), &mut out);
        out
    }

    /// Returns the big-endian encoding; byte 0 is the most significant.
    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        BigEndian::write_u64(&mut out[..8], self.hi);
        BigEndian::write_u64(&mut out[8..], self.lo);
        out
    }

    /// Decodes a little-endian encoding.
    pub fn from_le_bytes(bytes: [u8; 16]) -> Uint128 {
        Uint128 {
            lo: LittleEndian::read_u64(&bytes[..8]),
            hi: LittleEndian::read_u64(&bytes[8..]),
        }
    }

    /// Decodes a big-endian encoding.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Uint128 {
        Uint128 {
            lo: BigEndian::read_u64(&bytes[8..]),
            hi: BigEndian::read_u64(&bytes[..8]),
        }
    }

    /// Writes the little-endian encoding into the first 16 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 16 bytes.
    pub fn store_le(self, buf: &mut [u8]) -> Result<(), BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        buf[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
        Ok(())
    }

    /// Writes the big-endian encoding into the first 16 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 16 bytes.
    pub fn store_be(self, buf: &mut [u8]) -> Result<(), BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        buf[..Self::BYTES].copy_from_slice(&self.to_be_bytes());
        Ok(())
    }

    /// Reads a little-endian value from the first 16 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 16 bytes.
    pub fn load_le(buf: &[u8]) -> Result<Uint128, BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        Ok(Uint128 {
            lo: LittleEndian::read_u64(&buf[..8]),
            hi: LittleEndian::read_u64(&buf[8..16]),
        })
    }

    /// Reads a big-endian value from the first 16 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 16 bytes.
    pub fn load_be(buf: &[u8]) -> Result<Uint128, BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        Ok(Uint128 {
            lo: BigEndian::read_u64(&buf[8..16]),
            hi: BigEndian::read_u64(&buf[..8]),
        })
    }
}

impl Uint256 {
    /// The size of the byte encoding.
    pub const BYTES: usize = 32;

    /// Returns the little-endian encoding.
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        LittleEndian::write_u64_into(&self.to_limbs(), &mut out);
        out
    }

    /// Returns the big-endian encoding.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut limbs = self.to_limbs();
        limbs.reverse();
        let mut out = [0u8; 32];
        BigEndian::write_u64_into(&limbs, &mut out);
        out
    }

    /// Decodes a little-endian encoding.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Uint256 {
        let mut limbs = [0u64; 4];
        LittleEndian::read_u64_into(&bytes, &mut limbs);
        Uint256::from_limbs(limbs)
    }

    /// Decodes a big-endian encoding.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Uint256 {
        let mut limbs = [0u64; 4];
        BigEndian::read_u64_into(&bytes, &mut limbs);
        limbs.reverse();
        Uint256::from_limbs(limbs)
    }

    /// Writes the little-endian encoding into the first 32 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 32 bytes.
    pub fn store_le(self, buf: &mut [u8]) -> Result<(), BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        buf[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
        Ok(())
    }

    /// Writes the big-endian encoding into the first 32 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 32 bytes.
    pub fn store_be(self, buf: &mut [u8]) -> Result<(), BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        buf[..Self::BYTES].copy_from_slice(&self.to_be_bytes());
        Ok(())
    }

    /// Reads a little-endian value from the first 32 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 32 bytes.
    pub fn load_le(buf: &[u8]) -> Result<Uint256, BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        Ok(Uint256 {
            lo: Uint128::load_le(&buf[..16])?,
            hi: Uint128::load_le(&buf[16..32])?,
        })
    }

    /// Reads a big-endian value from the first 32 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooShortError`] if `buf` has fewer than 32 bytes.
    pub fn load_be(buf: &[u8]) -> Result<Uint256, BufferTooShortError> {
        check_len(buf, Self::BYTES)?;
        Ok(Uint256 {
            lo: Uint128::load_be(&buf[16..32])?,
            hi: Uint128::load_be(&buf[..16])?,
        })
    }
}
