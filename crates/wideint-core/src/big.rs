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

//! # Unbounded Integer Bridge
//!
//! Conversions between the fixed-width types and `num-bigint`'s
//! [`BigUint`] / [`BigInt`].
//!
//! Widening into a big integer is always exact. Narrowing comes in two
//! flavours:
//!
//! - `from_biguint_saturating` / `from_bigint_saturating` clamp out-of-range
//!   input (negative to zero, too wide to `MAX`) and return `false` as the
//!   second tuple element when they had to.
//! - `TryFrom<&BigUint>` / `TryFrom<&BigInt>` refuse out-of-range input with
//!   a [`ConversionError`].
//!
//! ```rust
//! # use wideint_core::Uint128;
//! # use num_bigint::BigInt;
//!
//! let (v, exact) = Uint128::from_bigint_saturating(&BigInt::from(-5));
//! assert_eq!((v, exact), (Uint128::ZERO, false));
//!
//! let big = BigInt::from(1u8) << 200;
//! assert_eq!(Uint128::from_bigint_saturating(&big), (Uint128::MAX, false));
//! ```

use crate::{error::ConversionError, uint128::Uint128, uint256::Uint256};
use num_bigint::{BigInt, BigUint, Sign};

macro_rules! big_impl {
    ($t:ident, $bytes:expr) => {
        impl $t {
            /// Returns the value as an unbounded unsigned integer.
            pub fn to_biguint(self) -> BigUint {
                BigUint::from_bytes_le(&self.to_le_bytes())
            }

            /// Returns the value as an unbounded signed integer.
            pub fn to_bigint(self) -> BigInt {
                BigInt::from_biguint(Sign::Plus, self.to_biguint())
            }

            /// Converts an unbounded unsigned integer, clamping values that
            /// do not fit to `MAX`. The flag is `true` if no clamping happened.
            pub fn from_biguint_saturating(v: &BigUint) -> ($t, bool) {
                if v.bits() > u64::from(<$t>::BITS) {
                    log::debug!(
                        "clamping {}-bit value to {}::MAX",
                        v.bits(),
                        stringify!($t)
                    );
                    return (<$t>::MAX, false);
                }

                let mut bytes = [0u8; $bytes];
                let le = v.to_bytes_le();
                bytes[..le.len()].copy_from_slice(&le);
                (<$t>::from_le_bytes(bytes), true)
            }

            /// Converts an unbounded signed integer. Negative values clamp to
            /// zero and values wider than the type clamp to `MAX`; the flag
            /// is `true` only for an exact conversion.
            pub fn from_bigint_saturating(v: &BigInt) -> ($t, bool) {
                if v.sign() == Sign::Minus {
                    log::debug!("clamping negative value to {}::ZERO", stringify!($t));
                    return (<$t>::ZERO, false);
                }
                <$t>::from_biguint_saturating(v.magnitude())
            }

            /// Converts an unbounded signed integer, clamping out-of-range
            /// values like [`Self::from_bigint_saturating`] and discarding
            /// the exactness flag.
            #[inline]
            pub fn from_bigint(v: &BigInt) -> $t {
                <$t>::from_bigint_saturating(v).0
            }
        }

        impl From<$t> for BigUint {
            #[inline]
            fn from(v: $t) -> BigUint {
                v.to_biguint()
            }
        }

        impl From<$t> for BigInt {
            #[inline]
            fn from(v: $t) -> BigInt {
                v.to_bigint()
            }
        }

        impl TryFrom<&BigUint> for $t {
            type Error = ConversionError;

            fn try_from(v: &BigUint) -> Result<$t, ConversionError> {
                match <$t>::from_biguint_saturating(v) {
                    (value, true) => Ok(value),
                    (_, false) => Err(ConversionError::TooLarge {
                        bits: v.bits(),
                        width: <$t>::BITS,
                    }),
                }
            }
        }

        impl TryFrom<&BigInt> for $t {
            type Error = ConversionError;

            fn try_from(v: &BigInt) -> Result<$t, ConversionError> {
                if v.sign() == Sign::Minus {
                    return Err(ConversionError::Negative);
                }
                <$t>::try_from(v.magnitude())
            }
        }
    };
}

big_impl!(Uint128, 16);
big_impl!(Uint256, 32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_biguint_extremes() {
        assert_eq!(Uint128::MAX.to_biguint(), BigUint::from(u128::MAX));
        assert_eq!(Uint128::ZERO.to_biguint(), BigUint::from(0u8));
        assert_eq!(
            Uint256::MAX.to_biguint(),
            (BigUint::from(1u8) << 256u32) - 1u8
        );
        assert_eq!(BigInt::from(Uint256::ONE), BigInt::from(1));
    }

    #[test]
    fn test_saturating_conversion_clamps() {
        let wide = BigUint::from(1u8) << 128u32;
        assert_eq!(Uint128::from_biguint_saturating(&wide), (Uint128::MAX, false));
        assert_eq!(
            Uint256::from_biguint_saturating(&wide),
            (Uint256::ONE << 128, true)
        );
        assert_eq!(
            Uint256::from_bigint_saturating(&BigInt::from(-1)),
            (Uint256::ZERO, false)
        );
        assert_eq!(
            Uint128::from_bigint_saturating(&BigInt::from(u128::MAX)),
            (Uint128::MAX, true)
        );
        assert_eq!(Uint128::from_bigint(&BigInt::from(7)), Uint128::from(7u64));
        assert_eq!(Uint128::from_bigint(&(BigInt::from(1) << 300u32)), Uint128::MAX);
    }

    #[test]
    fn test_try_from_reports_errors() {
        let wide = BigUint::from(1u8) << 256u32;
        assert_eq!(
            Uint256::try_from(&wide),
            Err(ConversionError::TooLarge {
                bits: 257,
                width: 256
            })
        );
        assert_eq!(
            Uint128::try_from(&BigInt::from(-3)),
            Err(ConversionError::Negative)
        );
        let exact = BigUint::from(u64::MAX) * BigUint::from(u64::MAX);
        assert_eq!(
            Uint128::try_from(&exact),
            Ok(Uint128::from(u64::MAX as u128 * u64::MAX as u128))
        );
    }

    #[test]
    fn test_round_trip_through_biguint() {
        let x = Uint256::from_limbs([1, 2, 3, 4]);
        assert_eq!(Uint256::try_from(&x.to_biguint()), Ok(x));
        assert_eq!(Uint256::from_bigint(&x.to_bigint()), x);
    }
}
