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

//! Carry-propagating primitives.
//!
//! Multi-limb arithmetic is built from four operations on a single limb:
//! addition with a carry in and out, subtraction with a borrow in and out,
//! the full double-width product, and division of a double-width dividend
//! by a single-width divisor. The traits in this module give those four
//! operations one shape for every width, so `Uint256` is written against
//! `Uint128` exactly the way `Uint128` is written against `u64`.
//!
//! Carries and borrows are `bool`: the value is always exactly 0 or 1.

use crate::{error::ArithmeticError, uint128, uint128::Uint128, uint256, uint256::Uint256};

/// Addition with a carry bit.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::carrying::CarryingAdd;
///
/// assert_eq!(u64::MAX.add_with_carry(0, true), (0, true));
/// assert_eq!(5u64.add_with_carry(7, true), (13, false));
/// ```
pub trait CarryingAdd: Sized {
    /// Returns `self + rhs + carry` truncated to the width of `Self`, and the
    /// carry out of the most significant bit.
    fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool);
}

/// Subtraction with a borrow bit.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::carrying::BorrowingSub;
///
/// assert_eq!(0u64.sub_with_borrow(0, true), (u64::MAX, true));
/// assert_eq!(10u64.sub_with_borrow(3, true), (6, false));
/// ```
pub trait BorrowingSub: Sized {
    /// Returns `self - rhs - borrow` truncated to the width of `Self`, and the
    /// borrow out of the most significant bit.
    fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool);
}

/// Full double-width multiplication.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::carrying::WideningMul;
///
/// assert_eq!(u64::MAX.full_mul(u64::MAX), (u64::MAX - 1, 1));
/// ```
pub trait WideningMul: Sized {
    /// Returns the product `self * rhs` as `(hi, lo)` halves.
    fn full_mul(self, rhs: Self) -> (Self, Self);
}

/// Division of a double-width dividend by a single-width divisor.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::ArithmeticError;
/// # use wideint_core::num::ops::carrying::NarrowingDiv;
///
/// assert_eq!(u64::div_wide(1, 0, 2), Ok((1 << 63, 0)));
/// assert_eq!(u64::div_wide(0, 1, 0), Err(ArithmeticError::DivideByZero));
/// assert_eq!(u64::div_wide(3, 0, 3), Err(ArithmeticError::Overflow));
/// ```
pub trait NarrowingDiv: Sized {
    /// Divides the double-width value `(hi, lo)` by `divisor`, returning
    /// `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero and
    /// [`ArithmeticError::Overflow`] if `divisor <= hi`, since the quotient
    /// would not fit in a single width.
    fn div_wide(hi: Self, lo: Self, divisor: Self) -> Result<(Self, Self), ArithmeticError>;
}

impl CarryingAdd for u64 {
    #[inline(always)]
    fn add_with_carry(self, rhs: u64, carry: bool) -> (u64, bool) {
        let (sum, c0) = self.overflowing_add(rhs);
        let (sum, c1) = sum.overflowing_add(carry as u64);
        (sum, c0 | c1)
    }
}

impl BorrowingSub for u64 {
    #[inline(always)]
    fn sub_with_borrow(self, rhs: u64, borrow: bool) -> (u64, bool) {
        let (diff, b0) = self.overflowing_sub(rhs);
        let (diff, b1) = diff.overflowing_sub(borrow as u64);
        (diff, b0 | b1)
    }
}

impl WideningMul for u64 {
    #[inline(always)]
    fn full_mul(self, rhs: u64) -> (u64, u64) {
        let product = (self as u128) * (rhs as u128);
        ((product >> 64) as u64, product as u64)
    }
}

impl NarrowingDiv for u64 {
    #[inline(always)]
    fn div_wide(hi: u64, lo: u64, divisor: u64) -> Result<(u64, u64), ArithmeticError> {
        if divisor == 0 {
            return Err(ArithmeticError::DivideByZero);
        }
        if divisor <= hi {
            return Err(ArithmeticError::Overflow);
        }

        let dividend = ((hi as u128) << 64) | (lo as u128);
        let divisor = divisor as u128;
        Ok(((dividend / divisor) as u64, (dividend % divisor) as u64))
    }
}

macro_rules! carrying_impl_wide {
    ($t:ty, $module:ident) => {
        impl CarryingAdd for $t {
            #[inline(always)]
            fn add_with_carry(self, rhs: $t, carry: bool) -> ($t, bool) {
                $module::add(self, rhs, carry)
            }
        }

        impl BorrowingSub for $t {
            #[inline(always)]
            fn sub_with_borrow(self, rhs: $t, borrow: bool) -> ($t, bool) {
                $module::sub(self, rhs, borrow)
            }
        }

        impl WideningMul for $t {
            #[inline(always)]
            fn full_mul(self, rhs: $t) -> ($t, $t) {
                $module::mul(self, rhs)
            }
        }

        impl NarrowingDiv for $t {
            #[inline(always)]
            fn div_wide(hi: $t, lo: $t, divisor: $t) -> Result<($t, $t), ArithmeticError> {
                $module::div(hi, lo, divisor)
            }
        }
    };
}

carrying_impl_wide!(Uint128, uint128);
carrying_impl_wide!(Uint256, uint256);

#[cfg(test)]
mod tests {
    use super::*;

    // Generic two-limb addition, written once against the trait.
    fn add_pair<T: CarryingAdd + Copy>(x: (T, T), y: (T, T)) -> ((T, T), bool) {
        let (lo, carry) = x.1.add_with_carry(y.1, false);
        let (hi, carry) = x.0.add_with_carry(y.0, carry);
        ((hi, lo), carry)
    }

    #[test]
    fn test_u64_add_with_carry() {
        assert_eq!(1u64.add_with_carry(2, false), (3, false));
        assert_eq!(u64::MAX.add_with_carry(1, false), (0, true));
        assert_eq!(u64::MAX.add_with_carry(u64::MAX, true), (u64::MAX, true));
    }

    #[test]
    fn test_u64_sub_with_borrow() {
        assert_eq!(3u64.sub_with_borrow(2, false), (1, false));
        assert_eq!(0u64.sub_with_borrow(1, false), (u64::MAX, true));
        assert_eq!(0u64.sub_with_borrow(u64::MAX, true), (0, true));
    }

    #[test]
    fn test_u64_full_mul() {
        assert_eq!(0u64.full_mul(u64::MAX), (0, 0));
        assert_eq!((1u64 << 63).full_mul(4), (2, 0));
    }

    #[test]
    fn test_u64_div_wide() {
        assert_eq!(u64::div_wide(0, 100, 7), Ok((14, 2)));
        let n = (6u128 << 64) | 5;
        assert_eq!(
            u64::div_wide(6, 5, 7),
            Ok(((n / 7) as u64, (n % 7) as u64))
        );
        assert_eq!(u64::div_wide(7, 0, 7), Err(ArithmeticError::Overflow));
        assert_eq!(u64::div_wide(0, 0, 0), Err(ArithmeticError::DivideByZero));
    }

    #[test]
    fn test_generic_pair_add_across_widths() {
        assert_eq!(add_pair((0u64, u64::MAX), (0, 1)), ((1, 0), false));
        assert_eq!(
            add_pair((Uint128::MAX, Uint128::MAX), (Uint128::ZERO, Uint128::ONE)),
            ((Uint128::ZERO, Uint128::ZERO), true)
        );
    }

    #[test]
    fn test_wide_impls_delegate() {
        assert_eq!(Uint128::MAX.add_with_carry(Uint128::ZERO, true), (Uint128::ZERO, true));
        assert_eq!(Uint256::ZERO.sub_with_borrow(Uint256::ONE, false), (Uint256::MAX, true));
        assert_eq!(
            Uint128::MAX.full_mul(Uint128::MAX),
            (Uint128::MAX - Uint128::ONE, Uint128::ONE)
        );
        assert_eq!(
            Uint256::div_wide(Uint256::ONE, Uint256::ZERO, Uint256::ONE),
            Err(ArithmeticError::Overflow)
        );
    }
}
