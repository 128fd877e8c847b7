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

use crate::{uint128, uint128::Uint128, uint256, uint256::Uint256};
use core::ops::{Add, Div, Mul, Rem, Shl, Shr, Sub};

/// Checked addition by value.
///
/// The `+` operator on the wide integers wraps; this trait reports the
/// carry out of the top bit as `None` instead.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::checked_arithmetic::CheckedAddVal;
/// # use wideint_core::Uint128;
///
/// assert_eq!(Uint128::MAX.checked_add_val(Uint128::ONE), None);
/// assert_eq!(Uint128::ONE.checked_add_val(Uint128::ONE), Some(Uint128::from(2u64)));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::checked_arithmetic::CheckedSubVal;
/// # use wideint_core::Uint256;
///
/// assert_eq!(Uint256::ZERO.checked_sub_val(Uint256::ONE), None);
/// assert_eq!(Uint256::ONE.checked_sub_val(Uint256::ONE), Some(Uint256::ZERO));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
///
/// The product overflows exactly when the upper half of the full
/// double-width product is non-zero.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::checked_arithmetic::CheckedMulVal;
/// # use wideint_core::Uint128;
///
/// let two = Uint128::from(2u64);
/// assert_eq!(Uint128::MAX.checked_mul_val(two), None);
/// assert_eq!(two.checked_mul_val(two), Some(Uint128::from(4u64)));
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked division by value.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::checked_arithmetic::CheckedDivVal;
/// # use wideint_core::Uint128;
///
/// assert_eq!(Uint128::MAX.checked_div_val(Uint128::ZERO), None);
/// assert_eq!(Uint128::MAX.checked_div_val(Uint128::MAX), Some(Uint128::ONE));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` if division by zero occurs.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// Checked remainder by value.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::checked_arithmetic::CheckedRemVal;
/// # use wideint_core::Uint256;
///
/// assert_eq!(Uint256::MAX.checked_rem_val(Uint256::ZERO), None);
/// assert_eq!(Uint256::MAX.checked_rem_val(Uint256::MAX), Some(Uint256::ZERO));
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs checked remainder by value, returning `None` if division by zero occurs.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

/// Checked left shift by value.
///
/// Returns `None` if `rhs` is at least the bit width, matching the
/// primitive `checked_shl`. Bits shifted out of the top are not an error.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::checked_arithmetic::CheckedShlVal;
/// # use wideint_core::Uint128;
///
/// assert_eq!(Uint128::ONE.checked_shl_val(128), None);
/// assert_eq!(Uint128::ONE.checked_shl_val(127), Some(Uint128 { lo: 0, hi: 1 << 63 }));
/// ```
pub trait CheckedShlVal: Sized + Shl<u32, Output = Self> {
    /// Performs checked left shift by value, returning `None` if `rhs` is too large.
    fn checked_shl_val(self, rhs: u32) -> Option<Self>;
}

/// Checked right shift by value.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::checked_arithmetic::CheckedShrVal;
/// # use wideint_core::Uint256;
///
/// assert_eq!(Uint256::MAX.checked_shr_val(256), None);
/// assert_eq!(Uint256::MAX.checked_shr_val(255), Some(Uint256::ONE));
/// ```
pub trait CheckedShrVal: Sized + Shr<u32, Output = Self> {
    /// Performs checked right shift by value, returning `None` if `rhs` is too large.
    fn checked_shr_val(self, rhs: u32) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! checked_shift_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $shift:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, rhs: u32) -> Option<$t> {
                if rhs >= <$t>::BITS {
                    return None;
                }
                Some(<$t>::$shift(self, rhs))
            }
        }
    };
}

macro_rules! checked_impl_wide {
    ($t:ident, $module:ident) => {
        impl CheckedAddVal for $t {
            #[inline]
            fn checked_add_val(self, v: $t) -> Option<$t> {
                match $module::add(self, v, false) {
                    (sum, false) => Some(sum),
                    (_, true) => None,
                }
            }
        }

        impl CheckedSubVal for $t {
            #[inline]
            fn checked_sub_val(self, v: $t) -> Option<$t> {
                match $module::sub(self, v, false) {
                    (diff, false) => Some(diff),
                    (_, true) => None,
                }
            }
        }

        impl CheckedMulVal for $t {
            #[inline]
            fn checked_mul_val(self, v: $t) -> Option<$t> {
                let (hi, lo) = $module::mul(self, v);
                if hi.is_zero() { Some(lo) } else { None }
            }
        }

        checked_impl_val!(CheckedDivVal, checked_div_val, $t, checked_div);
        checked_impl_val!(CheckedRemVal, checked_rem_val, $t, checked_rem);
        checked_shift_impl_val!(CheckedShlVal, checked_shl_val, $t, shl);
        checked_shift_impl_val!(CheckedShrVal, checked_shr_val, $t, shr);
    };
}

checked_impl_val!(CheckedAddVal, checked_add_val, u64, checked_add);
checked_impl_val!(CheckedSubVal, checked_sub_val, u64, checked_sub);
checked_impl_val!(CheckedMulVal, checked_mul_val, u64, checked_mul);
checked_impl_val!(CheckedDivVal, checked_div_val, u64, checked_div);
checked_impl_val!(CheckedRemVal, checked_rem_val, u64, checked_rem);

impl CheckedShlVal for u64 {
    #[inline(always)]
    fn checked_shl_val(self, rhs: u32) -> Option<u64> {
        self.checked_shl(rhs)
    }
}

impl CheckedShrVal for u64 {
    #[inline(always)]
    fn checked_shr_val(self, rhs: u32) -> Option<u64> {
        self.checked_shr(rhs)
    }
}

checked_impl_wide!(Uint128, uint128);
checked_impl_wide!(Uint256, uint256);
