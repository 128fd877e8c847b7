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
use core::ops::{Add, Mul, Sub};

/// Saturating addition by value.
///
/// Clamps the result at `MAX` instead of wrapping around to zero.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// # use wideint_core::Uint128;
///
/// assert_eq!(Uint128::MAX.saturating_add_val(Uint128::ONE), Uint128::MAX);
/// assert_eq!(Uint128::ONE.saturating_add_val(Uint128::ONE), Uint128::from(2u64));
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value.
///
/// Clamps the result at zero instead of wrapping around to `MAX`.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::saturating_arithmetic::SaturatingSubVal;
/// # use wideint_core::Uint256;
///
/// assert_eq!(Uint256::ONE.saturating_sub_val(Uint256::MAX), Uint256::ZERO);
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::num::ops::saturating_arithmetic::SaturatingMulVal;
/// # use wideint_core::Uint256;
///
/// let big = Uint256::ONE << 200;
/// assert_eq!(big.saturating_mul_val(big), Uint256::MAX);
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! saturating_impl_wide {
    ($t:ident, $module:ident) => {
        impl SaturatingAddVal for $t {
            #[inline]
            fn saturating_add_val(self, v: $t) -> $t {
                match $module::add(self, v, false) {
                    (sum, false) => sum,
                    (_, true) => <$t>::MAX,
                }
            }
        }

        impl SaturatingSubVal for $t {
            #[inline]
            fn saturating_sub_val(self, v: $t) -> $t {
                match $module::sub(self, v, false) {
                    (diff, false) => diff,
                    (_, true) => <$t>::ZERO,
                }
            }
        }

        impl SaturatingMulVal for $t {
            #[inline]
            fn saturating_mul_val(self, v: $t) -> $t {
                let (hi, lo) = $module::mul(self, v);
                if hi.is_zero() { lo } else { <$t>::MAX }
            }
        }
    };
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u64, saturating_add);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u64, saturating_sub);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u64, saturating_mul);

saturating_impl_wide!(Uint128, uint128);
saturating_impl_wide!(Uint256, uint256);
