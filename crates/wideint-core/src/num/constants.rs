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

use crate::{uint128::Uint128, uint256::Uint256};

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing 1.
pub trait One {
    /// The constant representing 1 for the implementing type.
    const ONE: Self;
}

/// A trait for unsigned integer types that have a largest representable value.
pub trait Max {
    /// The constant representing `2^N - 1` for an `N`-bit implementing type.
    const MAX: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_constants_for {
    ($t:ty, $zero:expr, $one:expr, $max:expr) => {
        impl_const_for!(Zero, ZERO, $zero, $t);
        impl_const_for!(One, ONE, $one, $t);
        impl_const_for!(Max, MAX, $max, $t);
    };
}

impl_constants_for!(u64, 0, 1, u64::MAX);
impl_constants_for!(Uint128, Uint128::ZERO, Uint128::ONE, Uint128::MAX);
impl_constants_for!(Uint256, Uint256::ZERO, Uint256::ONE, Uint256::MAX);
