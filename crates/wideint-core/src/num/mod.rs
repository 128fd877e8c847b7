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

//! # Numeric Foundations
//!
//! Traits shared by both width tiers. Nothing in here is tied to a specific
//! width: the same trait shapes are implemented for `u64`, `Uint128` and
//! `Uint256`, so the 256-bit kernel can be written against the 128-bit one
//! the same way the 128-bit kernel is written against native words.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Zero`, `One`, `Max`).
//! - `ops`: Carry-propagating primitives plus checked and saturating
//!   by-value arithmetic traits.
//!
//! `num-traits` integration (`Zero`, `One`, `Bounded`) lives here as well so
//! that generic code written against those bounds accepts the wide types.

pub mod constants;
pub mod ops;

use crate::{uint128::Uint128, uint256::Uint256};

macro_rules! impl_num_traits {
    ($t:ty) => {
        impl num_traits::Zero for $t {
            #[inline]
            fn zero() -> Self {
                <$t>::ZERO
            }

            #[inline]
            fn is_zero(&self) -> bool {
                <$t>::is_zero(*self)
            }
        }

        impl num_traits::One for $t {
            #[inline]
            fn one() -> Self {
                <$t>::ONE
            }
        }

        impl num_traits::Bounded for $t {
            #[inline]
            fn min_value() -> Self {
                <$t>::ZERO
            }

            #[inline]
            fn max_value() -> Self {
                <$t>::MAX
            }
        }
    };
}

impl_num_traits!(Uint128);
impl_num_traits!(Uint256);
