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

//! # Numeric Operations Traits
//!
//! By-value operation traits shared by the native word and both wide
//! integer types.
//!
//! ## Submodules
//!
//! - `carrying`: `CarryingAdd`, `BorrowingSub`, `WideningMul` and
//!   `NarrowingDiv`, the building blocks every multi-limb operation is made
//!   of. Implemented for `u64`, `Uint128` and `Uint256`.
//! - `checked_arithmetic`: Traits like `CheckedAddVal`, `CheckedSubVal`,
//!   `CheckedMulVal`, `CheckedDivVal`, `CheckedRemVal`, `CheckedShlVal`,
//!   `CheckedShrVal` returning `Option<T>` instead of wrapping.
//! - `saturating_arithmetic`: `SaturatingAddVal`, `SaturatingSubVal`,
//!   `SaturatingMulVal` clamping results to `[0, MAX]`.
//!
//! The plain operators on `Uint128` and `Uint256` wrap around. These traits
//! are for call sites that would rather detect or clamp the overflow.

pub mod carrying;
pub mod checked_arithmetic;
pub mod saturating_arithmetic;
