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

//! # Wideint Core
//!
//! Fixed-width unsigned integers wider than the native machine word. The crate
//! provides two value types, `Uint128` and `Uint256`, whose arithmetic wraps
//! around exactly like the primitive unsigned integers do in release builds:
//! `MAX + 1 == 0`, `0 - 1 == MAX` and `MAX * MAX == 1`.
//!
//! ## Modules
//!
//! - `uint128`: The 128-bit type built from two `u64` limbs, together with the
//!   free functions `add`, `sub`, `mul` and `div` that expose the carry,
//!   borrow, full-product and double-width division primitives.
//! - `uint256`: The 256-bit type built from two `Uint128` halves. Every
//!   operation is composed from 128-bit operations plus a carry or borrow link
//!   between the halves.
//! - `num`: Associated-constant traits (`Zero`, `One`, `Max`), the shared
//!   carry-propagating primitives (`CarryingAdd`, `BorrowingSub`,
//!   `WideningMul`, `NarrowingDiv`) and by-value checked and saturating
//!   arithmetic traits.
//! - `error`: Error types. Division is the only kernel operation that can
//!   fail; everything else wraps.
//! - `text`, `bytes`: Decimal and radix formatting, parsing, and
//!   little/big-endian buffer conversion.
//! - `big`: Bridge to `num-bigint` (feature `bigint`), with saturating
//!   ingestion of unbounded values.
//! - `serde`: Text marshaling through serde (feature `serde`).
//!
//! ## Design
//!
//! Values are `Copy` and immutable. No operation allocates, and no operation
//! in the arithmetic kernel has side effects, so values can be shared across
//! threads freely.

#[macro_use]
mod macros;

pub mod bytes;
pub mod error;
pub mod num;
pub mod text;
pub mod uint128;
pub mod uint256;

#[cfg(feature = "bigint")]
pub mod big;

#[cfg(feature = "serde")]
pub mod serde;

pub use error::{
    ArithmeticError, BufferTooShortError, ConversionError, IntErrorKind, ParseUintError,
};
pub use uint128::Uint128;
pub use uint256::Uint256;
