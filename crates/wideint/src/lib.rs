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

//! # Wideint
//!
//! Fixed-width 128-bit and 256-bit unsigned integers with wrap-around
//! arithmetic. This crate re-exports [`wideint_core`] under short aliases:
//!
//! ```rust
//! use wideint::{U128, U256};
//!
//! let x: U256 = "340282366920938463463374607431768211456".parse().unwrap();
//! assert_eq!(x, U256::from(U128::MAX) + U128::ONE);
//! assert_eq!(x.bit_len(), 129);
//! ```
//!
//! The operators `+`, `-` and `*` wrap modulo `2^W`. Division by zero panics
//! through `/` and `%`; use `quo_rem` to receive an
//! [`ArithmeticError`] instead.

pub use wideint_core::{
    ArithmeticError, BufferTooShortError, ConversionError, IntErrorKind, ParseUintError, Uint128,
    Uint256, num, uint128, uint256,
};

/// A 128-bit unsigned integer.
pub type U128 = Uint128;

/// A 256-bit unsigned integer.
pub type U256 = Uint256;
