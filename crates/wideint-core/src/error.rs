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

//! Error types for wide-integer arithmetic and its adapters.
//!
//! The arithmetic kernel has exactly two failure modes, both raised by the
//! division entry points: a zero divisor, and a double-width dividend whose
//! quotient does not fit in a single width. Everything else wraps around.
//! The adapters add their own errors for parsing, buffer access and
//! conversion from unbounded integers.

use std::fmt::Display;

/// The error type for fallible arithmetic on `Uint128` and `Uint256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The divisor is zero.
    DivideByZero,
    /// The divisor of a double-width division is not greater than the
    /// upper half of the dividend, so the quotient would not fit.
    Overflow,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "integer divide by zero"),
            Self::Overflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// The kind of failure encountered while parsing an integer from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntErrorKind {
    /// The input string is empty.
    Empty,
    /// The input contains a character that is not a digit in the radix.
    InvalidDigit,
    /// The value does not fit in the target width.
    Overflow,
}

/// An error returned when parsing a `Uint128` or `Uint256` from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseUintError {
    kind: IntErrorKind,
}

impl ParseUintError {
    pub(crate) const fn new(kind: IntErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the detailed cause of the failure.
    #[inline]
    pub const fn kind(&self) -> &IntErrorKind {
        &self.kind
    }
}

impl Display for ParseUintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            IntErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            IntErrorKind::InvalidDigit => write!(f, "invalid digit found in string"),
            IntErrorKind::Overflow => write!(f, "number too large to fit in target type"),
        }
    }
}

impl std::error::Error for ParseUintError {}

/// An error returned by the strict (non-saturating) conversions from
/// unbounded integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// The source value is negative.
    Negative,
    /// The source value needs more bits than the target width provides.
    TooLarge {
        /// Bit length of the rejected value.
        bits: u64,
        /// Width of the target type in bits.
        width: u32,
    },
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "value cannot be negative"),
            Self::TooLarge { bits, width } => {
                write!(f, "value of {bits} bits overflows {width}-bit integer")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// An error returned when a byte slice is too short to load or store a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferTooShortError {
    /// The number of bytes required.
    pub needed: usize,
    /// The number of bytes available.
    pub actual: usize,
}

impl Display for BufferTooShortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Buffer too short: need {} bytes, got {}",
            self.needed, self.actual
        )
    }
}

impl std::error::Error for BufferTooShortError {}
