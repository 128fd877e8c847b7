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

//! # Text Conversion
//!
//! Formatting and parsing for `Uint128` and `Uint256`.
//!
//! `Display` and `Debug` print the decimal value. `LowerHex`, `UpperHex`,
//! `Octal` and `Binary` behave like their primitive counterparts, including
//! the `#` prefix flag and width/fill handling:
//!
//! ```rust
//! # use wideint_core::Uint128;
//!
//! let x = Uint128 { lo: 0xff, hi: 1 };
//! assert_eq!(x.to_string(), "18446744073709551871");
//! assert_eq!(format!("{x:#x}"), "0x100000000000000ff");
//! assert_eq!(format!("{:>8}", Uint128::from(42u64)), "      42");
//! ```
//!
//! Parsing accepts an optional leading `+` and never wraps:
//!
//! ```rust
//! # use wideint_core::{IntErrorKind, Uint128};
//!
//! assert_eq!("+255".parse::<Uint128>(), Ok(Uint128::from(255u64)));
//! let err = "340282366920938463463374607431768211456".parse::<Uint128>().unwrap_err();
//! assert_eq!(err.kind(), &IntErrorKind::Overflow);
//! ```

use crate::{
    error::{ArithmeticError, IntErrorKind, ParseUintError},
    num::{
        constants::Zero,
        ops::checked_arithmetic::{CheckedAddVal, CheckedMulVal},
    },
    uint128::Uint128,
    uint256::Uint256,
};
use std::{fmt, str::FromStr};

// Largest power of ten below 2^64.
const POW10_19: u64 = 10_000_000_000_000_000_000;

// Enough for 256 binary digits.
const BUF_LEN: usize = 256;

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// The operations digit extraction needs from a wide integer.
trait DigitSource: Copy {
    fn is_zero(self) -> bool;
    fn low_u64(self) -> u64;
    fn shr(self, n: u32) -> Self;
    fn quo_rem_u64(self, v: u64) -> Result<(Self, u64), ArithmeticError>;
}

macro_rules! digit_source_impl {
    ($t:ty, $($low:ident).+) => {
        impl DigitSource for $t {
            #[inline(always)]
            fn is_zero(self) -> bool {
                <$t>::is_zero(self)
            }

            #[inline(always)]
            fn low_u64(self) -> u64 {
                self.$($low).+
            }

            #[inline(always)]
            fn shr(self, n: u32) -> Self {
                <$t>::shr(self, n)
            }

            #[inline(always)]
            fn quo_rem_u64(self, v: u64) -> Result<(Self, u64), ArithmeticError> {
                <$t>::quo_rem_u64(self, v)
            }
        }
    };
}

digit_source_impl!(Uint128, lo);
digit_source_impl!(Uint256, lo.lo);

fn fmt_decimal<T: DigitSource>(x: T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut buf = [0u8; BUF_LEN];
    let mut pos = BUF_LEN;
    let mut x = x;

    loop {
        let (q, mut r) = x.quo_rem_u64(POW10_19).map_err(|_| fmt::Error)?;
        x = q;
        if x.is_zero() {
            loop {
                pos -= 1;
                buf[pos] = b'0' + (r % 10) as u8;
                r /= 10;
                if r == 0 {
                    break;
                }
            }
            break;
        }

        // Inner chunks are zero-padded to the full 19 digits.
        for _ in 0..19 {
            pos -= 1;
            buf[pos] = b'0' + (r % 10) as u8;
            r /= 10;
        }
    }

    let digits = std::str::from_utf8(&buf[pos..]).map_err(|_| fmt::Error)?;
    f.pad_integral(true, "", digits)
}

fn fmt_pow2<T: DigitSource>(
    x: T,
    f: &mut fmt::Formatter<'_>,
    shift: u32,
    prefix: &str,
    table: &[u8],
) -> fmt::Result {
    let mut buf = [0u8; BUF_LEN];
    let mut pos = BUF_LEN;
    let mask = (1u64 << shift) - 1;
    let mut x = x;

    loop {
        pos -= 1;
        buf[pos] = table[(x.low_u64() & mask) as usize];
        x = x.shr(shift);
        if x.is_zero() {
            break;
        }
    }

    let digits = std::str::from_utf8(&buf[pos..]).map_err(|_| fmt::Error)?;
    f.pad_integral(true, prefix, digits)
}

/// Parses `src` in the given radix, failing instead of wrapping on overflow.
///
/// # Panics
///
/// Panics if `radix` is not in `2..=36`.
fn parse_radix<T>(src: &str, radix: u32) -> Result<T, ParseUintError>
where
    T: Copy + Zero + From<u64> + CheckedMulVal + CheckedAddVal,
{
    assert!(
        (2..=36).contains(&radix),
        "from_str_radix: radix must lie in the range `[2, 36]` - found {}",
        radix
    );

    let digits = match src.as_bytes() {
        [] => return Err(ParseUintError::new(IntErrorKind::Empty)),
        [b'+'] => return Err(ParseUintError::new(IntErrorKind::InvalidDigit)),
        [b'+', rest @ ..] => rest,
        all => all,
    };

    let base = T::from(radix as u64);
    let mut acc = T::ZERO;
    for &c in digits {
        let digit = (c as char)
            .to_digit(radix)
            .ok_or(ParseUintError::new(IntErrorKind::InvalidDigit))?;
        acc = acc
            .checked_mul_val(base)
            .and_then(|v| v.checked_add_val(T::from(digit as u64)))
            .ok_or(ParseUintError::new(IntErrorKind::Overflow))?;
    }
    Ok(acc)
}

macro_rules! text_impl {
    ($t:ty) => {
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_decimal(*self, f)
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_decimal(*self, f)
            }
        }

        impl fmt::LowerHex for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_pow2(*self, f, 4, "0x", DIGITS_LOWER)
            }
        }

        impl fmt::UpperHex for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_pow2(*self, f, 4, "0x", DIGITS_UPPER)
            }
        }

        impl fmt::Octal for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_pow2(*self, f, 3, "0o", DIGITS_LOWER)
            }
        }

        impl fmt::Binary for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_pow2(*self, f, 1, "0b", DIGITS_LOWER)
            }
        }

        impl FromStr for $t {
            type Err = ParseUintError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_radix(s, 10)
            }
        }

        impl $t {
            /// Parses a string in the given radix (`2..=36`). Digits above 9
            /// are case-insensitive letters and a leading `+` is accepted.
            ///
            /// # Errors
            ///
            /// Returns a [`ParseUintError`] whose [`kind`](ParseUintError::kind)
            /// is `Empty`, `InvalidDigit` or `Overflow`.
            ///
            /// # Panics
            ///
            /// Panics if `radix` is not in `2..=36`.
            pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseUintError> {
                parse_radix(src, radix)
            }
        }
    };
}

text_impl!(Uint128);
text_impl!(Uint256);
