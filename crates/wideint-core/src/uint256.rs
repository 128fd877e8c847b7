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

//! # Unsigned 256-bit Integers
//!
//! `Uint256` is two [`Uint128`] halves. Every algorithm here is the
//! `Uint128` algorithm one level up: the limb is a `Uint128` instead of a
//! `u64`, and the single-limb primitives come from the `Uint128`
//! implementations of the [`carrying`](crate::num::ops::carrying) traits.
//!
//! ```rust
//! # use wideint_core::{Uint128, Uint256};
//!
//! assert_eq!(Uint256::MAX + Uint256::ONE, Uint256::ZERO);
//! assert_eq!(Uint256::ZERO - Uint256::ONE, Uint256::MAX);
//! assert_eq!(Uint256::MAX * Uint256::MAX, Uint256::ONE);
//! assert_eq!(
//!     Uint256::from(Uint128::MAX) + Uint128::ONE,
//!     Uint256 { lo: Uint128::ZERO, hi: Uint128::ONE }
//! );
//! ```

use crate::{
    error::ArithmeticError,
    num::ops::carrying::{BorrowingSub, CarryingAdd, NarrowingDiv, WideningMul},
    uint128::Uint128,
};
use std::cmp::Ordering;

/// An unsigned 256-bit integer made of two 128-bit halves.
///
/// The represented value is `hi * 2^128 + lo`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uint256 {
    /// The lower 128 bits.
    pub lo: Uint128,
    /// The upper 128 bits.
    pub hi: Uint128,
}

/// Returns `x + y + carry` and the carry out of bit 255.
#[inline]
pub fn add(x: Uint256, y: Uint256, carry: bool) -> (Uint256, bool) {
    let (lo, carry) = x.lo.add_with_carry(y.lo, carry);
    let (hi, carry) = x.hi.add_with_carry(y.hi, carry);
    (Uint256 { lo, hi }, carry)
}

/// Returns `x - y - borrow` and the borrow out of bit 255.
#[inline]
pub fn sub(x: Uint256, y: Uint256, borrow: bool) -> (Uint256, bool) {
    let (lo, borrow) = x.lo.sub_with_borrow(y.lo, borrow);
    let (hi, borrow) = x.hi.sub_with_borrow(y.hi, borrow);
    (Uint256 { lo, hi }, borrow)
}

/// Returns the full 512-bit product of `x` and `y` as `(hi, lo)`.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::{uint256, Uint256};
///
/// let (hi, lo) = uint256::mul(Uint256::MAX, Uint256::MAX);
/// assert_eq!(hi, Uint256::MAX - Uint256::ONE);
/// assert_eq!(lo, Uint256::ONE);
/// ```
pub fn mul(x: Uint256, y: Uint256) -> (Uint256, Uint256) {
    let (lo_hi, lo_lo) = x.lo.full_mul(y.lo);
    let (hi_hi, hi_lo) = x.hi.full_mul(y.hi);
    let (t0, t1) = x.lo.full_mul(y.hi);
    let (t2, t3) = x.hi.full_mul(y.lo);

    let (lo_hi, c0) = lo_hi.add_with_carry(t1, false);
    let (lo_hi, c1) = lo_hi.add_with_carry(t3, false);
    let (hi_lo, c0) = hi_lo.add_with_carry(t0, c0);
    let (hi_lo, c1) = hi_lo.add_with_carry(t2, c1);
    let hi_hi = hi_hi.wrapping_add_u64(c0 as u64 + c1 as u64);

    (
        Uint256 {
            lo: hi_lo,
            hi: hi_hi,
        },
        Uint256 {
            lo: lo_lo,
            hi: lo_hi,
        },
    )
}

/// Divides the 512-bit value `(hi, lo)` by `y`, returning `(quotient, remainder)`.
///
/// Same two-digit long division as [`crate::uint128::div`], with 128-bit
/// digits.
///
/// # Errors
///
/// - [`ArithmeticError::DivideByZero`] if `y` is zero.
/// - [`ArithmeticError::Overflow`] if `y <= hi`.
pub fn div(hi: Uint256, lo: Uint256, y: Uint256) -> Result<(Uint256, Uint256), ArithmeticError> {
    if y.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }
    if y <= hi {
        return Err(ArithmeticError::Overflow);
    }

    let s = y.leading_zeros();
    let y = y.shl(s);

    let un32 = hi.shl(s) | lo.shr(256 - s);
    let un10 = lo.shl(s);

    let (mut q1, rhat) = un32.quo_rem_u128(y.hi)?;
    let mut r1 = Uint256::from(rhat);
    while !q1.hi.is_zero()
        || q1.wrapping_mul_u128(y.lo) > Uint256::from_halves(un10.hi, r1.lo)
    {
        q1 = q1.wrapping_sub_u128(Uint128::ONE);
        r1 = r1.wrapping_add_u128(y.hi);
        if !r1.hi.is_zero() {
            break;
        }
    }

    let un21 = Uint256 {
        lo: un10.hi,
        hi: un32.lo,
    }
    .wrapping_sub(q1.wrapping_mul(y));

    let (mut q0, rhat) = un21.quo_rem_u128(y.hi)?;
    let mut r0 = Uint256::from(rhat);
    while !q0.hi.is_zero()
        || q0.wrapping_mul_u128(y.lo) > Uint256::from_halves(un10.lo, r0.lo)
    {
        q0 = q0.wrapping_sub_u128(Uint128::ONE);
        r0 = r0.wrapping_add_u128(y.hi);
        if !r0.hi.is_zero() {
            break;
        }
    }

    let quo = Uint256 {
        lo: q0.lo,
        hi: q1.lo,
    };
    let rem = Uint256 {
        lo: un10.lo,
        hi: un21.lo,
    }
    .wrapping_sub(q0.wrapping_mul(y))
    .shr(s);

    Ok((quo, rem))
}

/// Bitwise OR of two halves, usable in `const` context.
#[inline(always)]
const fn or_halves(a: Uint128, b: Uint128) -> Uint128 {
    Uint128 {
        lo: a.lo | b.lo,
        hi: a.hi | b.hi,
    }
}

impl Uint256 {
    /// The size of this integer type in bits.
    pub const BITS: u32 = 256;

    /// The smallest value, `0`.
    pub const ZERO: Uint256 = Uint256 {
        lo: Uint128::ZERO,
        hi: Uint128::ZERO,
    };

    /// The smallest non-zero value, `1`.
    pub const ONE: Uint256 = Uint256 {
        lo: Uint128::ONE,
        hi: Uint128::ZERO,
    };

    /// The largest value, `2^256 - 1`.
    pub const MAX: Uint256 = Uint256 {
        lo: Uint128::MAX,
        hi: Uint128::MAX,
    };

    /// Returns `0`.
    #[inline(always)]
    pub const fn zero() -> Uint256 {
        Self::ZERO
    }

    /// Returns `1`.
    #[inline(always)]
    pub const fn one() -> Uint256 {
        Self::ONE
    }

    /// Returns `2^256 - 1`.
    #[inline(always)]
    pub const fn max() -> Uint256 {
        Self::MAX
    }

    /// Widens a 64-bit value.
    #[inline(always)]
    pub const fn from_u64(v: u64) -> Uint256 {
        Uint256 {
            lo: Uint128::from_u64(v),
            hi: Uint128::ZERO,
        }
    }

    /// Widens a 128-bit value.
    #[inline(always)]
    pub const fn from_u128(v: Uint128) -> Uint256 {
        Uint256 {
            lo: v,
            hi: Uint128::ZERO,
        }
    }

    /// Builds a value from its lower and upper 128-bit halves.
    #[inline(always)]
    pub const fn from_halves(lo: Uint128, hi: Uint128) -> Uint256 {
        Uint256 { lo, hi }
    }

    /// Builds a value from four little-endian 64-bit limbs.
    #[inline(always)]
    pub const fn from_limbs(limbs: [u64; 4]) -> Uint256 {
        Uint256 {
            lo: Uint128 {
                lo: limbs[0],
                hi: limbs[1],
            },
            hi: Uint128 {
                lo: limbs[2],
                hi: limbs[3],
            },
        }
    }

    /// Returns the four 64-bit limbs in little-endian order.
    #[inline(always)]
    pub const fn to_limbs(self) -> [u64; 4] {
        [self.lo.lo, self.lo.hi, self.hi.lo, self.hi.hi]
    }

    /// Returns `true` if the value is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }

    /// Returns `true` if the value equals the 128-bit value `v`.
    #[inline]
    pub fn equals_u128(self, v: Uint128) -> bool {
        self.lo == v && self.hi.is_zero()
    }

    /// Compares against a 128-bit value.
    #[inline]
    pub fn cmp_u128(self, v: Uint128) -> Ordering {
        if !self.hi.is_zero() {
            return Ordering::Greater;
        }
        self.lo.cmp(&v)
    }

    /// Returns `self & !v` with `v` widened by a zero upper half.
    #[inline]
    pub fn and_not_u128(self, v: Uint128) -> Uint256 {
        Uint256 {
            lo: self.lo.and_not(v),
            hi: self.hi,
        }
    }

    /// Wrapping addition.
    #[inline]
    pub fn wrapping_add(self, v: Uint256) -> Uint256 {
        add(self, v, false).0
    }

    /// Wrapping addition of a 128-bit value.
    #[inline]
    pub fn wrapping_add_u128(self, v: Uint128) -> Uint256 {
        let (lo, carry) = self.lo.add_with_carry(v, false);
        Uint256 {
            lo,
            hi: self.hi.wrapping_add_u64(carry as u64),
        }
    }

    /// Wrapping subtraction.
    #[inline]
    pub fn wrapping_sub(self, v: Uint256) -> Uint256 {
        sub(self, v, false).0
    }

    /// Wrapping subtraction of a 128-bit value.
    #[inline]
    pub fn wrapping_sub_u128(self, v: Uint128) -> Uint256 {
        let (lo, borrow) = self.lo.sub_with_borrow(v, false);
        Uint256 {
            lo,
            hi: self.hi.wrapping_sub_u64(borrow as u64),
        }
    }

    /// Wrapping multiplication.
    #[inline]
    pub fn wrapping_mul(self, v: Uint256) -> Uint256 {
        let (hi, lo) = self.lo.full_mul(v.lo);
        let hi = hi
            .wrapping_add(self.hi.wrapping_mul(v.lo))
            .wrapping_add(self.lo.wrapping_mul(v.hi));
        Uint256 { lo, hi }
    }

    /// Wrapping multiplication by a 128-bit value.
    #[inline]
    pub fn wrapping_mul_u128(self, v: Uint128) -> Uint256 {
        let (hi, lo) = self.lo.full_mul(v);
        Uint256 {
            lo,
            hi: hi.wrapping_add(self.hi.wrapping_mul(v)),
        }
    }

    /// Returns `(self / v, self % v)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `v` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wideint_core::Uint256;
    ///
    /// let (q, r) = Uint256::MAX.quo_rem(Uint256::from(u128::MAX)).unwrap();
    /// assert_eq!(q, Uint256::from(u128::MAX) + Uint256::from(2u64));
    /// assert_eq!(r, Uint256::ZERO);
    /// ```
    pub fn quo_rem(self, v: Uint256) -> Result<(Uint256, Uint256), ArithmeticError> {
        if v.hi.is_zero() {
            let (q, r) = self.quo_rem_u128(v.lo)?;
            return Ok((q, Uint256::from(r)));
        }

        let n = v.hi.leading_zeros();
        let u1 = self.shr(1);
        let v1 = v.shl(n);
        let (tq, _) = Uint128::div_wide(u1.hi, u1.lo, v1.hi)?;
        let mut tq = tq.shr(127 - n);
        if !tq.is_zero() {
            tq = tq.wrapping_sub_u64(1);
        }

        let mut q = Uint256::from(tq);
        let mut r = self.wrapping_sub(v.wrapping_mul_u128(tq));
        if r >= v {
            q = q.wrapping_add_u128(Uint128::ONE);
            r = r.wrapping_sub(v);
        }

        Ok((q, r))
    }

    /// Returns `(self / v, self % v)` for a 128-bit divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `v` is zero.
    pub fn quo_rem_u128(self, v: Uint128) -> Result<(Uint256, Uint128), ArithmeticError> {
        if v.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }

        if self.hi < v {
            let (lo, r) = Uint128::div_wide(self.hi, self.lo, v)?;
            return Ok((
                Uint256 {
                    lo,
                    hi: Uint128::ZERO,
                },
                r,
            ));
        }

        let (hi, r) = Uint128::div_wide(Uint128::ZERO, self.hi, v)?;
        let (lo, r) = Uint128::div_wide(r, self.lo, v)?;
        Ok((Uint256 { lo, hi }, r))
    }

    /// Returns `(self / v, self % v)` for a 64-bit divisor.
    ///
    /// Runs entirely on native double-word divisions, one per 64-bit limb.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `v` is zero.
    pub fn quo_rem_u64(self, v: u64) -> Result<(Uint256, u64), ArithmeticError> {
        let (hi, r) = self.hi.quo_rem_u64(v)?;
        let (lo_hi, r) = u64::div_wide(r, self.lo.hi, v)?;
        let (lo_lo, r) = u64::div_wide(r, self.lo.lo, v)?;
        Ok((
            Uint256 {
                lo: Uint128 {
                    lo: lo_lo,
                    hi: lo_hi,
                },
                hi,
            },
            r,
        ))
    }

    /// Returns `self / v`, or `None` if `v` is zero.
    #[inline]
    pub fn checked_div(self, v: Uint256) -> Option<Uint256> {
        self.quo_rem(v).ok().map(|(q, _)| q)
    }

    /// Returns `self % v`, or `None` if `v` is zero.
    #[inline]
    pub fn checked_rem(self, v: Uint256) -> Option<Uint256> {
        self.quo_rem(v).ok().map(|(_, r)| r)
    }

    /// Logical left shift. Shifting by 256 or more yields zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wideint_core::Uint256;
    ///
    /// const TOP: Uint256 = Uint256::ONE.shl(255);
    /// assert_eq!(TOP, Uint256::from_limbs([0, 0, 0, 1 << 63]));
    /// assert_eq!(TOP.shl(1), Uint256::ZERO);
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn shl(self, n: u32) -> Uint256 {
        match n {
            0 => self,
            1..=127 => Uint256 {
                lo: self.lo.shl(n),
                hi: or_halves(self.hi.shl(n), self.lo.shr(128 - n)),
            },
            128..=255 => Uint256 {
                lo: Uint128::ZERO,
                hi: self.lo.shl(n - 128),
            },
            _ => Uint256::ZERO,
        }
    }

    /// Logical right shift. Shifting by 256 or more yields zero.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn shr(self, n: u32) -> Uint256 {
        match n {
            0 => self,
            1..=127 => Uint256 {
                lo: or_halves(self.lo.shr(n), self.hi.shl(128 - n)),
                hi: self.hi.shr(n),
            },
            128..=255 => Uint256 {
                lo: self.hi.shr(n - 128),
                hi: Uint128::ZERO,
            },
            _ => Uint256::ZERO,
        }
    }

    /// Rotates left by `k mod 256` bits. A negative `k` rotates right.
    ///
    /// The rotation is split into a whole-limb permutation of the four
    /// 64-bit limbs and a sub-limb shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wideint_core::Uint256;
    ///
    /// let x = Uint256::from_limbs([0, 0, 0, 1 << 63]);
    /// assert_eq!(x.rotate_left(1), Uint256::ONE);
    /// assert_eq!(Uint256::ONE.rotate_right(1), x);
    /// ```
    pub const fn rotate_left(self, k: i32) -> Uint256 {
        let n = (k as u32) & 255;
        let q = (n / 64) as usize;
        let b = n % 64;

        let limbs = self.to_limbs();
        let mut out = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            let cur = limbs[(i + 4 - q) % 4];
            out[i] = if b == 0 {
                cur
            } else {
                (cur << b) | (limbs[(i + 3 - q) % 4] >> (64 - b))
            };
            i += 1;
        }
        Uint256::from_limbs(out)
    }

    /// Rotates right by `k mod 256` bits. A negative `k` rotates left.
    #[inline]
    pub const fn rotate_right(self, k: i32) -> Uint256 {
        self.rotate_left(k.wrapping_neg())
    }

    /// Returns the minimum number of bits needed to represent the value.
    #[inline]
    pub const fn bit_len(self) -> u32 {
        if !self.hi.is_zero() {
            return 128 + self.hi.bit_len();
        }
        self.lo.bit_len()
    }

    /// Returns the number of leading zero bits; 256 for zero.
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if !self.hi.is_zero() {
            return self.hi.leading_zeros();
        }
        128 + self.lo.leading_zeros()
    }

    /// Returns the number of trailing zero bits; 256 for zero.
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        if !self.lo.is_zero() {
            return self.lo.trailing_zeros();
        }
        128 + self.hi.trailing_zeros()
    }

    /// Returns the number of one bits.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    /// Reverses the order of the bits.
    #[inline]
    pub const fn reverse_bits(self) -> Uint256 {
        Uint256 {
            lo: self.hi.reverse_bits(),
            hi: self.lo.reverse_bits(),
        }
    }

    /// Reverses the order of the bytes.
    #[inline]
    pub const fn swap_bytes(self) -> Uint256 {
        Uint256 {
            lo: self.hi.swap_bytes(),
            hi: self.lo.swap_bytes(),
        }
    }
}

impl Ord for Uint256 {
    #[inline]
    fn cmp(&self, other: &Uint256) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl PartialOrd for Uint256 {
    #[inline]
    fn partial_cmp(&self, other: &Uint256) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Uint128> for Uint256 {
    #[inline]
    fn eq(&self, other: &Uint128) -> bool {
        self.equals_u128(*other)
    }
}

impl PartialOrd<Uint128> for Uint256 {
    #[inline]
    fn partial_cmp(&self, other: &Uint128) -> Option<Ordering> {
        Some(self.cmp_u128(*other))
    }
}

impl From<u64> for Uint256 {
    #[inline(always)]
    fn from(v: u64) -> Uint256 {
        Uint256::from_u64(v)
    }
}

impl From<u128> for Uint256 {
    #[inline(always)]
    fn from(v: u128) -> Uint256 {
        Uint256::from_u128(Uint128::from(v))
    }
}

impl From<Uint128> for Uint256 {
    #[inline(always)]
    fn from(v: Uint128) -> Uint256 {
        Uint256::from_u128(v)
    }
}

impl_bitwise_ops!(Uint256, Uint128);
impl_arith_ops!(
    Uint256,
    Uint128,
    add_narrow = wrapping_add_u128,
    sub_narrow = wrapping_sub_u128,
    mul_narrow = wrapping_mul_u128,
    quo_rem_narrow = quo_rem_u128,
);
