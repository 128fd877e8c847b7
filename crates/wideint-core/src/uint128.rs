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

//! # Unsigned 128-bit Integers
//!
//! `Uint128` stores a value as two native 64-bit limbs and implements every
//! operation directly on top of the `u64` carry, borrow, widening-multiply
//! and double-word division primitives from
//! [`carrying`](crate::num::ops::carrying).
//!
//! All arithmetic wraps modulo `2^128`:
//!
//! ```rust
//! # use wideint_core::Uint128;
//!
//! assert_eq!(Uint128::MAX + Uint128::ONE, Uint128::ZERO);
//! assert_eq!(Uint128::ZERO - Uint128::ONE, Uint128::MAX);
//! assert_eq!(Uint128::MAX * Uint128::MAX, Uint128::ONE);
//! ```
//!
//! Division is the only operation that can fail. [`Uint128::quo_rem`] and the
//! double-width [`div`] report failures as [`ArithmeticError`]; the `/` and
//! `%` operators panic on a zero divisor like the primitive integers do.

use crate::{
    error::ArithmeticError,
    num::ops::carrying::{BorrowingSub, CarryingAdd, NarrowingDiv, WideningMul},
};
use std::cmp::Ordering;

/// An unsigned 128-bit integer made of two 64-bit limbs.
///
/// The represented value is `hi * 2^64 + lo`. There is no constructor taking
/// both halves positionally; initialise the fields by name so the order can
/// never be confused:
///
/// ```rust
/// # use wideint_core::Uint128;
///
/// let x = Uint128 { lo: 1, hi: 2 };
/// assert_eq!(u128::from(x), (2u128 << 64) | 1);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
    /// The lower 64 bits.
    pub lo: u64,
    /// The upper 64 bits.
    pub hi: u64,
}

/// Returns `x + y + carry` and the carry out of bit 127.
///
/// The chain is two 64-bit additions with the carry forwarded from the lower
/// limb into the upper one.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::{uint128, Uint128};
///
/// let (sum, carry) = uint128::add(Uint128::MAX, Uint128::ZERO, true);
/// assert_eq!((sum, carry), (Uint128::ZERO, true));
/// ```
#[inline]
pub fn add(x: Uint128, y: Uint128, carry: bool) -> (Uint128, bool) {
    let (lo, carry) = x.lo.add_with_carry(y.lo, carry);
    let (hi, carry) = x.hi.add_with_carry(y.hi, carry);
    (Uint128 { lo, hi }, carry)
}

/// Returns `x - y - borrow` and the borrow out of bit 127.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::{uint128, Uint128};
///
/// let (diff, borrow) = uint128::sub(Uint128::ZERO, Uint128::ONE, false);
/// assert_eq!((diff, borrow), (Uint128::MAX, true));
/// ```
#[inline]
pub fn sub(x: Uint128, y: Uint128, borrow: bool) -> (Uint128, bool) {
    let (lo, borrow) = x.lo.sub_with_borrow(y.lo, borrow);
    let (hi, borrow) = x.hi.sub_with_borrow(y.hi, borrow);
    (Uint128 { lo, hi }, borrow)
}

/// Returns the full 256-bit product of `x` and `y` as `(hi, lo)`.
///
/// Schoolbook multiplication in base `2^64`: four 64x64 partial products,
/// with the two cross terms summed into the middle limbs and their carries
/// pushed into the top limb.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::{uint128, Uint128};
///
/// let (hi, lo) = uint128::mul(Uint128::MAX, Uint128::from(2u64));
/// assert_eq!(hi, Uint128::ONE);
/// assert_eq!(lo, Uint128::MAX - Uint128::ONE);
/// ```
pub fn mul(x: Uint128, y: Uint128) -> (Uint128, Uint128) {
    let (lo_hi, lo_lo) = x.lo.full_mul(y.lo);
    let (hi_hi, hi_lo) = x.hi.full_mul(y.hi);
    let (t0, t1) = x.lo.full_mul(y.hi);
    let (t2, t3) = x.hi.full_mul(y.lo);

    let (lo_hi, c0) = lo_hi.add_with_carry(t1, false);
    let (lo_hi, c1) = lo_hi.add_with_carry(t3, false);
    let (hi_lo, c0) = hi_lo.add_with_carry(t0, c0);
    let (hi_lo, c1) = hi_lo.add_with_carry(t2, c1);
    let hi_hi = hi_hi.wrapping_add(c0 as u64 + c1 as u64);

    (
        Uint128 {
            lo: hi_lo,
            hi: hi_hi,
        },
        Uint128 {
            lo: lo_lo,
            hi: lo_hi,
        },
    )
}

/// Divides the 256-bit value `(hi, lo)` by `y`, returning `(quotient, remainder)`.
///
/// This is Knuth's Algorithm D specialised to a dividend of four 64-bit
/// limbs and a divisor of two. The divisor is normalised so its top bit is
/// set, then two 64-bit quotient digits are estimated from the top limbs and
/// corrected. Each estimate is at most two too large, so each correction
/// loop runs at most twice.
///
/// # Errors
///
/// - [`ArithmeticError::DivideByZero`] if `y` is zero.
/// - [`ArithmeticError::Overflow`] if `y <= hi`; the quotient would need
///   more than 128 bits.
///
/// # Examples
///
/// ```rust
/// # use wideint_core::{uint128, ArithmeticError, Uint128};
///
/// let (q, r) = uint128::div(Uint128::ONE, Uint128::ZERO, Uint128::from(3u64)).unwrap();
/// assert_eq!(q, Uint128::MAX / Uint128::from(3u64));
/// assert_eq!(r, Uint128::ONE);
///
/// assert_eq!(
///     uint128::div(Uint128::MAX, Uint128::MAX, Uint128::ONE),
///     Err(ArithmeticError::Overflow)
/// );
/// ```
pub fn div(hi: Uint128, lo: Uint128, y: Uint128) -> Result<(Uint128, Uint128), ArithmeticError> {
    if y.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }
    if y <= hi {
        return Err(ArithmeticError::Overflow);
    }

    let s = y.leading_zeros();
    let y = y.shl(s);

    let un32 = hi.shl(s) | lo.shr(128 - s);
    let un10 = lo.shl(s);

    let (mut q1, rhat) = un32.quo_rem_u64(y.hi)?;
    let mut r1 = Uint128::from_u64(rhat);
    while q1.hi != 0 || q1.wrapping_mul_u64(y.lo) > Uint128::from_limbs([un10.hi, r1.lo]) {
        q1 = q1.wrapping_sub_u64(1);
        r1 = r1.wrapping_add_u64(y.hi);
        if r1.hi != 0 {
            break;
        }
    }

    let un21 = Uint128 {
        lo: un10.hi,
        hi: un32.lo,
    }
    .wrapping_sub(q1.wrapping_mul(y));

    let (mut q0, rhat) = un21.quo_rem_u64(y.hi)?;
    let mut r0 = Uint128::from_u64(rhat);
    while q0.hi != 0 || q0.wrapping_mul_u64(y.lo) > Uint128::from_limbs([un10.lo, r0.lo]) {
        q0 = q0.wrapping_sub_u64(1);
        r0 = r0.wrapping_add_u64(y.hi);
        if r0.hi != 0 {
            break;
        }
    }

    let quo = Uint128 {
        lo: q0.lo,
        hi: q1.lo,
    };
    let rem = Uint128 {
        lo: un10.lo,
        hi: un21.lo,
    }
    .wrapping_sub(q0.wrapping_mul(y))
    .shr(s);

    Ok((quo, rem))
}

impl Uint128 {
    /// The size of this integer type in bits.
    pub const BITS: u32 = 128;

    /// The smallest value, `0`.
    pub const ZERO: Uint128 = Uint128 { lo: 0, hi: 0 };

    /// The smallest non-zero value, `1`.
    pub const ONE: Uint128 = Uint128 { lo: 1, hi: 0 };

    /// The largest value, `2^128 - 1`.
    pub const MAX: Uint128 = Uint128 {
        lo: u64::MAX,
        hi: u64::MAX,
    };

    /// Returns `0`.
    #[inline(always)]
    pub const fn zero() -> Uint128 {
        Self::ZERO
    }

    /// Returns `1`.
    #[inline(always)]
    pub const fn one() -> Uint128 {
        Self::ONE
    }

    /// Returns `2^128 - 1`.
    #[inline(always)]
    pub const fn max() -> Uint128 {
        Self::MAX
    }

    /// Widens a 64-bit value. The upper half is zero.
    #[inline(always)]
    pub const fn from_u64(v: u64) -> Uint128 {
        Uint128 { lo: v, hi: 0 }
    }

    /// Builds a value from little-endian limbs: `limbs[0]` is the lowest.
    #[inline(always)]
    pub const fn from_limbs(limbs: [u64; 2]) -> Uint128 {
        Uint128 {
            lo: limbs[0],
            hi: limbs[1],
        }
    }

    /// Returns the limbs in little-endian order.
    #[inline(always)]
    pub const fn to_limbs(self) -> [u64; 2] {
        [self.lo, self.hi]
    }

    /// Returns `true` if the value is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// Returns `true` if the value equals the 64-bit value `v`.
    #[inline]
    pub const fn equals_u64(self, v: u64) -> bool {
        self.lo == v && self.hi == 0
    }

    /// Compares against a 64-bit value. Any non-zero upper half is greater.
    #[inline]
    pub fn cmp_u64(self, v: u64) -> Ordering {
        if self.hi != 0 {
            return Ordering::Greater;
        }
        self.lo.cmp(&v)
    }

    /// Returns `self & !v` where `v` is widened with a zero upper half, so the
    /// upper half of `self` is kept as is.
    #[inline]
    pub fn and_not_u64(self, v: u64) -> Uint128 {
        Uint128 {
            lo: self.lo & !v,
            hi: self.hi,
        }
    }

    /// Wrapping addition: `Uint128::MAX.wrapping_add(Uint128::ONE) == Uint128::ZERO`.
    #[inline]
    pub fn wrapping_add(self, v: Uint128) -> Uint128 {
        add(self, v, false).0
    }

    /// Wrapping addition of a 64-bit value.
    #[inline]
    pub fn wrapping_add_u64(self, v: u64) -> Uint128 {
        let (lo, carry) = self.lo.add_with_carry(v, false);
        Uint128 {
            lo,
            hi: self.hi.wrapping_add(carry as u64),
        }
    }

    /// Wrapping subtraction: `Uint128::ZERO.wrapping_sub(Uint128::ONE) == Uint128::MAX`.
    #[inline]
    pub fn wrapping_sub(self, v: Uint128) -> Uint128 {
        sub(self, v, false).0
    }

    /// Wrapping subtraction of a 64-bit value.
    #[inline]
    pub fn wrapping_sub_u64(self, v: u64) -> Uint128 {
        let (lo, borrow) = self.lo.sub_with_borrow(v, false);
        Uint128 {
            lo,
            hi: self.hi.wrapping_sub(borrow as u64),
        }
    }

    /// Wrapping multiplication: `Uint128::MAX.wrapping_mul(Uint128::MAX) == Uint128::ONE`.
    ///
    /// Only the low 128 bits of the product are formed; the `hi * hi` term
    /// and the upper halves of the cross terms fall outside the result.
    #[inline]
    pub fn wrapping_mul(self, v: Uint128) -> Uint128 {
        let (hi, lo) = self.lo.full_mul(v.lo);
        let hi = hi
            .wrapping_add(self.hi.wrapping_mul(v.lo))
            .wrapping_add(self.lo.wrapping_mul(v.hi));
        Uint128 { lo, hi }
    }

    /// Wrapping multiplication by a 64-bit value.
    #[inline]
    pub fn wrapping_mul_u64(self, v: u64) -> Uint128 {
        let (hi, lo) = self.lo.full_mul(v);
        Uint128 {
            lo,
            hi: hi.wrapping_add(self.hi.wrapping_mul(v)),
        }
    }

    /// Returns `(self / v, self % v)`.
    ///
    /// When the divisor fits in 64 bits the division is done with native
    /// double-word divisions. Otherwise a trial quotient is computed from
    /// the normalised top limb of the divisor. That trial quotient is within
    /// one of the true quotient, so a single correction step suffices.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `v` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wideint_core::{ArithmeticError, Uint128};
    ///
    /// let x = Uint128 { lo: 7, hi: 5 };
    /// let (q, r) = x.quo_rem(Uint128 { lo: 0, hi: 2 }).unwrap();
    /// assert_eq!(q, Uint128::from(2u64));
    /// assert_eq!(r, Uint128 { lo: 7, hi: 1 });
    ///
    /// assert_eq!(x.quo_rem(Uint128::ZERO), Err(ArithmeticError::DivideByZero));
    /// ```
    pub fn quo_rem(self, v: Uint128) -> Result<(Uint128, Uint128), ArithmeticError> {
        if v.hi == 0 {
            let (q, r) = self.quo_rem_u64(v.lo)?;
            return Ok((q, Uint128::from_u64(r)));
        }

        // Normalise the divisor so its top bit is set and halve the dividend
        // so the narrowed division cannot overflow.
        let n = v.hi.leading_zeros();
        let u1 = self.shr(1);
        let v1 = v.shl(n);
        let (tq, _) = u64::div_wide(u1.hi, u1.lo, v1.hi)?;
        let mut tq = tq >> (63 - n);
        if tq != 0 {
            tq -= 1;
        }

        let mut q = Uint128::from_u64(tq);
        let mut r = self.wrapping_sub(v.wrapping_mul_u64(tq));
        if r >= v {
            q = q.wrapping_add_u64(1);
            r = r.wrapping_sub(v);
        }

        Ok((q, r))
    }

    /// Returns `(self / v, self % v)` for a 64-bit divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `v` is zero.
    pub fn quo_rem_u64(self, v: u64) -> Result<(Uint128, u64), ArithmeticError> {
        if v == 0 {
            return Err(ArithmeticError::DivideByZero);
        }

        if self.hi < v {
            let (lo, r) = u64::div_wide(self.hi, self.lo, v)?;
            return Ok((Uint128 { lo, hi: 0 }, r));
        }

        let (hi, r) = u64::div_wide(0, self.hi, v)?;
        let (lo, r) = u64::div_wide(r, self.lo, v)?;
        Ok((Uint128 { lo, hi }, r))
    }

    /// Returns `self / v`, or `None` if `v` is zero.
    #[inline]
    pub fn checked_div(self, v: Uint128) -> Option<Uint128> {
        self.quo_rem(v).ok().map(|(q, _)| q)
    }

    /// Returns `self % v`, or `None` if `v` is zero.
    #[inline]
    pub fn checked_rem(self, v: Uint128) -> Option<Uint128> {
        self.quo_rem(v).ok().map(|(_, r)| r)
    }

    /// Returns `self / v` for a 64-bit divisor, or `None` if `v` is zero.
    #[inline]
    pub fn checked_div_u64(self, v: u64) -> Option<Uint128> {
        self.quo_rem_u64(v).ok().map(|(q, _)| q)
    }

    /// Returns `self % v` for a 64-bit divisor, or `None` if `v` is zero.
    #[inline]
    pub fn checked_rem_u64(self, v: u64) -> Option<u64> {
        self.quo_rem_u64(v).ok().map(|(_, r)| r)
    }

    /// Logical left shift. Shifting by 128 or more yields zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wideint_core::Uint128;
    ///
    /// let x = Uint128 { lo: u64::MAX, hi: 0 };
    /// assert_eq!(x.shl(64), Uint128 { lo: 0, hi: u64::MAX });
    /// assert_eq!(x.shl(128), Uint128::ZERO);
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn shl(self, n: u32) -> Uint128 {
        match n {
            0 => self,
            1..=63 => Uint128 {
                lo: self.lo << n,
                hi: (self.hi << n) | (self.lo >> (64 - n)),
            },
            64 => Uint128 {
                lo: 0,
                hi: self.lo,
            },
            65..=127 => Uint128 {
                lo: 0,
                hi: self.lo << (n - 64),
            },
            _ => Uint128::ZERO,
        }
    }

    /// Logical right shift. Shifting by 128 or more yields zero.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn shr(self, n: u32) -> Uint128 {
        match n {
            0 => self,
            1..=63 => Uint128 {
                lo: (self.lo >> n) | (self.hi << (64 - n)),
                hi: self.hi >> n,
            },
            64 => Uint128 {
                lo: self.hi,
                hi: 0,
            },
            65..=127 => Uint128 {
                lo: self.hi >> (n - 64),
                hi: 0,
            },
            _ => Uint128::ZERO,
        }
    }

    /// Rotates left by `k mod 128` bits. A negative `k` rotates right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wideint_core::Uint128;
    ///
    /// let x = Uint128 { lo: 1, hi: 1 << 63 };
    /// assert_eq!(x.rotate_left(1), Uint128 { lo: 3, hi: 0 });
    /// assert_eq!(x.rotate_left(128), x);
    /// ```
    pub const fn rotate_left(self, k: i32) -> Uint128 {
        let n = (k as u32) & 127;
        match n {
            0 => self,
            1..=63 => Uint128 {
                lo: (self.lo << n) | (self.hi >> (64 - n)),
                hi: (self.hi << n) | (self.lo >> (64 - n)),
            },
            64 => Uint128 {
                lo: self.hi,
                hi: self.lo,
            },
            _ => {
                let n = n - 64;
                Uint128 {
                    lo: (self.lo >> (64 - n)) | (self.hi << n),
                    hi: (self.hi >> (64 - n)) | (self.lo << n),
                }
            }
        }
    }

    /// Rotates right by `k mod 128` bits. A negative `k` rotates left.
    #[inline]
    pub const fn rotate_right(self, k: i32) -> Uint128 {
        self.rotate_left(k.wrapping_neg())
    }

    /// Returns the minimum number of bits needed to represent the value.
    /// The result is 0 for zero.
    #[inline]
    pub const fn bit_len(self) -> u32 {
        if self.hi != 0 {
            return 64 + (64 - self.hi.leading_zeros());
        }
        64 - self.lo.leading_zeros()
    }

    /// Returns the number of leading zero bits; 128 for zero.
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if self.hi != 0 {
            return self.hi.leading_zeros();
        }
        64 + self.lo.leading_zeros()
    }

    /// Returns the number of trailing zero bits; 128 for zero.
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        if self.lo != 0 {
            return self.lo.trailing_zeros();
        }
        64 + self.hi.trailing_zeros()
    }

    /// Returns the number of one bits.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    /// Reverses the order of the bits.
    #[inline]
    pub const fn reverse_bits(self) -> Uint128 {
        Uint128 {
            lo: self.hi.reverse_bits(),
            hi: self.lo.reverse_bits(),
        }
    }

    /// Reverses the order of the bytes.
    #[inline]
    pub const fn swap_bytes(self) -> Uint128 {
        Uint128 {
            lo: self.hi.swap_bytes(),
            hi: self.lo.swap_bytes(),
        }
    }
}

impl Ord for Uint128 {
    #[inline]
    fn cmp(&self, other: &Uint128) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl PartialOrd for Uint128 {
    #[inline]
    fn partial_cmp(&self, other: &Uint128) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for Uint128 {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.equals_u64(*other)
    }
}

impl PartialOrd<u64> for Uint128 {
    #[inline]
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(self.cmp_u64(*other))
    }
}

impl From<u64> for Uint128 {
    #[inline(always)]
    fn from(v: u64) -> Uint128 {
        Uint128::from_u64(v)
    }
}

impl From<u128> for Uint128 {
    #[inline(always)]
    fn from(v: u128) -> Uint128 {
        Uint128 {
            lo: v as u64,
            hi: (v >> 64) as u64,
        }
    }
}

impl From<Uint128> for u128 {
    #[inline(always)]
    fn from(v: Uint128) -> u128 {
        ((v.hi as u128) << 64) | (v.lo as u128)
    }
}

impl_bitwise_ops!(Uint128, u64);
impl_arith_ops!(
    Uint128,
    u64,
    add_narrow = wrapping_add_u64,
    sub_narrow = wrapping_sub_u64,
    mul_narrow = wrapping_mul_u64,
    quo_rem_narrow = quo_rem_u64,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const EDGES: [u64; 5] = [0, 1, 2, u64::MAX - 1, u64::MAX];

    // Fixed edge grid followed by seeded random values, some with a zeroed half.
    fn samples(count: usize) -> Vec<Uint128> {
        let mut out = Vec::with_capacity(EDGES.len() * EDGES.len() + count);
        for &hi in &EDGES {
            for &lo in &EDGES {
                out.push(Uint128 { lo, hi });
            }
        }

        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..count {
            let flags = prng.next_u32();
            let lo = if flags & 0x07 == 0 { 0 } else { prng.next_u64() };
            let hi = if flags & 0x70 == 0 { 0 } else { prng.next_u64() };
            out.push(Uint128 { lo, hi });
        }
        out
    }

    #[test]
    fn test_wraparound_scenarios() {
        assert_eq!(Uint128::MAX + Uint128::ONE, Uint128::ZERO);
        assert_eq!(Uint128::ZERO - Uint128::ONE, Uint128::MAX);
        assert_eq!(Uint128::MAX * Uint128::MAX, Uint128::ONE);
        assert_eq!(Uint128::MAX + 1u64, Uint128::ZERO);
        assert_eq!(Uint128::ZERO - 1u64, Uint128::MAX);
        assert_eq!(Uint128::MAX * 2u64, Uint128::MAX - 1u64);
    }

    #[test]
    fn test_shift_left_by_64() {
        let x = Uint128 {
            lo: u64::MAX,
            hi: 0,
        };
        assert_eq!(
            x << 64,
            Uint128 {
                lo: 0,
                hi: u64::MAX
            }
        );
        assert_eq!(x >> 64, Uint128::ZERO);
        assert_eq!((x << 64) >> 64, x);
    }

    #[test]
    fn test_add_sub_carry_out() {
        assert_eq!(add(Uint128::MAX, Uint128::ONE, false), (Uint128::ZERO, true));
        assert_eq!(add(Uint128::MAX, Uint128::ZERO, false), (Uint128::MAX, false));
        assert_eq!(sub(Uint128::ZERO, Uint128::ZERO, true), (Uint128::MAX, true));
        assert_eq!(sub(Uint128::ONE, Uint128::ONE, false), (Uint128::ZERO, false));
    }

    #[test]
    fn test_arithmetic_matches_native() {
        let values = samples(150);
        for &x in &values {
            let xn = u128::from(x);
            for &y in &values {
                let yn = u128::from(y);
                assert_eq!(u128::from(x + y), xn.wrapping_add(yn), "{x:?} + {y:?}");
                assert_eq!(u128::from(x - y), xn.wrapping_sub(yn), "{x:?} - {y:?}");
                assert_eq!(u128::from(x * y), xn.wrapping_mul(yn), "{x:?} * {y:?}");
                assert_eq!(x.cmp(&y), xn.cmp(&yn));

                if !y.is_zero() {
                    let (q, r) = x.quo_rem(y).unwrap();
                    assert_eq!(u128::from(q), xn / yn, "{x:?} / {y:?}");
                    assert_eq!(u128::from(r), xn % yn, "{x:?} % {y:?}");
                    assert!(r < y);
                    assert_eq!(q * y + r, x);
                }

                let y64 = y.lo;
                assert_eq!(u128::from(x + y64), xn.wrapping_add(y64 as u128));
                assert_eq!(u128::from(x - y64), xn.wrapping_sub(y64 as u128));
                assert_eq!(u128::from(x * y64), xn.wrapping_mul(y64 as u128));
                if y64 != 0 {
                    let (q, r) = x.quo_rem_u64(y64).unwrap();
                    assert_eq!(u128::from(q), xn / y64 as u128);
                    assert_eq!(r as u128, xn % y64 as u128);
                }
                assert_eq!(x.cmp_u64(y64), xn.cmp(&(y64 as u128)));

                assert_eq!(u128::from(x & y), xn & yn);
                assert_eq!(u128::from(x | y), xn | yn);
                assert_eq!(u128::from(x ^ y), xn ^ yn);
                assert_eq!(u128::from(x.and_not(y)), xn & !yn);
                assert_eq!(u128::from(x & y64), xn & y64 as u128);
                assert_eq!(u128::from(x | y64), xn | y64 as u128);
                assert_eq!(u128::from(x ^ y64), xn ^ y64 as u128);
                assert_eq!(u128::from(x.and_not_u64(y64)), xn & !(y64 as u128));

                let n = (y.lo & 0xFF) as u32;
                assert_eq!(u128::from(x << n), xn.checked_shl(n).unwrap_or(0));
                assert_eq!(u128::from(x >> n), xn.checked_shr(n).unwrap_or(0));
            }
            assert_eq!(u128::from(!x), !xn);
        }
    }

    #[test]
    fn test_full_mul_matches_native_halves() {
        let values = samples(100);
        for &x in &values {
            for &y in &values {
                let (hi, lo) = mul(x, y);
                // Split each operand into 64-bit halves and rebuild the product.
                let (xl, xh) = (x.lo as u128, x.hi as u128);
                let (yl, yh) = (y.lo as u128, y.hi as u128);
                let ll = xl * yl;
                let lh = xl * yh;
                let hl = xh * yl;
                let hh = xh * yh;
                let mid = (ll >> 64) + (lh & u64::MAX as u128) + (hl & u64::MAX as u128);
                let expected_lo = (ll & u64::MAX as u128) | (mid << 64);
                let expected_hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);
                assert_eq!(u128::from(lo), expected_lo);
                assert_eq!(u128::from(hi), expected_hi);
            }
        }
    }

    #[test]
    fn test_div_errors() {
        assert_eq!(
            div(Uint128::ONE, Uint128::ONE, Uint128::ZERO),
            Err(ArithmeticError::DivideByZero)
        );
        assert_eq!(
            div(Uint128::ZERO, Uint128::ZERO, Uint128::ZERO),
            Err(ArithmeticError::DivideByZero)
        );
        assert_eq!(
            div(Uint128::MAX, Uint128::ONE, Uint128::ONE),
            Err(ArithmeticError::Overflow)
        );
        assert_eq!(
            div(Uint128::MAX, Uint128::MAX, Uint128::ONE),
            Err(ArithmeticError::Overflow)
        );
        let y = Uint128 { lo: 5, hi: 9 };
        assert_eq!(div(y, Uint128::ZERO, y), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_div_reconstructs_dividend() {
        let values = samples(20);
        for &hi in &values {
            for &lo in &values {
                for &y in &values {
                    if y <= hi {
                        assert!(div(hi, lo, y).is_err());
                        continue;
                    }
                    let (q, r) = div(hi, lo, y).unwrap();
                    assert!(r < y);
                    // q * y + r == (hi, lo) as a 256-bit value.
                    let (phi, plo) = mul(q, y);
                    let (slo, carry) = add(plo, r, false);
                    let shi = phi.wrapping_add_u64(carry as u64);
                    assert_eq!((shi, slo), (hi, lo), "({hi:?}, {lo:?}) / {y:?}");
                }
            }
        }
    }

    #[test]
    fn test_div_with_zero_upper_half_matches_native() {
        let values = samples(60);
        for &x in &values {
            for &y in values.iter().filter(|y| !y.is_zero()) {
                let (q, r) = div(Uint128::ZERO, x, y).unwrap();
                let (nx, ny) = (u128::from(x), u128::from(y));
                assert_eq!(
                    (u128::from(q), u128::from(r)),
                    (nx / ny, nx % ny),
                    "{x:?} / {y:?}"
                );
            }
        }
    }

    #[test]
    fn test_div_corrects_trial_quotient() {
        // Divisors whose low half dominates the trial product after normalization.
        let divisors = [
            Uint128::from_limbs([u64::MAX, 1 << 63]),
            Uint128::from_limbs([u64::MAX, 1]),
            Uint128::from_limbs([u64::MAX - 1, 0x8000_0000_0000_0001]),
            Uint128::from_limbs([1 << 63, 3]),
        ];
        let dividends = [Uint128::ZERO, Uint128::MAX, Uint128::from_limbs([0, u64::MAX])];
        for y in divisors {
            let hi = y.wrapping_sub_u64(1);
            for lo in dividends.into_iter().chain([y]) {
                let (q, r) = div(hi, lo, y).unwrap();
                assert!(r < y);
                let (phi, plo) = mul(q, y);
                let (slo, carry) = add(plo, r, false);
                assert_eq!((phi.wrapping_add_u64(carry as u64), slo), (hi, lo));
            }
        }
    }

    #[test]
    fn test_quo_rem_divide_by_zero() {
        assert_eq!(
            Uint128::ZERO.quo_rem(Uint128::ZERO),
            Err(ArithmeticError::DivideByZero)
        );
        assert_eq!(
            Uint128::MAX.quo_rem_u64(0),
            Err(ArithmeticError::DivideByZero)
        );
        assert_eq!(Uint128::MAX.checked_div(Uint128::ZERO), None);
        assert_eq!(Uint128::MAX.checked_rem_u64(0), None);
        assert_eq!(Uint128::MAX.checked_div_u64(1), Some(Uint128::MAX));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = Uint128::ONE / Uint128::ZERO;
    }

    #[test]
    fn test_shift_boundaries() {
        let x = Uint128 {
            lo: 0x0123_4567_89ab_cdef,
            hi: 0xfedc_ba98_7654_3210,
        };
        let xn = u128::from(x);
        for n in 0..=130u32 {
            assert_eq!(u128::from(x.shl(n)), xn.checked_shl(n).unwrap_or(0), "shl {n}");
            assert_eq!(u128::from(x.shr(n)), xn.checked_shr(n).unwrap_or(0), "shr {n}");
        }
        assert_eq!(x.shl(u32::MAX), Uint128::ZERO);
    }

    #[test]
    fn test_rotate_matches_native() {
        let x = Uint128 {
            lo: 0x0123_4567_89ab_cdef,
            hi: 0xfedc_ba98_7654_3210,
        };
        let xn = u128::from(x);
        for k in -300..=300i32 {
            let n = k.rem_euclid(128) as u32;
            assert_eq!(u128::from(x.rotate_left(k)), xn.rotate_left(n), "rotl {k}");
            assert_eq!(u128::from(x.rotate_right(k)), xn.rotate_right(n), "rotr {k}");
            assert_eq!(x.rotate_left(k), x.rotate_right(128 - k.rem_euclid(128)));
        }
        assert_eq!(x.rotate_left(0), x);
        assert_eq!(x.rotate_left(128), x);
        assert_eq!(x.rotate_left(i32::MIN), x);
    }

    #[test]
    fn test_bit_counting_matches_native() {
        for x in samples(300) {
            let xn = u128::from(x);
            assert_eq!(x.leading_zeros(), xn.leading_zeros());
            assert_eq!(x.trailing_zeros(), xn.trailing_zeros());
            assert_eq!(x.count_ones(), xn.count_ones());
            assert_eq!(x.bit_len(), 128 - xn.leading_zeros());
            assert_eq!(u128::from(x.reverse_bits()), xn.reverse_bits());
            assert_eq!(u128::from(x.swap_bytes()), xn.swap_bytes());
            assert_eq!(x.count_ones() + (!x).count_ones(), 128);
            if !x.is_zero() {
                assert_eq!(x.leading_zeros() + x.bit_len(), 128);
            }
        }
        assert_eq!(Uint128::ZERO.bit_len(), 0);
        assert_eq!(Uint128::ZERO.leading_zeros(), 128);
        assert_eq!(Uint128::ZERO.trailing_zeros(), 128);
    }

    #[test]
    fn test_comparison_with_u64() {
        let x = Uint128 { lo: 0, hi: 1 };
        assert!(x > u64::MAX);
        assert_eq!(x.cmp_u64(0), Ordering::Greater);
        assert_eq!(Uint128::from(7u64), 7u64);
        assert!(Uint128::from(7u64) < 8u64);
        assert!(!x.equals_u64(0));
    }

    #[test]
    fn test_assign_operators() {
        let mut x = Uint128::from(10u64);
        x += Uint128::from(5u64);
        x -= 3u64;
        x *= 4u64;
        x /= Uint128::from(6u64);
        assert_eq!(x, 8u64);
        x <<= 70;
        x >>= 69;
        assert_eq!(x, 16u64);
        x |= 1u64;
        x &= Uint128::MAX;
        x ^= 16u64;
        assert_eq!(x, 1u64);
        assert_eq!(Uint128::MAX % 10u64, 5);
    }

    #[test]
    fn test_limbs_and_u128_conversion() {
        let x = Uint128::from_limbs([1, 2]);
        assert_eq!(x.to_limbs(), [1, 2]);
        assert_eq!(Uint128::from(u128::MAX), Uint128::MAX);
        assert_eq!(u128::from(Uint128::MAX), u128::MAX);
        assert_eq!(Uint128::zero(), Uint128::default());
        assert_eq!(Uint128::max(), Uint128::MAX);
        assert_eq!(Uint128::one(), 1u64);
    }
}
