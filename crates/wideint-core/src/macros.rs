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

// Operator plumbing shared by `Uint128` and `Uint256`.
//
// Both types are a `{ lo, hi }` pair whose halves are the narrower type
// (`u64` for `Uint128`, `Uint128` for `Uint256`), so the bitwise bodies are
// identical for the two widths. Arithmetic operators forward to the inherent
// wrapping methods, whose names differ by the narrow operand suffix.

macro_rules! impl_bitwise_ops {
    ($t:ident, $narrow:ty) => {
        impl core::ops::Not for $t {
            type Output = $t;

            #[inline]
            fn not(self) -> $t {
                $t {
                    lo: !self.lo,
                    hi: !self.hi,
                }
            }
        }

        impl core::ops::BitAnd for $t {
            type Output = $t;

            #[inline]
            fn bitand(self, rhs: $t) -> $t {
                $t {
                    lo: self.lo & rhs.lo,
                    hi: self.hi & rhs.hi,
                }
            }
        }

        impl core::ops::BitOr for $t {
            type Output = $t;

            #[inline]
            fn bitor(self, rhs: $t) -> $t {
                $t {
                    lo: self.lo | rhs.lo,
                    hi: self.hi | rhs.hi,
                }
            }
        }

        impl core::ops::BitXor for $t {
            type Output = $t;

            #[inline]
            fn bitxor(self, rhs: $t) -> $t {
                $t {
                    lo: self.lo ^ rhs.lo,
                    hi: self.hi ^ rhs.hi,
                }
            }
        }

        // A narrow operand has an all-zero upper half.
        impl core::ops::BitAnd<$narrow> for $t {
            type Output = $t;

            #[inline]
            fn bitand(self, rhs: $narrow) -> $t {
                $t {
                    lo: self.lo & rhs,
                    hi: <$narrow as $crate::num::constants::Zero>::ZERO,
                }
            }
        }

        impl core::ops::BitOr<$narrow> for $t {
            type Output = $t;

            #[inline]
            fn bitor(self, rhs: $narrow) -> $t {
                $t {
                    lo: self.lo | rhs,
                    hi: self.hi,
                }
            }
        }

        impl core::ops::BitXor<$narrow> for $t {
            type Output = $t;

            #[inline]
            fn bitxor(self, rhs: $narrow) -> $t {
                $t {
                    lo: self.lo ^ rhs,
                    hi: self.hi,
                }
            }
        }

        impl $t {
            /// Returns `self & !rhs`.
            #[inline]
            pub fn and_not(self, rhs: $t) -> $t {
                $t {
                    lo: self.lo & !rhs.lo,
                    hi: self.hi & !rhs.hi,
                }
            }
        }

        impl_assign_op!($t, BitAndAssign, bitand_assign, $t, &);
        impl_assign_op!($t, BitOrAssign, bitor_assign, $t, |);
        impl_assign_op!($t, BitXorAssign, bitxor_assign, $t, ^);
        impl_assign_op!($t, BitAndAssign, bitand_assign, $narrow, &);
        impl_assign_op!($t, BitOrAssign, bitor_assign, $narrow, |);
        impl_assign_op!($t, BitXorAssign, bitxor_assign, $narrow, ^);
    };
}

macro_rules! impl_assign_op {
    ($t:ident, $trait_name:ident, $method:ident, $rhs:ty, $op:tt) => {
        impl core::ops::$trait_name<$rhs> for $t {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    };
}

macro_rules! forward_binop {
    ($t:ident, $trait_name:ident, $method:ident, $rhs:ty, $out:ty, $inner:ident) => {
        impl core::ops::$trait_name<$rhs> for $t {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                self.$inner(rhs)
            }
        }
    };
}

macro_rules! impl_arith_ops {
    (
        $t:ident,
        $narrow:ty,
        add_narrow = $add_narrow:ident,
        sub_narrow = $sub_narrow:ident,
        mul_narrow = $mul_narrow:ident,
        quo_rem_narrow = $quo_rem_narrow:ident $(,)?
    ) => {
        forward_binop!($t, Add, add, $t, $t, wrapping_add);
        forward_binop!($t, Sub, sub, $t, $t, wrapping_sub);
        forward_binop!($t, Mul, mul, $t, $t, wrapping_mul);
        forward_binop!($t, Add, add, $narrow, $t, $add_narrow);
        forward_binop!($t, Sub, sub, $narrow, $t, $sub_narrow);
        forward_binop!($t, Mul, mul, $narrow, $t, $mul_narrow);
        forward_binop!($t, Shl, shl, u32, $t, shl);
        forward_binop!($t, Shr, shr, u32, $t, shr);

        impl core::ops::Div for $t {
            type Output = $t;

            /// # Panics
            ///
            /// Panics if `rhs` is zero. Use [`Self::quo_rem`] to handle the
            /// error instead.
            #[inline]
            fn div(self, rhs: $t) -> $t {
                match self.quo_rem(rhs) {
                    Ok((quo, _)) => quo,
                    Err(e) => panic!("attempt to divide by zero: {e}"),
                }
            }
        }

        impl core::ops::Rem for $t {
            type Output = $t;

            /// # Panics
            ///
            /// Panics if `rhs` is zero.
            #[inline]
            fn rem(self, rhs: $t) -> $t {
                match self.quo_rem(rhs) {
                    Ok((_, rem)) => rem,
                    Err(e) => {
                        panic!("attempt to calculate the remainder with a divisor of zero: {e}")
                    }
                }
            }
        }

        impl core::ops::Div<$narrow> for $t {
            type Output = $t;

            /// # Panics
            ///
            /// Panics if `rhs` is zero.
            #[inline]
            fn div(self, rhs: $narrow) -> $t {
                match self.$quo_rem_narrow(rhs) {
                    Ok((quo, _)) => quo,
                    Err(e) => panic!("attempt to divide by zero: {e}"),
                }
            }
        }

        impl core::ops::Rem<$narrow> for $t {
            type Output = $narrow;

            /// # Panics
            ///
            /// Panics if `rhs` is zero.
            #[inline]
            fn rem(self, rhs: $narrow) -> $narrow {
                match self.$quo_rem_narrow(rhs) {
                    Ok((_, rem)) => rem,
                    Err(e) => {
                        panic!("attempt to calculate the remainder with a divisor of zero: {e}")
                    }
                }
            }
        }

        impl_assign_op!($t, AddAssign, add_assign, $t, +);
        impl_assign_op!($t, SubAssign, sub_assign, $t, -);
        impl_assign_op!($t, MulAssign, mul_assign, $t, *);
        impl_assign_op!($t, DivAssign, div_assign, $t, /);
        impl_assign_op!($t, RemAssign, rem_assign, $t, %);
        impl_assign_op!($t, AddAssign, add_assign, $narrow, +);
        impl_assign_op!($t, SubAssign, sub_assign, $narrow, -);
        impl_assign_op!($t, MulAssign, mul_assign, $narrow, *);
        impl_assign_op!($t, DivAssign, div_assign, $narrow, /);
        impl_assign_op!($t, ShlAssign, shl_assign, u32, <<);
        impl_assign_op!($t, ShrAssign, shr_assign, u32, >>);
    };
}
