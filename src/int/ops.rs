//! Arithmetic operators for `BigInteger`.
//!
//! Every operator funnels into one of the by-reference methods below, and
//! every compound assignment computes the full result from its operands before
//! replacing the receiver.

use super::math;
use super::BigInteger;
use crate::error::{Error, Result};
use crate::lib::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use crate::lib::*;

impl BigInteger {
    /// Sign-magnitude addition where the right operand's sign is supplied
    /// separately, so that subtraction does not have to clone to negate.
    fn add_signed(&self, other: &BigInteger, other_negative: bool) -> BigInteger {
        if self.negative == other_negative {
            return BigInteger::from_limbs(math::add(&self.limbs, &other.limbs), self.negative);
        }
        // Mixed signs: the operand with the larger magnitude decides the sign.
        match math::compare(&self.limbs, &other.limbs) {
            Ordering::Less => {
                BigInteger::from_limbs(math::sub(&other.limbs, &self.limbs), other_negative)
            }
            Ordering::Equal | Ordering::Greater => {
                BigInteger::from_limbs(math::sub(&self.limbs, &other.limbs), self.negative)
            }
        }
    }

    fn add_ref(&self, other: &BigInteger) -> BigInteger {
        self.add_signed(other, other.negative)
    }

    fn sub_ref(&self, other: &BigInteger) -> BigInteger {
        self.add_signed(other, !other.negative)
    }

    fn mul_ref(&self, other: &BigInteger) -> BigInteger {
        BigInteger::from_limbs(
            math::mul(&self.limbs, &other.limbs),
            self.negative != other.negative,
        )
    }

    fn div_ref(&self, other: &BigInteger) -> BigInteger {
        match self.checked_div(other) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    fn rem_ref(&self, other: &BigInteger) -> BigInteger {
        match self.checked_rem(other) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }

    /// Truncating division returning both quotient and remainder.
    ///
    /// The quotient is rounded toward zero and carries the XOR of the operand
    /// signs. The remainder equals `self - quotient * other`, so it carries
    /// the sign of `self`, as with primitive integers.
    ///
    /// ```
    /// use bigrat::BigInteger;
    ///
    /// let (q, r) = BigInteger::from(-26).div_rem(&BigInteger::from(5)).unwrap();
    /// assert_eq!((q, r), (BigInteger::from(-5), BigInteger::from(-1)));
    /// ```
    pub fn div_rem(&self, other: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }
        let (quotient, remainder) = math::div_rem(&self.limbs, &other.limbs);
        Ok((
            BigInteger::from_limbs(quotient, self.negative != other.negative),
            BigInteger::from_limbs(remainder, self.negative),
        ))
    }

    /// Truncating division, or `DivisionByZero` if `other` is zero.
    pub fn checked_div(&self, other: &BigInteger) -> Result<BigInteger> {
        self.div_rem(other).map(|(quotient, _)| quotient)
    }

    /// Remainder of truncating division, or `DivisionByZero` if `other` is
    /// zero.
    pub fn checked_rem(&self, other: &BigInteger) -> Result<BigInteger> {
        self.div_rem(other).map(|(_, remainder)| remainder)
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident => $by_ref:ident) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, other: &BigInteger) -> BigInteger {
                self.$by_ref(other)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, other: BigInteger) -> BigInteger {
                self.$by_ref(&other)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, other: &BigInteger) -> BigInteger {
                self.$by_ref(other)
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, other: BigInteger) -> BigInteger {
                self.$by_ref(&other)
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, other: &BigInteger) {
                *self = self.$by_ref(other);
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, other: BigInteger) {
                *self = self.$by_ref(&other);
            }
        }

        forward_binop!(@primitive $imp, $method, $assign_imp, $assign_method => $by_ref;
            i8 i16 i32 i64 isize u8 u16 u32 u64 usize);
    };

    (@primitive $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident => $by_ref:ident;
        $($ty:ident)*) => {
        $(
            impl $imp<$ty> for &BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: $ty) -> BigInteger {
                    self.$by_ref(&BigInteger::from(other))
                }
            }

            impl $imp<$ty> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: $ty) -> BigInteger {
                    self.$by_ref(&BigInteger::from(other))
                }
            }

            impl $imp<&BigInteger> for $ty {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: &BigInteger) -> BigInteger {
                    BigInteger::from(self).$by_ref(other)
                }
            }

            impl $imp<BigInteger> for $ty {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: BigInteger) -> BigInteger {
                    BigInteger::from(self).$by_ref(&other)
                }
            }

            impl $assign_imp<$ty> for BigInteger {
                #[inline]
                fn $assign_method(&mut self, other: $ty) {
                    *self = self.$by_ref(&BigInteger::from(other));
                }
            }
        )*
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign => add_ref);
forward_binop!(impl Sub, sub, SubAssign, sub_assign => sub_ref);
forward_binop!(impl Mul, mul, MulAssign, mul_assign => mul_ref);
forward_binop!(impl Div, div, DivAssign, div_assign => div_ref);
forward_binop!(impl Rem, rem, RemAssign, rem_assign => rem_ref);

impl iter::Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, n| acc + n)
    }
}

impl<'a> iter::Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, n| acc + n)
    }
}

impl iter::Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, n| acc * n)
    }
}

impl<'a> iter::Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, n| acc * n)
    }
}
