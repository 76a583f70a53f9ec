//! Arithmetic operators for `Rational`.

use super::Rational;
use crate::error::{Error, Result};
use crate::int::BigInteger;
use crate::lib::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use crate::lib::*;
use crate::num::lcm;

impl Rational {
    fn add_ref(&self, other: &Rational) -> Rational {
        let common = lcm(&self.denominator, &other.denominator);
        let lhs = &self.signed_numerator() * &(&common / &self.denominator);
        let rhs = &other.signed_numerator() * &(&common / &other.denominator);
        Rational::from_parts(lhs + rhs, common, false)
    }

    fn sub_ref(&self, other: &Rational) -> Rational {
        self.add_ref(&-other)
    }

    fn mul_ref(&self, other: &Rational) -> Rational {
        Rational::from_parts(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
            self.negative != other.negative,
        )
    }

    fn div_ref(&self, other: &Rational) -> Rational {
        match self.checked_div(other) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    /// Exact division, or `DivisionByZero` if `other` is zero.
    ///
    /// ```
    /// use bigrat::Rational;
    ///
    /// let x = Rational::new(3, 4).unwrap();
    /// let y = Rational::new(-9, 2).unwrap();
    /// assert_eq!(x.checked_div(&y).unwrap().to_string(), "-1/6");
    /// assert!(x.checked_div(&Rational::zero()).is_err());
    /// ```
    pub fn checked_div(&self, other: &Rational) -> Result<Rational> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }
        Ok(Rational::from_parts(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
            self.negative != other.negative,
        ))
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(mut self) -> Rational {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident => $by_ref:ident) => {
        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                self.$by_ref(other)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: Rational) -> Rational {
                self.$by_ref(&other)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                self.$by_ref(other)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: Rational) -> Rational {
                self.$by_ref(&other)
            }
        }

        impl $assign_imp<&Rational> for Rational {
            #[inline]
            fn $assign_method(&mut self, other: &Rational) {
                *self = self.$by_ref(other);
            }
        }

        impl $assign_imp<Rational> for Rational {
            #[inline]
            fn $assign_method(&mut self, other: Rational) {
                *self = self.$by_ref(&other);
            }
        }

        forward_binop!(@convert $imp, $method, $assign_imp, $assign_method => $by_ref;
            BigInteger i32 i64 u32 u64);
    };

    (@convert $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident => $by_ref:ident;
        $($ty:ident)*) => {
        $(
            impl $imp<$ty> for &Rational {
                type Output = Rational;

                #[inline]
                fn $method(self, other: $ty) -> Rational {
                    self.$by_ref(&Rational::from(other))
                }
            }

            impl $imp<$ty> for Rational {
                type Output = Rational;

                #[inline]
                fn $method(self, other: $ty) -> Rational {
                    self.$by_ref(&Rational::from(other))
                }
            }

            impl $assign_imp<$ty> for Rational {
                #[inline]
                fn $assign_method(&mut self, other: $ty) {
                    *self = self.$by_ref(&Rational::from(other));
                }
            }
        )*
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign => add_ref);
forward_binop!(impl Sub, sub, SubAssign, sub_assign => sub_ref);
forward_binop!(impl Mul, mul, MulAssign, mul_assign => mul_ref);
forward_binop!(impl Div, div, DivAssign, div_assign => div_ref);

impl iter::Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, r| acc + r)
    }
}

impl iter::Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, r| acc * r)
    }
}
