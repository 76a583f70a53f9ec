//! Exact fractions over `BigInteger`.

use crate::error::{Error, Result};
use crate::int::BigInteger;
use crate::lib::*;
use crate::num::gcd;

mod decimal;
mod ops;

/// An exact rational number, always kept in lowest terms.
///
/// The numerator and denominator are stored as non-negative magnitudes and
/// the sign lives in its own flag. After every public operation the
/// denominator is positive, `gcd(numerator, denominator) == 1`, and zero is
/// stored as `0/1` with a positive sign. Since that form is unique, equality
/// and hashing compare the fields directly.
///
/// ```
/// use bigrat::Rational;
///
/// let mut x = Rational::from(5);
/// x += 3;
/// assert_eq!(x, Rational::from(8));
/// x *= 7;
/// x /= 8;
/// x -= 15;
/// assert_eq!(x.to_string(), "-8");
/// assert_eq!((-x).to_string(), "8");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
    negative: bool,
}

impl Rational {
    /// Builds `numerator / denominator` and reduces it to lowest terms.
    ///
    /// Either part may be negative; the signs are folded into the rational's
    /// own sign. A zero denominator is a `DivisionByZero` error.
    ///
    /// ```
    /// use bigrat::Rational;
    ///
    /// let r = Rational::new(6, -8).unwrap();
    /// assert_eq!(r.to_string(), "-3/4");
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Rational>
    where
        N: Into<BigInteger>,
        D: Into<BigInteger>,
    {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::division_by_zero());
        }
        Ok(Rational::from_parts(numerator.into(), denominator, false))
    }

    /// Returns the rational 0.
    pub fn zero() -> Rational {
        Rational::from_integer(BigInteger::zero())
    }

    /// Returns the rational 1.
    pub fn one() -> Rational {
        Rational::from_integer(BigInteger::one())
    }

    /// Wraps an integer as `n/1`.
    pub fn from_integer(n: BigInteger) -> Rational {
        Rational::from_parts(n, BigInteger::one(), false)
    }

    /// Assemble from raw parts and restore every invariant. The denominator
    /// must be nonzero.
    pub(crate) fn from_parts(
        numerator: BigInteger,
        denominator: BigInteger,
        negative: bool,
    ) -> Rational {
        debug_assert!(denominator.is_nonzero());
        let mut r = Rational {
            numerator,
            denominator,
            negative,
        };
        r.reduce();
        r
    }

    /// Moves the signs of numerator and denominator into `self.negative`.
    fn sign_fix(&mut self) {
        let mut flip = false;
        if self.numerator.is_negative() {
            self.numerator.negate();
            flip = !flip;
        }
        if self.denominator.is_negative() {
            self.denominator.negate();
            flip = !flip;
        }
        self.negative ^= flip;
    }

    /// Brings the fraction to lowest terms.
    fn reduce(&mut self) {
        self.sign_fix();
        if self.numerator.is_zero() {
            self.denominator = BigInteger::one();
            self.negative = false;
            return;
        }
        let g = gcd(&self.numerator, &self.denominator);
        if g != BigInteger::one() {
            self.numerator = &self.numerator / &g;
            self.denominator = &self.denominator / &g;
        }
    }

    /// The reduced numerator, always non-negative. The sign is reported by
    /// [`is_negative`](Rational::is_negative).
    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    /// The reduced denominator, always positive.
    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    /// Returns true if the value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denominator == BigInteger::one()
    }

    /// The numerator with the rational's sign applied.
    pub fn signed_numerator(&self) -> BigInteger {
        if self.negative {
            -&self.numerator
        } else {
            self.numerator.clone()
        }
    }

    /// Integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInteger {
        let whole = &self.numerator / &self.denominator;
        if self.negative {
            -whole
        } else {
            whole
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Rational {
        Rational {
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
            negative: false,
        }
    }

    /// Returns `1 / self`, or `DivisionByZero` for zero.
    pub fn checked_recip(&self) -> Result<Rational> {
        if self.is_zero() {
            return Err(Error::division_by_zero());
        }
        Ok(Rational {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
            negative: self.negative,
        })
    }

    /// Returns `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub fn recip(&self) -> Rational {
        match self.checked_recip() {
            Ok(r) => r,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    fn compare(&self, other: &Rational) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            _ => {}
        }
        // Same sign: the sign of the difference is the sign of
        // s*n1*d2 - s*n2*d1.
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        if self.negative {
            rhs.cmp(&lhs)
        } else {
            lhs.cmp(&rhs)
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Display for Rational {
    /// Honors width, fill and alignment for the text as a whole.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        let text = if self.is_integer() {
            alloc::format!("{}{}", sign, self.numerator)
        } else {
            alloc::format!("{}{}/{}", sign, self.numerator, self.denominator)
        };
        formatter.pad(&text)
    }
}

impl Debug for Rational {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Rational({})", self)
    }
}

impl From<BigInteger> for Rational {
    fn from(n: BigInteger) -> Self {
        Rational::from_integer(n)
    }
}

impl From<&BigInteger> for Rational {
    fn from(n: &BigInteger) -> Self {
        Rational::from_integer(n.clone())
    }
}

macro_rules! from_primitive {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Rational {
                #[inline]
                fn from(primitive: $ty) -> Self {
                    Rational::from_integer(BigInteger::from(primitive))
                }
            }
        )*
    };
}

from_primitive!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
