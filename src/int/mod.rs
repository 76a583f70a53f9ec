//! The sign-magnitude integer type.

use crate::error::{Error, Result};
use crate::lib::*;

pub(crate) mod math;
mod ops;
pub(crate) mod parse;

use self::math::Limb;

/// A signed integer of unbounded magnitude.
///
/// The value is held as a sign flag plus a magnitude stored in base
/// 10<sup>9</sup> limbs, least significant first. The representation is
/// always canonical: there are no leading zero limbs, and zero is never
/// negative. Two `BigInteger`s are therefore equal exactly when their fields
/// are equal, which is what the derived `PartialEq` and `Hash` compare.
///
/// ```
/// use bigrat::BigInteger;
///
/// let a = BigInteger::from(26);
/// let b = BigInteger::from(5);
/// assert_eq!(&a + &b, BigInteger::from(31));
/// assert_eq!(&a / &b, BigInteger::from(5));
/// assert_eq!(&a % &b, BigInteger::from(1));
/// assert_eq!(&b - &a, BigInteger::from(-21));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    /// Magnitude in little-endian order.
    limbs: Vec<Limb>,
    negative: bool,
}

impl BigInteger {
    /// Returns the integer 0.
    pub fn zero() -> Self {
        BigInteger::from_limbs(Vec::from([0]), false)
    }

    /// Returns the integer 1.
    pub fn one() -> Self {
        BigInteger::from_limbs(Vec::from([1]), false)
    }

    /// Build from raw little-endian limbs, restoring the canonical form.
    pub(crate) fn from_limbs(mut limbs: Vec<Limb>, negative: bool) -> Self {
        math::normalize(&mut limbs);
        let mut n = BigInteger { limbs, negative };
        n.normalize();
        n
    }

    /// Clears a negative sign left on zero. Leading limbs are trimmed by
    /// `math::normalize` before a value gets here.
    fn normalize(&mut self) {
        if math::is_zero(&self.limbs) {
            self.negative = false;
        }
    }

    /// Returns true if the value is zero.
    ///
    /// This is the integer's truthiness: every other value is "true".
    #[inline]
    pub fn is_zero(&self) -> bool {
        math::is_zero(&self.limbs)
    }

    /// Returns true if the value is not zero.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Returns true if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns -1, 0 or 1 according to the sign of the value.
    pub fn signum(&self) -> BigInteger {
        if self.is_zero() {
            BigInteger::zero()
        } else {
            BigInteger::from_limbs(Vec::from([1]), self.negative)
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInteger {
        BigInteger {
            limbs: self.limbs.clone(),
            negative: false,
        }
    }

    /// Consumes the value and returns its absolute value without copying the
    /// limbs.
    pub fn into_abs(mut self) -> BigInteger {
        self.negative = false;
        self
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    pub fn digit_count(&self) -> usize {
        let top = self.limbs[self.limbs.len() - 1];
        let mut top_digits = 1;
        let mut rest = top / 10;
        while rest != 0 {
            top_digits += 1;
            rest /= 10;
        }
        (self.limbs.len() - 1) * math::BASE_DIGITS + top_digits
    }

    /// Flips the sign, renormalizing so that negating zero stays zero.
    pub(crate) fn negate(&mut self) {
        self.negative = !self.negative;
        self.normalize();
    }

    /// Compare by sign first, then by magnitude with the conclusion flipped
    /// when both values are negative.
    fn compare(&self, other: &BigInteger) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => math::compare(&self.limbs, &other.limbs),
            (true, true) => math::compare(&other.limbs, &self.limbs),
        }
    }

    /// Pre-increment: adds one and returns the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self += 1i32;
        self
    }

    /// Post-increment: adds one and returns the value from before.
    pub fn post_increment(&mut self) -> BigInteger {
        let previous = self.clone();
        *self += 1i32;
        previous
    }

    /// Pre-decrement: subtracts one and returns the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1i32;
        self
    }

    /// Post-decrement: subtracts one and returns the value from before.
    pub fn post_decrement(&mut self) -> BigInteger {
        let previous = self.clone();
        *self -= 1i32;
        previous
    }

    /// Raises the value to the power `exp` by repeated squaring.
    ///
    /// ```
    /// use bigrat::BigInteger;
    ///
    /// let n = BigInteger::from(-3).pow(41);
    /// assert_eq!(n.to_string(), "-36472996377170786403");
    /// ```
    pub fn pow(&self, mut exp: u32) -> BigInteger {
        let mut base = self.clone();
        let mut acc = BigInteger::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Approximates the value as the nearest-ish `f64`.
    ///
    /// Values beyond `f64::MAX` become infinite.
    pub fn to_f64(&self) -> f64 {
        let mut acc = 0f64;
        for &limb in self.limbs.iter().rev() {
            acc = acc * math::BASE as f64 + limb as f64;
        }
        if self.negative {
            -acc
        } else {
            acc
        }
    }

    /// Converts to `u128` if the value fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        math::to_u128(&self.limbs)
    }

    /// Converts to `i128` if the value fits.
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = math::to_u128(&self.limbs)?;
        if self.negative {
            if magnitude == i128::MIN.unsigned_abs() {
                Some(i128::MIN)
            } else {
                i128::try_from(magnitude).ok().map(|m| -m)
            }
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    /// Converts to `u64` if the value fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    /// Converts to `i64` if the value fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Display for BigInteger {
    /// Writes the most significant limb unpadded and every following limb
    /// zero-padded to nine digits.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * math::BASE_DIGITS);
        let mut buffer = itoa::Buffer::new();
        let mut iter = self.limbs.iter().rev();
        if let Some(&top) = iter.next() {
            digits.push_str(buffer.format(top));
        }
        for &limb in iter {
            let printed = buffer.format(limb);
            for _ in printed.len()..math::BASE_DIGITS {
                digits.push('0');
            }
            digits.push_str(printed);
        }
        formatter.pad_integral(!self.negative, "", &digits)
    }
}

impl Debug for BigInteger {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInteger({})", self)
    }
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(i: $ty) -> Self {
                    BigInteger::from_limbs(math::from_u128(i.unsigned_abs() as u128), i < 0)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(u: $ty) -> Self {
                    BigInteger::from_limbs(math::from_u128(u as u128), false)
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 i128 isize);
from_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! try_into_primitive {
    ($($ty:ident => $method:ident,)*) => {
        $(
            impl TryFrom<&BigInteger> for $ty {
                type Error = Error;

                fn try_from(n: &BigInteger) -> Result<Self> {
                    n.$method().ok_or_else(Error::out_of_range)
                }
            }

            impl TryFrom<BigInteger> for $ty {
                type Error = Error;

                fn try_from(n: BigInteger) -> Result<Self> {
                    $ty::try_from(&n)
                }
            }
        )*
    };
}

try_into_primitive! {
    i64 => to_i64,
    u64 => to_u64,
    i128 => to_i128,
    u128 => to_u128,
}
