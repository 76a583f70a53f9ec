//! Number-theory helpers shared by the rational layer.

use crate::int::math::{BASE, BASE_DIGITS};
use crate::int::BigInteger;

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0)` is `a`. The operands are expected to be non-negative; with a
/// negative operand the result carries whatever sign the last nonzero
/// remainder had.
///
/// ```
/// use bigrat::{gcd, BigInteger};
///
/// let g = gcd(&BigInteger::from(462), &BigInteger::from(1071));
/// assert_eq!(g, BigInteger::from(21));
/// ```
pub fn gcd(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let mut a = a.clone();
    let mut b = b.clone();
    while b.is_nonzero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, computed as `a / gcd(a, b) * b`.
///
/// `lcm(0, 0)` is zero.
pub fn lcm(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let g = gcd(a, b);
    if g.is_zero() {
        return BigInteger::zero();
    }
    &(a / &g) * b
}

/// Returns 10<sup>`exp`</sup>.
///
/// Whole limbs are multiplied in first, nine digits at a time, and the last
/// few digits one factor of ten at a time.
///
/// ```
/// assert_eq!(bigrat::pow10(20).to_string(), "100000000000000000000");
/// ```
pub fn pow10(mut exp: usize) -> BigInteger {
    let mut n = BigInteger::one();
    while exp >= BASE_DIGITS {
        n *= BASE;
        exp -= BASE_DIGITS;
    }
    while exp > 0 {
        n *= 10u32;
        exp -= 1;
    }
    n
}
