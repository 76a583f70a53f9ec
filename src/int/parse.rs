//! Decimal text to `BigInteger`.

use super::math::{self, Limb, BASE_DIGITS};
use super::BigInteger;
use crate::error::{Error, Result};
use crate::lib::*;

impl BigInteger {
    /// Parses `['-'] digit+`.
    ///
    /// Leading zeros are ignored, and `"-0"` is zero. Anything else, including
    /// an empty string, a lone `-`, a `+` sign or embedded whitespace, is an
    /// [`InvalidFormat`](crate::ErrorCode::InvalidFormat) error.
    ///
    /// ```
    /// use bigrat::BigInteger;
    ///
    /// let n = BigInteger::parse("-000123456789012").unwrap();
    /// assert_eq!(n.to_string(), "-123456789012");
    /// assert!(BigInteger::parse("12a").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<BigInteger> {
        let (negative, digits) = match s.as_bytes() {
            [b'-', rest @ ..] => (true, rest),
            bytes => (false, bytes),
        };
        let limbs = tri!(parse_magnitude(digits));
        Ok(BigInteger::from_limbs(limbs, negative))
    }
}

/// Group ASCII digits into limbs of nine digits each, aligned to the least
/// significant end.
pub(crate) fn parse_magnitude(digits: &[u8]) -> Result<Vec<Limb>> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(Error::invalid_format());
    }

    // Skip leading zeros, but keep the final digit so "000" still has one.
    let first = digits
        .iter()
        .position(|&b| b != b'0')
        .unwrap_or(digits.len() - 1);
    let digits = &digits[first..];

    let mut limbs = Vec::with_capacity(digits.len() / BASE_DIGITS + 1);
    for chunk in digits.rchunks(BASE_DIGITS) {
        let limb = chunk
            .iter()
            .fold(0, |acc: Limb, &b| acc * 10 + Limb::from(b - b'0'));
        limbs.push(limb);
    }
    math::normalize(&mut limbs);
    Ok(limbs)
}

impl FromStr for BigInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInteger::parse(s)
    }
}
