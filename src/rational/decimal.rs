//! Conversions between `Rational` and decimal text or floats.

use super::Rational;
use crate::error::{Error, Result};
use crate::int::parse::parse_magnitude;
use crate::int::BigInteger;
use crate::lib::*;
use crate::num::pow10;

/// Number of fractional digits rendered before handing the text to the float
/// parser in `to_f64`.
const F64_DECIMAL_PRECISION: usize = 15;

/// Largest decimal exponent, in either direction, accepted by the parser.
const MAX_EXPONENT: i64 = 1 << 16;

impl Rational {
    /// Renders the value with exactly `precision` digits after the decimal
    /// point, truncating any further digits.
    ///
    /// A `-` is written for every negative value, even when all the rendered
    /// digits are zero. With a precision of zero the point is still written,
    /// after the last digit.
    ///
    /// ```
    /// use bigrat::Rational;
    ///
    /// let r = Rational::new(-22, 7).unwrap();
    /// assert_eq!(r.to_decimal(10), "-3.1428571428");
    /// assert_eq!(Rational::new(1, 800).unwrap().to_decimal(5), "0.00125");
    /// assert_eq!(Rational::new(7, 2).unwrap().to_decimal(0), "3.");
    /// ```
    pub fn to_decimal(&self, precision: usize) -> String {
        let scaled = &(&self.numerator * &pow10(precision)) / &self.denominator;
        let digits = scaled.to_string();

        let mut out = String::with_capacity(digits.len() + precision + 3);
        if self.negative {
            out.push('-');
        }
        if digits.len() > precision {
            let (whole, fraction) = digits.split_at(digits.len() - precision);
            out.push_str(whole);
            out.push('.');
            out.push_str(fraction);
        } else {
            out.push_str("0.");
            for _ in digits.len()..precision {
                out.push('0');
            }
            out.push_str(&digits);
        }
        out
    }

    /// Approximates the value as an `f64` by rendering fifteen decimal
    /// places and parsing the result.
    ///
    /// This is not guaranteed to produce the nearest representable double.
    pub fn to_f64(&self) -> f64 {
        let text = self.to_decimal(F64_DECIMAL_PRECISION);
        let magnitude = text.trim_start_matches('-');
        let value = magnitude.parse::<f64>().unwrap_or(f64::INFINITY);
        if self.negative {
            -value
        } else {
            value
        }
    }

    /// Converts a finite `f64` to the exact rational value of its shortest
    /// round-trip decimal representation. Infinite or NaN values have no
    /// rational equivalent.
    ///
    /// ```
    /// use bigrat::Rational;
    ///
    /// assert_eq!(Rational::from_f64(0.1).unwrap().to_string(), "1/10");
    /// assert_eq!(Rational::from_f64(-2.5e-3).unwrap().to_string(), "-1/400");
    /// assert!(Rational::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(f: f64) -> Option<Rational> {
        if !f.is_finite() {
            return None;
        }
        let mut buffer = zmij::Buffer::new();
        parse_decimal(buffer.format(f).as_bytes()).ok()
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Accepts an integer (`-12`), a fraction (`-12/35`) or a decimal with an
    /// optional exponent (`-1.25e-3`).
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        match memchr::memchr(b'/', bytes) {
            Some(slash) => {
                let numerator = tri!(BigInteger::parse(&s[..slash]));
                let denominator = tri!(BigInteger::parse(&s[slash + 1..]));
                Rational::new(numerator, denominator)
            }
            None => parse_decimal(bytes),
        }
    }
}

/// Parses `['-'] digit+ ['.' digit*] [('e' | 'E') ['+' | '-'] digit+]`.
fn parse_decimal(bytes: &[u8]) -> Result<Rational> {
    let (negative, bytes) = match bytes {
        [b'-', rest @ ..] => (true, rest),
        _ => (false, bytes),
    };

    let (mantissa, exponent) = match memchr::memchr2(b'e', b'E', bytes) {
        Some(e) => (&bytes[..e], Some(&bytes[e + 1..])),
        None => (bytes, None),
    };

    let (whole, fraction) = match memchr::memchr(b'.', mantissa) {
        Some(dot) => (&mantissa[..dot], &mantissa[dot + 1..]),
        None => (mantissa, &mantissa[mantissa.len()..]),
    };

    // Every digit of the mantissa goes into the numerator; the fraction
    // length becomes a negative power of ten.
    let mut digits = Vec::with_capacity(whole.len() + fraction.len());
    digits.extend_from_slice(whole);
    digits.extend_from_slice(fraction);
    if whole.is_empty() {
        return Err(Error::invalid_format());
    }
    let limbs = tri!(parse_magnitude(&digits));
    let numerator = BigInteger::from_limbs(limbs, negative);

    let shift = match exponent {
        Some(exponent) => tri!(parse_exponent(exponent)),
        None => 0,
    } - fraction.len() as i64;

    let magnitude = pow10(shift.unsigned_abs() as usize);
    let r = if shift >= 0 {
        Rational::from_parts(numerator * magnitude, BigInteger::one(), false)
    } else {
        Rational::from_parts(numerator, magnitude, false)
    };
    Ok(r)
}

fn parse_exponent(bytes: &[u8]) -> Result<i64> {
    let (negative, digits) = match bytes {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(Error::invalid_format());
    }
    let mut exp: i64 = 0;
    for &b in digits {
        exp = match exp
            .checked_mul(10)
            .and_then(|exp| exp.checked_add(i64::from(b - b'0')))
        {
            Some(exp) if exp <= MAX_EXPONENT => exp,
            _ => return Err(Error::out_of_range()),
        };
    }
    Ok(if negative { -exp } else { exp })
}
