//! Serialize big numbers as their canonical text.
//!
//! Strings are used because most data formats cannot hold an integer of
//! arbitrary width, and none can hold an exact fraction.

use crate::int::BigInteger;
use crate::rational::Rational;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInteger {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for Rational {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
