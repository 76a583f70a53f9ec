//! # bigrat
//!
//! Exact arithmetic on integers of unbounded magnitude and on the rational
//! numbers built from them.
//!
//! The crate provides two value types:
//!
//! * [`BigInteger`]: a signed integer stored as a sign flag plus a sequence of
//!   base 10<sup>9</sup> limbs. It supports the full set of arithmetic and
//!   comparison operators with the same truncating semantics as Rust's
//!   primitive integers.
//! * [`Rational`]: a fraction kept in lowest terms at all times, with a
//!   positive denominator and a single sign flag.
//!
//! Both types behave like plain values: cloning copies the digits, and no two
//! values ever share storage.
//!
//! ```
//! use bigrat::{BigInteger, Rational};
//!
//! let a: BigInteger = "1000000000000000000000000000000000".parse().unwrap();
//! let b = BigInteger::from(-1000000);
//! assert_eq!((&a * &b).to_string(), "-1000000000000000000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "-1000000000000000000000000000");
//!
//! let third = Rational::new(1, 3).unwrap();
//! assert_eq!((&third + &third).to_string(), "2/3");
//! assert_eq!(third.to_decimal(5), "0.33333");
//! ```
//!
//! # Parsing text
//!
//! Both types implement [`FromStr`](core::str::FromStr). For input holding
//! several whitespace-separated values, [`from_tokens`] returns an iterator
//! that reports the line and column of any malformed token.
//!
//! ```
//! use bigrat::BigInteger;
//!
//! let values = bigrat::from_tokens::<BigInteger>("26 5\n-7")
//!     .collect::<bigrat::Result<Vec<_>>>()
//!     .unwrap();
//! assert_eq!(values, [26, 5, -7].map(BigInteger::from));
//!
//! let err = bigrat::from_tokens::<BigInteger>("1 2\n x3")
//!     .nth(2)
//!     .unwrap()
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "invalid format at line 2 column 2");
//! ```
//!
//! # Division by zero
//!
//! The `/` and `%` operators panic on a zero divisor, exactly as they do for
//! primitive integers. Every dividing operation also has a `checked_*` form
//! returning an [`Error`] with [`ErrorCode::DivisionByZero`].
//!
//! ```
//! use bigrat::{BigInteger, ErrorCode};
//!
//! let err = BigInteger::from(1).checked_div(&BigInteger::zero()).unwrap_err();
//! assert_eq!(*err.code(), ErrorCode::DivisionByZero);
//! ```

#![doc(html_root_url = "https://docs.rs/bigrat/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::needless_doctest_main,
    clippy::should_implement_trait
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;
extern crate serde_core as serde;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("bigrat requires that either `std` (default) or `alloc` feature is enabled");

mod lib {
    pub use core::cmp::{self, Ordering};
    pub use core::fmt::{self, Debug, Display};
    pub use core::hash::{Hash, Hasher};
    pub use core::iter;
    pub use core::marker::PhantomData;
    pub use core::mem;
    pub use core::ops;
    pub use core::str::{self, FromStr};

    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

// We only use our own error type; no need for From conversions provided by the
// standard library's try! macro.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::int::BigInteger;
#[doc(inline)]
pub use crate::num::{gcd, lcm, pow10};
#[doc(inline)]
pub use crate::rational::Rational;
#[doc(inline)]
pub use crate::stream::{from_str, from_tokens, StreamParser};

#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::stream::from_reader;

mod de;
pub mod error;
mod int;
mod num;
mod rational;
mod ser;
mod stream;
