//! When parsing or dividing big numbers goes wrong.

use crate::lib::*;
use serde::{de, ser};
#[cfg(feature = "std")]
use std::{error, io};

/// This type represents all possible errors that can occur when parsing big
/// numbers from text or when dividing them.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// Most arithmetic never fails, and the happy path should not pay for a
    /// wide `Result`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigrat::Error`.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// One-based line number at which the error was detected.
    ///
    /// Only errors produced while reading a stream of tokens carry a
    /// position. Errors from parsing a single string or from arithmetic report
    /// line 0.
    pub fn line(&self) -> usize {
        self.err.line
    }

    /// One-based column number of the first character of the offending token.
    ///
    /// Zero when the error has no associated input position.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to read bytes from an IO stream
    /// - `Category::Syntax` - input that is not a well-formed number
    /// - `Category::Arithmetic` - an operation that has no defined result
    /// - `Category::Data` - a well-formed value that cannot be used as requested
    /// - `Category::Eof` - the input ended before a value was found
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Message(_) | ErrorCode::NumberOutOfRange => Category::Data,
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::EofWhileParsingValue => Category::Eof,
            ErrorCode::InvalidFormat | ErrorCode::TrailingCharacters => Category::Syntax,
            ErrorCode::DivisionByZero => Category::Arithmetic,
        }
    }

    /// Returns true if this error was caused by a failure to read bytes on an
    /// IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by text that is not a
    /// well-formed number.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by an arithmetic operation with
    /// no defined result, such as division by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by a value that is well formed
    /// but not usable as requested.
    ///
    /// For example, converting `2^64` into a `u64` is a data error.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by reaching the end of the input
    /// before any value was found.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }
}

/// Categorizes the cause of a `bigrat::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to read bytes on an IO stream.
    Io,

    /// The error was caused by text that is not a well-formed number.
    Syntax,

    /// The error was caused by an operation that has no defined result.
    Arithmetic,

    /// The error was caused by a value that is valid but cannot be used as
    /// requested.
    Data,

    /// The error was caused by prematurely reaching the end of the input.
    Eof,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `bigrat::Error` into an `io::Error`.
    ///
    /// Syntax, arithmetic and data errors are turned into `InvalidData` IO
    /// errors. EOF errors are turned into `UnexpectedEof` IO errors.
    fn from(j: Error) -> Self {
        if let ErrorCode::Io(err) = j.err.code {
            err
        } else {
            match j.classify() {
                Category::Io => unreachable!(),
                Category::Syntax | Category::Arithmetic | Category::Data => {
                    io::Error::new(io::ErrorKind::InvalidData, j)
                }
                Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, j),
            }
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    line: usize,
    column: usize,
}

/// This type describes all possible errors that can occur when parsing or
/// dividing big numbers.
pub enum ErrorCode {
    /// Catchall for messages produced through serde.
    Message(Box<str>),

    /// Some IO error occurred while reading input.
    #[cfg(feature = "std")]
    Io(io::Error),

    /// Input ended before any value was found.
    EofWhileParsingValue,

    /// Text that is not a well-formed integer or rational number.
    InvalidFormat,

    /// More tokens followed the single value that was expected.
    TrailingCharacters,

    /// Division or remainder by zero, or a rational with a zero denominator.
    DivisionByZero,

    /// Value does not fit in the requested primitive type.
    NumberOutOfRange,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => f.debug_tuple("Io").finish(),
            ErrorCode::EofWhileParsingValue => f.write_str("EofWhileParsingValue"),
            ErrorCode::InvalidFormat => f.write_str("InvalidFormat"),
            ErrorCode::TrailingCharacters => f.write_str("TrailingCharacters"),
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::NumberOutOfRange => f.write_str("NumberOutOfRange"),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::Message(l0), ErrorCode::Message(r0)) => l0 == r0,
            #[cfg(feature = "std")]
            (ErrorCode::Io(_), ErrorCode::Io(_)) => true,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error::at(code, 0, 0)
    }

    #[cold]
    pub(crate) fn at(code: ErrorCode, line: usize, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, line, column }),
        }
    }

    #[cfg(feature = "std")]
    #[cold]
    pub(crate) fn io(error: io::Error) -> Self {
        Error::new(ErrorCode::Io(error))
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error::new(ErrorCode::DivisionByZero)
    }

    #[cold]
    pub(crate) fn invalid_format() -> Self {
        Error::new(ErrorCode::InvalidFormat)
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error::new(ErrorCode::NumberOutOfRange)
    }

    /// Attach a position to an error that does not have one yet.
    #[cold]
    pub(crate) fn fix_position<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorCode) -> Error,
    {
        if self.err.line == 0 {
            f(self.err.code)
        } else {
            self
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            #[cfg(feature = "std")]
            ErrorCode::Io(err) => Display::fmt(err, f),
            ErrorCode::EofWhileParsingValue => f.write_str("EOF while parsing a value"),
            ErrorCode::InvalidFormat => f.write_str("invalid format"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
        }
    }
}

impl serde::de::StdError for Error {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(
                f,
                "{} at line {} column {}",
                self.code, self.line, self.column
            )
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            self.err.code.to_string(),
            self.err.line,
            self.err.column
        )
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

fn make_error(msg: String) -> Error {
    Error::new(ErrorCode::Message(msg.into_boxed_str()))
}
