//! Parsing numbers out of whitespace-separated text.

use crate::error::{Error, ErrorCode, Result};
use crate::lib::*;
#[cfg(feature = "std")]
use std::io;

/// Iterator that parses whitespace-separated tokens into values.
///
/// Each token is handed to `T`'s [`FromStr`] implementation. When a token
/// fails to parse, the error carries the line and column at which the token
/// starts. Iteration continues past a failed token.
///
/// ```
/// use bigrat::{Rational, StreamParser};
///
/// let mut stream = StreamParser::<Rational>::new("1/2  -3\t0.25");
/// assert_eq!(stream.next().unwrap().unwrap(), Rational::new(1, 2).unwrap());
/// assert_eq!(stream.byte_offset(), 3);
/// assert_eq!(stream.next().unwrap().unwrap(), Rational::from(-3));
/// assert_eq!(stream.next().unwrap().unwrap(), Rational::new(1, 4).unwrap());
/// assert!(stream.next().is_none());
/// ```
pub struct StreamParser<'a, T> {
    input: &'a str,
    index: usize,
    output: PhantomData<T>,
}

struct Position {
    line: usize,
    column: usize,
}

impl<'a, T> StreamParser<'a, T>
where
    T: FromStr<Err = Error>,
{
    /// Create a parser over the tokens of `input`.
    pub fn new(input: &'a str) -> Self {
        StreamParser {
            input,
            index: 0,
            output: PhantomData,
        }
    }

    /// Returns the number of bytes so far consumed by the parser.
    ///
    /// After a token has been yielded, this is the offset just past its last
    /// character.
    pub fn byte_offset(&self) -> usize {
        self.index
    }

    /// Expect the input to contain nothing but whitespace from here on.
    pub fn end(&mut self) -> Result<()> {
        if self.skip_whitespace() {
            Ok(())
        } else {
            Err(self.error_at(ErrorCode::TrailingCharacters, self.index))
        }
    }

    /// Advance past whitespace. Returns true at the end of the input.
    fn skip_whitespace(&mut self) -> bool {
        let bytes = self.input.as_bytes();
        while self.index < bytes.len() && bytes[self.index].is_ascii_whitespace() {
            self.index += 1;
        }
        self.index == bytes.len()
    }

    fn position_of_index(&self, i: usize) -> Position {
        let slice = self.input.as_bytes();
        let start_of_line = match memchr::memrchr(b'\n', &slice[..i]) {
            Some(position) => position + 1,
            None => 0,
        };
        Position {
            line: 1 + memchr::memchr_iter(b'\n', &slice[..start_of_line]).count(),
            column: i - start_of_line + 1,
        }
    }

    #[cold]
    fn error_at(&self, code: ErrorCode, i: usize) -> Error {
        let position = self.position_of_index(i);
        Error::at(code, position.line, position.column)
    }
}

impl<'a, T> Iterator for StreamParser<'a, T>
where
    T: FromStr<Err = Error>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.skip_whitespace() {
            return None;
        }

        let start = self.index;
        let bytes = self.input.as_bytes();
        while self.index < bytes.len() && !bytes[self.index].is_ascii_whitespace() {
            self.index += 1;
        }

        // Token boundaries are ASCII bytes, so they are char boundaries.
        let token = &self.input[start..self.index];
        Some(
            T::from_str(token)
                .map_err(|err| err.fix_position(|code| self.error_at(code, start))),
        )
    }
}

/// Returns an iterator over the values in a whitespace-separated string.
///
/// This is shorthand for [`StreamParser::new`].
pub fn from_tokens<T>(s: &str) -> StreamParser<T>
where
    T: FromStr<Err = Error>,
{
    StreamParser::new(s)
}

/// Parse exactly one value out of `s`, ignoring surrounding whitespace.
///
/// Errors carry the line and column of the offending token.
///
/// ```
/// use bigrat::BigInteger;
///
/// let n: BigInteger = bigrat::from_str("  -1234567\n").unwrap();
/// assert_eq!(n, BigInteger::from(-1234567));
///
/// let err = bigrat::from_str::<BigInteger>("1 2").unwrap_err();
/// assert_eq!(err.to_string(), "trailing characters at line 1 column 3");
/// ```
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: FromStr<Err = Error>,
{
    let mut stream = StreamParser::new(s);
    let value = match stream.next() {
        Some(value) => tri!(value),
        None => return Err(stream.error_at(ErrorCode::EofWhileParsingValue, s.len())),
    };
    tri!(stream.end());
    Ok(value)
}

/// Like [`from_str`] but eagerly reads the content of the reader to a string
/// first.
///
/// Read failures, including input that is not valid UTF-8, are reported as
/// [`Category::Io`](crate::Category::Io) errors.
#[cfg(feature = "std")]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: FromStr<Err = Error>,
{
    let mut s = String::new();
    if let Err(io_err) = reader.read_to_string(&mut s) {
        return Err(Error::io(io_err));
    }
    from_str(&s)
}
