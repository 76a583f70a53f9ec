use bigrat::{BigInteger, Category, ErrorCode, Rational, StreamParser};

#[test]
fn test_stream_byte_offsets() {
    let data = "26 5\n-7\t\t1000000000000   ";
    let mut stream = StreamParser::<BigInteger>::new(data);
    assert_eq!(stream.byte_offset(), 0);

    assert_eq!(stream.next().unwrap().unwrap(), BigInteger::from(26));
    assert_eq!(stream.byte_offset(), 2);

    assert_eq!(stream.next().unwrap().unwrap(), BigInteger::from(5));
    assert_eq!(stream.byte_offset(), 4);

    assert_eq!(stream.next().unwrap().unwrap(), BigInteger::from(-7));
    assert_eq!(stream.byte_offset(), 7);

    assert_eq!(
        stream.next().unwrap().unwrap().to_string(),
        "1000000000000"
    );
    assert_eq!(stream.byte_offset(), 22);

    assert!(stream.next().is_none());
    assert_eq!(stream.byte_offset(), data.len());
}

#[test]
fn test_stream_empty() {
    assert!(bigrat::from_tokens::<BigInteger>("").next().is_none());
    assert!(bigrat::from_tokens::<Rational>(" \n\t \r\n").next().is_none());
}

#[test]
fn test_stream_error_positions() {
    let data = "1 2\n  x3 4\n\n 5/0";
    let results: Vec<_> = bigrat::from_tokens::<Rational>(data).collect();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].as_ref().unwrap(), &Rational::from(1));
    assert_eq!(results[1].as_ref().unwrap(), &Rational::from(2));

    let err = results[2].as_ref().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidFormat);
    assert_eq!((err.line(), err.column()), (2, 3));
    assert_eq!(err.to_string(), "invalid format at line 2 column 3");

    assert_eq!(results[3].as_ref().unwrap(), &Rational::from(4));

    let err = results[4].as_ref().unwrap_err();
    assert_eq!(err.classify(), Category::Arithmetic);
    assert_eq!((err.line(), err.column()), (4, 2));
}

#[test]
fn test_stream_collect_stops_at_error() {
    let result = bigrat::from_tokens::<BigInteger>("1 2 three 4").collect::<bigrat::Result<Vec<_>>>();
    let err = result.unwrap_err();
    assert_eq!((err.line(), err.column()), (1, 5));
}

#[test]
fn test_from_str() {
    let n: BigInteger = bigrat::from_str("\n  -42 \t").unwrap();
    assert_eq!(n, BigInteger::from(-42));

    let r: Rational = bigrat::from_str("22/7").unwrap();
    assert_eq!(r, Rational::new(22, 7).unwrap());
}

#[test]
fn test_from_str_errors() {
    let err = bigrat::from_str::<BigInteger>("").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::EofWhileParsingValue);
    assert!(err.is_eof());

    let err = bigrat::from_str::<BigInteger>("  \n ").unwrap_err();
    assert!(err.is_eof());
    assert_eq!((err.line(), err.column()), (2, 2));

    let err = bigrat::from_str::<BigInteger>("12\n 34").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::TrailingCharacters);
    assert_eq!(err.to_string(), "trailing characters at line 2 column 2");

    let err = bigrat::from_str::<BigInteger>(" 1-2").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidFormat);
    assert_eq!((err.line(), err.column()), (1, 2));
}

#[test]
fn test_from_reader() {
    let mut bytes: &[u8] = b"  123456789012345678901234567890\n";
    let n: BigInteger = bigrat::from_reader(&mut bytes).unwrap();
    assert_eq!(n.to_string(), "123456789012345678901234567890");

    let invalid: &[u8] = b"\xff12";
    let err = bigrat::from_reader::<_, BigInteger>(invalid).unwrap_err();
    assert!(err.is_io());
    assert_eq!(err.classify(), Category::Io);
}

#[test]
fn test_into_io_error() {
    let err = bigrat::from_str::<BigInteger>("abc").unwrap_err();
    let io_err = std::io::Error::from(err);
    assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);

    let err = bigrat::from_str::<BigInteger>("").unwrap_err();
    let io_err = std::io::Error::from(err);
    assert_eq!(io_err.kind(), std::io::ErrorKind::UnexpectedEof);
}
