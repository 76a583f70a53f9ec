use bigrat::{ErrorCode, Rational};

#[test]
fn test() {
    let err = "1e9223372036854775808".parse::<Rational>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::NumberOutOfRange);

    let err = "1e-99999999".parse::<Rational>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::NumberOutOfRange);

    let r: Rational = "25e-2".parse().unwrap();
    assert_eq!(r.to_string(), "1/4");
}
