use bigrat::{BigInteger, Rational};
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Ledger {
    total: BigInteger,
    share: Rational,
    history: Vec<BigInteger>,
}

#[test]
fn test_serialize_as_string() {
    let n: BigInteger = "-123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        serde_json::to_string(&n).unwrap(),
        "\"-123456789012345678901234567890\""
    );
    let r = Rational::new(-6, 8).unwrap();
    assert_eq!(serde_json::to_string(&r).unwrap(), "\"-3/4\"");
}

#[test]
fn test_struct_roundtrip() {
    let ledger = Ledger {
        total: "1000000000000000000000000000000000".parse().unwrap(),
        share: Rational::new(1, 3).unwrap(),
        history: vec![BigInteger::from(-1), BigInteger::zero()],
    };
    let j = serde_json::to_string(&ledger).unwrap();
    assert_eq!(
        j,
        r#"{"total":"1000000000000000000000000000000000","share":"1/3","history":["-1","0"]}"#
    );
    let back: Ledger = serde_json::from_str(&j).unwrap();
    assert_eq!(back, ledger);
}

#[test]
fn test_deserialize_native_numbers() {
    let n: BigInteger = serde_json::from_str("-42").unwrap();
    assert_eq!(n, BigInteger::from(-42));
    let n: BigInteger = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(n, BigInteger::from(u64::MAX));

    let r: Rational = serde_json::from_str("7").unwrap();
    assert_eq!(r, Rational::from(7));
    let r: Rational = serde_json::from_str("0.1").unwrap();
    assert_eq!(r, Rational::new(1, 10).unwrap());
    let r: Rational = serde_json::from_str("\"1.25\"").unwrap();
    assert_eq!(r, Rational::new(5, 4).unwrap());
}

#[test]
fn test_custom_errors() {
    let err = <bigrat::Error as serde::ser::Error>::custom("cannot serialize");
    assert_eq!(err.to_string(), "cannot serialize");
    assert!(err.is_data());

    let err = <bigrat::Error as serde::de::Error>::custom("cannot deserialize");
    assert_eq!(err.to_string(), "cannot deserialize");
    assert!(err.is_data());
}

#[test]
fn test_deserialize_errors() {
    let err = serde_json::from_str::<BigInteger>("\"12a\"").unwrap_err();
    assert!(err
        .to_string()
        .starts_with("invalid value: string \"12a\", expected an integer or a string of decimal digits"));

    assert!(serde_json::from_str::<BigInteger>("1.5").is_err());
    assert!(serde_json::from_str::<BigInteger>("true").is_err());
    assert!(serde_json::from_str::<Rational>("\"1/0\"").is_err());
}
