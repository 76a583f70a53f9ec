use bigrat::{BigInteger, Rational};

#[test]
fn test() {
    let zero = BigInteger::from(-3) * BigInteger::zero();
    assert!(!zero.is_negative());
    assert_eq!(zero, BigInteger::zero());

    let remainder = BigInteger::from(-10) % BigInteger::from(5);
    assert!(!remainder.is_negative());
    assert_eq!(remainder.to_string(), "0");

    let quotient = BigInteger::from(-3) / BigInteger::from(5);
    assert!(!quotient.is_negative());

    let r = -Rational::zero();
    assert!(!r.is_negative());
    assert_eq!(r.to_string(), "0");
    assert_eq!(Rational::new(-1, 2).unwrap() * Rational::zero(), Rational::zero());
}
