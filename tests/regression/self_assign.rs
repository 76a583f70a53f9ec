use bigrat::{BigInteger, Rational};

#[test]
fn test() {
    let mut x: BigInteger = "999999999999999999".parse().unwrap();
    let snapshot = x.clone();
    x += &snapshot;
    let doubled = x.clone();
    x *= &doubled;
    assert_eq!(x.to_string(), "3999999999999999992000000000000000004");

    let product = x.clone();
    x -= product;
    assert!(x.is_zero());
    assert!(!x.is_negative());

    let mut r = Rational::new(-2, 3).unwrap();
    let divisor = r.clone();
    r /= &divisor;
    assert_eq!(r, Rational::one());
}
