#![allow(clippy::float_cmp)]

use bigrat::{gcd, lcm, BigInteger, ErrorCode, Rational};

fn rat(s: &str) -> Rational {
    s.parse().unwrap()
}

fn assert_canonical(r: &Rational) {
    assert!(r.denominator().is_positive(), "{}", r);
    assert!(!r.numerator().is_negative(), "{}", r);
    if r.is_zero() {
        assert_eq!(*r.denominator(), BigInteger::one());
        assert!(!r.is_negative());
    } else {
        assert_eq!(gcd(r.numerator(), r.denominator()), BigInteger::one(), "{}", r);
    }
}

#[test]
fn test_integer_chain() {
    let mut x = Rational::from(5);
    x += Rational::from(3);
    assert_eq!(x, Rational::from(8));
    x *= Rational::from(7);
    assert_eq!(x, Rational::from(56));
    x /= Rational::from(8);
    assert_eq!(x, Rational::from(7));
    x -= Rational::from(15);
    assert_eq!(x, Rational::from(-8));
    assert_eq!(-&x, Rational::from(8));
}

#[test]
fn test_construction_reduces() {
    let r = Rational::new(6, -8).unwrap();
    assert_eq!(r.to_string(), "-3/4");
    assert_eq!(*r.numerator(), BigInteger::from(3));
    assert_eq!(*r.denominator(), BigInteger::from(4));
    assert!(r.is_negative());

    assert_eq!(Rational::new(-6, -8).unwrap().to_string(), "3/4");
    assert_eq!(Rational::new(10, 5).unwrap().to_string(), "2");
    assert_eq!(Rational::new(0, -7).unwrap(), Rational::zero());
    assert!(!Rational::new(0, -7).unwrap().is_negative());
    assert_eq!(Rational::new(2, 4).unwrap(), Rational::new(1, 2).unwrap());
}

#[test]
fn test_zero_denominator() {
    let err = Rational::new(1, 0).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivisionByZero);
    assert!(err.is_arithmetic());

    let err = "3/0".parse::<Rational>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivisionByZero);
}

#[test]
fn test_arithmetic() {
    let a = Rational::new(1, 6).unwrap();
    let b = Rational::new(1, 10).unwrap();
    assert_eq!((&a + &b).to_string(), "4/15");
    assert_eq!((&a - &b).to_string(), "1/15");
    assert_eq!((&b - &a).to_string(), "-1/15");

    let c = Rational::new(3, 4).unwrap();
    let d = Rational::new(-8, 9).unwrap();
    assert_eq!((&c * &d).to_string(), "-2/3");
    assert_eq!((&c / Rational::new(-9, 2).unwrap()).to_string(), "-1/6");

    let seven_thirds = Rational::new(7, 3).unwrap();
    let sum = -&seven_thirds + &seven_thirds;
    assert!(sum.is_zero());
    assert!(!sum.is_negative());
    assert_eq!(sum.to_string(), "0");

    assert_eq!((Rational::new(2, 3).unwrap() - 1i32).to_string(), "-1/3");
    assert_eq!((Rational::new(1, 2).unwrap() * BigInteger::from(4)).to_string(), "2");
}

#[test]
fn test_sum_product() {
    let harmonic: Rational = (1..=10).map(|n| Rational::new(1, n).unwrap()).sum();
    assert_eq!(harmonic.to_string(), "7381/2520");
    assert_canonical(&harmonic);

    let telescoping: Rational = (1..=99)
        .map(|n| Rational::new(n, n + 1).unwrap())
        .product();
    assert_eq!(telescoping.to_string(), "1/100");
}

#[test]
fn test_invariants_after_operations() {
    let values: Vec<Rational> = ["0", "1", "-1", "1/2", "-2/3", "7/12", "-100/7", "3/1000000007"]
        .iter()
        .map(|s| rat(s))
        .collect();
    for a in &values {
        assert_canonical(a);
        for b in &values {
            assert_canonical(&(a + b));
            assert_canonical(&(a - b));
            assert_canonical(&(a * b));
            if !b.is_zero() {
                let q = a / b;
                assert_canonical(&q);
                assert_eq!(&q * b, *a);
            }
        }
    }
}

#[test]
fn test_reduction_is_idempotent() {
    for s in ["0", "-0", "1", "-1", "1/2", "-2/3", "7/12", "-12/35", "-100/7", "3/1000000007"] {
        let r = rat(s);
        let rebuilt = Rational::new(r.signed_numerator(), r.denominator().clone()).unwrap();
        assert_eq!(rebuilt, r, "{}", s);
        assert_eq!(*rebuilt.numerator(), *r.numerator());
        assert_eq!(*rebuilt.denominator(), *r.denominator());
        assert_eq!(rebuilt.is_negative(), r.is_negative());
    }
}

#[test]
fn test_format_flags() {
    let r = Rational::new(-1, 3).unwrap();
    assert_eq!(format!("{:>8}", r), "    -1/3");
    assert_eq!(format!("{:<6}|", r), "-1/3  |");
    assert_eq!(format!("{:*^7}", Rational::from(12)), "**12***");
    assert_eq!(format!("{}", r), "-1/3");
}

#[test]
fn test_ordering() {
    let mut v = vec![
        rat("1/2"),
        rat("-1/3"),
        rat("0"),
        rat("-1/2"),
        rat("1/3"),
        rat("5"),
        rat("-5"),
    ];
    v.sort();
    let sorted: Vec<String> = v.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["-5", "-1/2", "-1/3", "0", "1/3", "1/2", "5"]);
    assert!(rat("2/4") == rat("1/2"));
    assert!(rat("-1/2") < rat("-1/3"));
}

#[test]
fn test_parse() {
    assert_eq!(rat("-12/35").to_string(), "-12/35");
    assert_eq!(rat("6/-8").to_string(), "-3/4");
    assert_eq!(rat("42").to_string(), "42");
    assert_eq!(rat("-0").to_string(), "0");
    assert!(!rat("-0.000").is_negative());
    assert_eq!(rat("-1.25e-3").to_string(), "-1/800");
    assert_eq!(rat("3.14159").to_string(), "314159/100000");
    assert_eq!(rat("12e3").to_string(), "12000");
    assert_eq!(rat("1.5E+2").to_string(), "150");
    assert_eq!(rat("5.").to_string(), "5");
}

#[test]
fn test_parse_errors() {
    for s in ["", "-", "/2", "1/", "1/2/3", ".5", "1e", "1e+", "1.2.3", "a", "1 /2", "+1"] {
        let err = s.parse::<Rational>().unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidFormat, "{:?}", s);
    }
    let err = "1e99999999999".parse::<Rational>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::NumberOutOfRange);
}

#[test]
fn test_to_decimal() {
    assert_eq!(Rational::new(5, 26).unwrap().to_decimal(10), "0.1923076923");
    assert_eq!(Rational::new(-22, 7).unwrap().to_decimal(10), "-3.1428571428");
    assert_eq!(Rational::new(1, 800).unwrap().to_decimal(5), "0.00125");
    assert_eq!(Rational::new(1, 800).unwrap().to_decimal(2), "0.00");
    assert_eq!(Rational::new(-1, 800).unwrap().to_decimal(2), "-0.00");
    assert_eq!(Rational::new(7, 2).unwrap().to_decimal(0), "3.");
    assert_eq!(Rational::new(-7, 2).unwrap().to_decimal(0), "-3.");
    assert_eq!(Rational::zero().to_decimal(0), "0.");
    assert_eq!(Rational::from(12).to_decimal(3), "12.000");
    assert_eq!(Rational::zero().to_decimal(4), "0.0000");
}

#[test]
fn test_floats() {
    let third = Rational::new(1, 3).unwrap();
    assert!((third.to_f64() - 1.0 / 3.0).abs() < 1e-14);
    assert_eq!(Rational::new(-5, 4).unwrap().to_f64(), -1.25);
    assert_eq!(Rational::zero().to_f64(), 0.0);

    assert_eq!(Rational::from_f64(0.5).unwrap(), Rational::new(1, 2).unwrap());
    assert_eq!(Rational::from_f64(-2.5e-3).unwrap().to_string(), "-1/400");
    assert_eq!(Rational::from_f64(100.0).unwrap(), Rational::from(100));
    assert!(Rational::from_f64(f64::INFINITY).is_none());
    assert!(Rational::from_f64(f64::NAN).is_none());
}

#[test]
fn test_accessors() {
    let r = Rational::new(-22, 7).unwrap();
    assert_eq!(r.signed_numerator(), BigInteger::from(-22));
    assert_eq!(r.trunc(), BigInteger::from(-3));
    assert_eq!(r.abs().to_string(), "22/7");
    assert!(!r.is_integer());
    assert!(Rational::from(4).is_integer());
    assert_eq!(r.recip().to_string(), "-7/22");
    assert_eq!(
        *Rational::zero().checked_recip().unwrap_err().code(),
        ErrorCode::DivisionByZero
    );
    assert_eq!(Rational::default(), Rational::zero());
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_by_zero_panics() {
    let _ = Rational::one() / Rational::zero();
}

#[test]
fn test_gcd_lcm() {
    let samples = [0i64, 1, 6, 35, 462, 1071, 1_000_000_007, 123_456_789_012];
    for &a in &samples {
        let a = BigInteger::from(a);
        assert_eq!(gcd(&a, &BigInteger::zero()), a);
        for &b in &samples {
            let b = BigInteger::from(b);
            assert_eq!(&lcm(&a, &b) * &gcd(&a, &b), &a * &b, "{} {}", a, b);
        }
    }
    assert_eq!(gcd(&BigInteger::from(462), &BigInteger::from(1071)), BigInteger::from(21));
    assert_eq!(lcm(&BigInteger::from(4), &BigInteger::from(6)), BigInteger::from(12));
}
