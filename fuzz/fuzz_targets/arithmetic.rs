#![no_main]
use bigrat::BigInteger;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i128, i128, u64)| {
    let (a, b, c) = data;
    let big_a = BigInteger::from(a) * BigInteger::from(c);
    let big_b = BigInteger::from(b);

    if let Ok((q, r)) = big_a.div_rem(&big_b) {
        assert_eq!(&q * &big_b + &r, big_a);
        assert!(r.abs() < big_b.abs());
    }
    assert_eq!(&big_a + &big_b - &big_b, big_a);
    let sum = BigInteger::from(a) + BigInteger::from(b);
    assert_eq!(i128::try_from(&sum).ok(), a.checked_add(b));
});
