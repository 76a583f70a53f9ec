#![no_main]
use bigrat::{BigInteger, Rational};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(n) = s.parse::<BigInteger>() {
            assert_eq!(n.to_string().parse::<BigInteger>().unwrap(), n);
        }
        if let Ok(r) = s.parse::<Rational>() {
            assert_eq!(r.to_string().parse::<Rational>().unwrap(), r);
        }
    }
});
