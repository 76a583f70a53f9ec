//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the limb buffers, so for a
//! `vec![0, 1, 2, 3]`, `3` is the most significant limb, and `0` is the least
//! significant limb. Every limb holds a value in `[0, BASE)`.
//!
//! Buffers produced by this module are normalized: the most significant limb
//! is nonzero, except for zero itself which is the single limb `[0]`.

use crate::lib::{cmp, iter, Vec};

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except it stores nine decimal
/// digits at once.
pub type Limb = u32;

/// Type wide enough to hold the product of two limbs plus two carries.
pub type Wide = u64;

/// Radix of a limb.
pub const BASE: Limb = 1_000_000_000;

/// Number of decimal digits held by one limb.
pub const BASE_DIGITS: usize = 9;

const WIDE_BASE: Wide = BASE as Wide;

// NORMALIZE
// ---------

/// Normalize the container by popping any leading zeros.
///
/// Always leaves at least one limb behind, so the canonical zero is `[0]`.
#[inline]
pub fn normalize(x: &mut Vec<Limb>) {
    while x.len() > 1 && x[x.len() - 1] == 0 {
        x.pop();
    }
    if x.is_empty() {
        x.push(0);
    }
}

/// Check if the normalized buffer represents zero.
#[inline]
pub fn is_zero(x: &[Limb]) -> bool {
    x.len() == 1 && x[0] == 0
}

/// Split a native unsigned value into limbs.
pub fn from_u128(mut value: u128) -> Vec<Limb> {
    let mut x = Vec::with_capacity(5);
    loop {
        x.push((value % BASE as u128) as Limb);
        value /= BASE as u128;
        if value == 0 {
            break;
        }
    }
    x
}

/// Fold the limbs back into a native value, or `None` on overflow.
pub fn to_u128(x: &[Limb]) -> Option<u128> {
    let mut acc: u128 = 0;
    for &xi in x.iter().rev() {
        acc = acc.checked_mul(BASE as u128)?.checked_add(xi as u128)?;
    }
    Some(acc)
}

// RELATIVE OPERATORS
// ------------------

/// Compare `x` to `y`, in little-endian order.
///
/// Both buffers must be normalized, so that a longer buffer is always the
/// larger magnitude.
#[inline]
pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
    if x.len() > y.len() {
        return cmp::Ordering::Greater;
    } else if x.len() < y.len() {
        return cmp::Ordering::Less;
    }
    let iter = x.iter().rev().zip(y.iter().rev());
    for (&xi, &yi) in iter {
        if xi > yi {
            return cmp::Ordering::Greater;
        } else if xi < yi {
            return cmp::Ordering::Less;
        }
    }
    cmp::Ordering::Equal
}

/// Check if x is greater than or equal to y.
#[inline]
pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
    compare(x, y) != cmp::Ordering::Less
}

// ADDITION
// --------

/// Add two magnitudes.
pub fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut z = Vec::with_capacity(long.len() + 1);

    let mut carry: Limb = 0;
    for (i, &li) in long.iter().enumerate() {
        let si = short.get(i).copied().unwrap_or(0);
        // Cannot overflow a u32: 2 * (BASE - 1) + 1 < 2^31.
        let mut sum = li + si + carry;
        carry = 0;
        if sum >= BASE {
            sum -= BASE;
            carry = 1;
        }
        z.push(sum);
    }

    if carry != 0 {
        z.push(carry);
    }
    normalize(&mut z);
    z
}

// SUBTRACTION
// -----------

/// Subtract `y` from `x`, borrowing from the next limb where needed.
///
/// Requires `x >= y`.
pub fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    debug_assert!(greater_equal(x, y));
    let mut z = Vec::with_capacity(x.len());

    let mut borrow: Limb = 0;
    for (i, &xi) in x.iter().enumerate() {
        let yi = y.get(i).copied().unwrap_or(0) + borrow;
        if xi >= yi {
            z.push(xi - yi);
            borrow = 0;
        } else {
            z.push(xi + BASE - yi);
            borrow = 1;
        }
    }

    debug_assert!(borrow == 0);
    normalize(&mut z);
    z
}

// MULTIPLICATION
// --------------

/// Multiply a magnitude by a single limb.
pub fn mul_small(x: &[Limb], y: Limb) -> Vec<Limb> {
    if y == 0 {
        return vec_zero();
    }
    let mut z = Vec::with_capacity(x.len() + 1);
    let mut carry: Wide = 0;
    for &xi in x {
        let t = xi as Wide * y as Wide + carry;
        z.push((t % WIDE_BASE) as Limb);
        carry = t / WIDE_BASE;
    }
    if carry != 0 {
        z.push(carry as Limb);
    }
    normalize(&mut z);
    z
}

/// Grade-school multiplication algorithm.
///
/// Every product `x[i] * y[j]` lands in position `i + j`, and the overflow
/// past `BASE` is carried into `i + j + 1` as the row is swept. The
/// intermediate `t` is at most `(BASE-1) + (BASE-1)^2 + (BASE-1) < BASE^2`,
/// which fits a `u64` with room to spare. Runs in O(n*m).
pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    if is_zero(x) || is_zero(y) {
        return vec_zero();
    }

    let mut z: Vec<Wide> = iter::repeat(0).take(x.len() + y.len()).collect();
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry: Wide = 0;
        for (j, &yj) in y.iter().enumerate() {
            let t = z[i + j] + xi as Wide * yj as Wide + carry;
            z[i + j] = t % WIDE_BASE;
            carry = t / WIDE_BASE;
        }
        z[i + y.len()] += carry;
    }

    // Final sweep, in case any position was left at or above the radix.
    let mut carry: Wide = 0;
    for zi in z.iter_mut() {
        let t = *zi + carry;
        *zi = t % WIDE_BASE;
        carry = t / WIDE_BASE;
    }
    debug_assert!(carry == 0);

    let mut z: Vec<Limb> = z.into_iter().map(|zi| zi as Limb).collect();
    normalize(&mut z);
    z
}

// DIVISION
// --------

/// Long division by digit search.
///
/// Returns `(quotient, remainder)`, both normalized. The quotient is built
/// one limb at a time from the most significant position down. For each
/// position, the partial dividend is the previous remainder shifted up one
/// limb plus the next limb of `x`, and the quotient limb is the largest
/// `d` in `[0, BASE)` such that `d * y` does not exceed it, found by binary
/// search over a lower bound and an exclusive upper bound.
///
/// The divisor must not be zero.
pub fn div_rem(x: &[Limb], y: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!is_zero(y));

    if compare(x, y) == cmp::Ordering::Less {
        return (vec_zero(), x.to_vec());
    }

    let mut quotient: Vec<Limb> = iter::repeat(0).take(x.len()).collect();
    let mut rem = vec_zero();
    for i in (0..x.len()).rev() {
        // rem = rem * BASE + x[i]
        if is_zero(&rem) {
            rem[0] = x[i];
        } else {
            rem.insert(0, x[i]);
        }

        if compare(&rem, y) == cmp::Ordering::Less {
            continue;
        }

        let mut lo: Limb = 0;
        let mut hi: Limb = BASE;
        while lo + 1 < hi {
            let mid = lo + (hi - lo) / 2;
            if greater_equal(&rem, &mul_small(y, mid)) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        quotient[i] = lo;
        rem = sub(&rem, &mul_small(y, lo));
    }

    normalize(&mut quotient);
    (quotient, rem)
}

#[inline]
fn vec_zero() -> Vec<Limb> {
    let mut z = Vec::with_capacity(1);
    z.push(0);
    z
}
