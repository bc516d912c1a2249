//! codec/radix.rs
//! Mixed-radix decomposition and composition over arbitrary-precision
//! integers.
//!
//! Design notes:
//! - Digits are least-significant first; digit `i` is bounded by `radices[i]`.
//! - All arithmetic is on `BigUint`: operands grow with the frame size and no
//!   fixed-width path is permitted anywhere in the codec.
//! - `compose` is the exact inverse of `decompose` over the same radix list.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Decompose `n` into mixed-radix digits, least-significant first.
///
/// Returns `None` when `n` is not fully consumed by the radix list (a nonzero
/// residue remains), which means the value exceeds the radix space.
pub fn decompose(mut n: BigUint, radices: &[usize]) -> Option<Vec<usize>> {
    let mut digits = Vec::with_capacity(radices.len());

    for &radix in radices {
        let radix = BigUint::from(radix);
        let digit = &n % &radix;
        n /= &radix;
        // digit < radix, always fits usize
        digits.push(digit.to_usize().unwrap());
    }

    if !n.is_zero() {
        return None;
    }
    Some(digits)
}

/// Compose mixed-radix digits (least-significant first) back into an integer:
/// `Σ digits[i] * ∏_{j<i} radices[j]`.
pub fn compose(digits: &[usize], radices: &[usize]) -> BigUint {
    debug_assert_eq!(digits.len(), radices.len(), "digit/radix arity mismatch");

    let mut acc = BigUint::zero();
    let mut multiplier = BigUint::from(1u8);

    for (&digit, &radix) in digits.iter().zip(radices) {
        acc += BigUint::from(digit) * &multiplier;
        multiplier *= BigUint::from(radix);
    }
    acc
}
