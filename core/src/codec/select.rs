//! codec/select.rs
//! Keyed seed derivation and deterministic template selection.
//!
//! Design:
//! - seed = keyed-BLAKE3(map_key, payload), 32 bytes. Derived, never stored;
//!   recomputed identically on encode and decode.
//! - rotation = full permutation cycle of template indices starting at
//!   (seed as unsigned big integer) mod template_count.
//! - selection = first index along the rotation whose template capacity
//!   strictly exceeds the payload integer.
//!
//! Security notes:
//! - The mapping key is independent of the encryption key; it only makes the
//!   rotation start unpredictable without the key.
//! - Decode re-derives the selection from the recovered payload and rejects
//!   any sentence whose matched template disagrees (anti-spoofing).

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::constants::{MAP_KEY_LEN_32, SEED_LEN_32};
use crate::template::Template;

/// Keyed hash of the serialized frame under the mapping key.
#[inline]
pub fn derive_seed(map_key: &[u8; MAP_KEY_LEN_32], payload: &[u8]) -> [u8; SEED_LEN_32] {
    *blake3::keyed_hash(map_key, payload).as_bytes()
}

/// Full cycle `[(start + k) % n; k in 0..n]` with `start = seed mod n`.
///
/// Always a permutation of `0..n`: no repeats, no omissions.
pub fn rotation_order(seed: &[u8; SEED_LEN_32], template_count: usize) -> Vec<usize> {
    let start = (BigUint::from_bytes_be(seed) % BigUint::from(template_count))
        .to_usize()
        .unwrap(); // remainder < template_count, always fits usize

    (0..template_count)
        .map(|k| (start + k) % template_count)
        .collect()
}

/// First template along the rotation with capacity strictly greater than `n`,
/// or `None` when the payload fits nowhere.
pub fn choose_template(
    n: &BigUint,
    templates: &[Template],
    seed: &[u8; SEED_LEN_32],
) -> Option<usize> {
    rotation_order(seed, templates.len())
        .into_iter()
        .find(|&idx| n < templates[idx].capacity())
}
