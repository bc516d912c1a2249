//! codec/encode.rs
//!
//! Encode path: plaintext -> frame bytes -> big integer -> mixed-radix
//! digits -> rendered sentence.
//!
//! Design notes:
//! - The serialized frame is interpreted as one unsigned big-endian integer;
//!   the chosen template index is folded in as the extra low-order digit
//!   (`Ncombined = N * T + chosen`), so decode can strip it with one division.
//! - Template choice walks the seed-keyed rotation and takes the first
//!   template whose capacity strictly exceeds the payload integer.
//! - The post-decomposition residue check cannot fire given the strict
//!   capacity inequality; it stays in as an overflow guard.

use num_bigint::BigUint;

use crate::codec::radix::decompose;
use crate::codec::select::{choose_template, derive_seed};
use crate::codec::types::CodecError;
use crate::codec::Codec;
use crate::crypto::Encryptor;
use crate::frame::encode_frame_be;
use crate::template::Bucket;

impl<E: Encryptor> Codec<E> {
    /// Encrypt `plaintext` and encode the resulting frame as one sentence.
    pub fn encode(&self, plaintext: &[u8]) -> Result<String, CodecError> {
        let frame = self.encryptor.encrypt(plaintext)?;
        let payload = encode_frame_be(&frame);

        let seed = derive_seed(&self.map_key, &payload);
        let n = BigUint::from_bytes_be(&payload);

        let chosen = match choose_template(&n, &self.templates, &seed) {
            Some(idx) => idx,
            None => {
                self.counters.add_encode_overflow();
                return Err(CodecError::EncodingOverflow { payload_len: payload.len() });
            }
        };

        let template = &self.templates[chosen];
        let template_count = self.templates.len();

        // Fold the template index in as the least-significant digit.
        let n_combined = &n * BigUint::from(template_count) + BigUint::from(chosen);

        // Radix 0 is the template count; the slot radices follow in order.
        let mut radices = Vec::with_capacity(1 + template.slot_count());
        radices.push(template_count);
        radices.extend(template.buckets().iter().map(Bucket::len));

        let digits = match decompose(n_combined, &radices) {
            Some(digits) => digits,
            None => {
                self.counters.add_encode_overflow();
                return Err(CodecError::EncodingOverflow { payload_len: payload.len() });
            }
        };
        debug_assert_eq!(digits[0], chosen, "low-order digit must reproduce the template index");

        let mut words = Vec::with_capacity(template.slot_count());
        for (slot, &digit) in digits[1..].iter().enumerate() {
            // digit < bucket size by construction of the radix list
            words.push(template.buckets()[slot].word(digit).unwrap());
        }

        let sentence = template.render(&words)?;
        self.counters.add_encode(plaintext.len(), sentence.len());
        Ok(sentence)
    }
}
