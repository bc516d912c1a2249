//! codec/decode.rs
//!
//! Decode path: linear scan over the template set in natural order, first
//! success wins.
//!
//! Design notes:
//! - Per-template failure is silent and non-fatal: most templates will not
//!   match a given sentence. Each candidate evaluates to success or failure
//!   and the scan proceeds on failure; only exhaustion surfaces an error.
//! - A structurally matching sentence is accepted only when the template it
//!   matched is exactly the one the deterministic selection function would
//!   have chosen for the recovered payload. This rejects sentences rebuilt
//!   on a non-canonical template from otherwise valid digits.
//! - Authenticated decryption and the plaintext-length cross-check are the
//!   final gates; the codec never returns partially recovered bytes.

use num_bigint::BigUint;

use crate::codec::radix::compose;
use crate::codec::select::{choose_template, derive_seed};
use crate::codec::types::CodecError;
use crate::codec::Codec;
use crate::crypto::Encryptor;
use crate::frame::{decode_frame_be, Frame};

impl<E: Encryptor> Codec<E> {
    /// Decode one sentence back to the exact original plaintext.
    pub fn decode(&self, sentence: &str) -> Result<Vec<u8>, CodecError> {
        let template_count = self.templates.len();

        for (idx, template) in self.templates.iter().enumerate() {
            self.counters.add_decode_attempt();

            let words = match template.match_slots(sentence) {
                Some(words) => words,
                None => continue,
            };

            // Map words back to digits; any word absent from its bucket
            // disqualifies this template.
            let mut digits = Vec::with_capacity(1 + template.slot_count());
            digits.push(idx);
            let mut lookup_failed = false;
            for (slot, word) in words.iter().enumerate() {
                match template.buckets()[slot].digit_of(word) {
                    Some(digit) => digits.push(digit),
                    None => {
                        lookup_failed = true;
                        break;
                    }
                }
            }
            if lookup_failed {
                self.counters.add_decode_rejected();
                continue;
            }

            let mut radices = Vec::with_capacity(1 + template.slot_count());
            radices.push(template_count);
            radices.extend(template.buckets().iter().map(|b| b.len()));

            let n_combined = compose(&digits, &radices);
            // The mod-T part reproduces idx and is discarded.
            let n = n_combined / BigUint::from(template_count);

            // BigUint is unsigned: to_bytes_be never emits a sign byte, so no
            // leading-zero strip is needed here.
            let payload = n.to_bytes_be();
            if payload.len() < Frame::HEADER_LEN {
                self.counters.add_decode_rejected();
                continue;
            }

            // Anti-spoofing: re-derive the selection from the recovered
            // payload and require it to designate the matched template.
            let seed = derive_seed(&self.map_key, &payload);
            if choose_template(&n, &self.templates, &seed) != Some(idx) {
                self.counters.add_decode_rejected();
                continue;
            }

            let frame = match decode_frame_be(&payload) {
                Ok(frame) => frame,
                Err(_) => {
                    self.counters.add_decode_rejected();
                    continue;
                }
            };

            let plaintext = match self.encryptor.decrypt(&frame) {
                Ok(plaintext) => plaintext,
                Err(_) => {
                    self.counters.add_decode_rejected();
                    continue;
                }
            };

            // A corrupted length field could still pass the AEAD check on a
            // different message; cross-check it against what came back.
            if plaintext.len() != frame.plaintext_len as usize {
                self.counters.add_decode_rejected();
                continue;
            }

            self.counters.add_decode(plaintext.len(), sentence.len());
            return Ok(plaintext);
        }

        Err(CodecError::DecodingNoMatch)
    }
}
