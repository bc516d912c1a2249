//! frame/encode.rs
//!
//! Frame encoding utilities.
//!
//! Design notes:
//! - Serializes a `Frame` into `33 + ciphertext.len()` bytes in big-endian order.
//! - Field order must match `types.rs` layout exactly; the codec interprets
//!   the whole buffer as an unsigned big-endian integer, so any reordering
//!   changes every encoded sentence.
//! - Serialization is infallible: all fields are fixed-size except the
//!   trailing ciphertext.

use crate::frame::types::Frame;

/// Serialize a `Frame` into its canonical byte layout.
///
/// # Notes
/// - Field order: version | nonce | tag | plaintext_len (BE) | ciphertext.
/// - Debug assertion ensures the header occupies exactly `Frame::HEADER_LEN`.
#[inline]
pub fn encode_frame_be(frame: &Frame) -> Vec<u8> {
    let mut out = Vec::with_capacity(frame.encoded_len());

    out.push(frame.version);                                  // 0..1   version
    out.extend_from_slice(&frame.nonce);                      // 1..13  nonce
    out.extend_from_slice(&frame.tag);                        // 13..29 tag
    out.extend_from_slice(&frame.plaintext_len.to_be_bytes()); // 29..33 plaintext length
    debug_assert_eq!(out.len(), Frame::HEADER_LEN, "header wrote incorrect length");

    out.extend_from_slice(&frame.ciphertext);                 // 33..   ciphertext
    out
}
