//! frame/decode.rs
//!
//! Frame decoding utilities.
//!
//! Design notes:
//! - Deserializes the canonical byte layout back into a `Frame`.
//! - Field order must match `encode.rs` exactly.
//! - Only the minimum length is validated here; authentication is the
//!   decryptor's responsibility (AEAD tag check), never the frame parser's.

use crate::constants::{NONCE_LEN_12, TAG_LEN_16};
use crate::frame::types::{Frame, FrameError};

/// Deserialize a canonical frame buffer into a `Frame`.
///
/// # Returns
/// - `Ok(Frame)` when the buffer holds at least the 33-byte header; everything
///   past the header becomes the ciphertext (possibly empty).
/// - `Err(FrameError::BufferTooShort)` otherwise.
#[inline]
pub fn decode_frame_be(buf: &[u8]) -> Result<Frame, FrameError> {
    if buf.len() < Frame::HEADER_LEN {
        return Err(FrameError::BufferTooShort { have: buf.len(), need: Frame::HEADER_LEN });
    }

    let mut i = 0usize;

    let version = buf[i];                                     // 0..1   version
    i += 1;

    let mut nonce = [0u8; NONCE_LEN_12];                      // 1..13  nonce
    nonce.copy_from_slice(&buf[i..i + NONCE_LEN_12]);
    i += NONCE_LEN_12;

    let mut tag = [0u8; TAG_LEN_16];                          // 13..29 tag
    tag.copy_from_slice(&buf[i..i + TAG_LEN_16]);
    i += TAG_LEN_16;

    // 29..33 plaintext length (big-endian); slice length is fixed, so the
    // conversion cannot fail.
    let plaintext_len = u32::from_be_bytes(buf[i..i + 4].try_into().unwrap());
    i += 4;

    debug_assert_eq!(i, Frame::HEADER_LEN, "header consumed incorrect length");

    Ok(Frame {
        version,
        nonce,
        tag,
        plaintext_len,
        ciphertext: buf[i..].to_vec(),
    })
}
