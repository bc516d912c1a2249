//! frame/types.rs
//! Core frame struct and errors.
//!
//! Design notes:
//! - Fixed field sizes ensure binary stability: the wire layout is
//!   version(1) | nonce(12) | tag(16) | plaintext_len(4 BE) | ciphertext.
//! - Multi-byte integers are big-endian on the wire.
//! - The frame is immutable once constructed.

use std::fmt;

use crate::constants::{FRAME_HEADER_LEN, NONCE_LEN_12, TAG_LEN_16};

/// Authenticated-encryption payload in its canonical binary layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub version: u8,
    pub nonce: [u8; NONCE_LEN_12],
    pub tag: [u8; TAG_LEN_16],
    /// Length of the original plaintext (big-endian u32 on the wire).
    pub plaintext_len: u32,
    pub ciphertext: Vec<u8>,
}

impl Frame {
    /// Fixed header length in bytes. Serialized frames are never shorter.
    pub const HEADER_LEN: usize = FRAME_HEADER_LEN;

    /// Total serialized length of this frame.
    pub fn encoded_len(&self) -> usize {
        Self::HEADER_LEN + self.ciphertext.len()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame {{ version={}, nonce={}, tag={}, plaintext_len={}, ciphertext={}B }}",
            self.version,
            fmt_bytes(&self.nonce),
            fmt_bytes(&self.tag),
            self.plaintext_len,
            self.ciphertext.len(),
        )
    }
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

#[derive(Debug)]
pub enum FrameError {
    /// Buffer too short to contain the fixed header.
    BufferTooShort { have: usize, need: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::BufferTooShort { have, need } =>
                write!(f, "frame buffer too short: {} < {}", have, need),
        }
    }
}

impl std::error::Error for FrameError {}
