//! crypto/types.rs
//! Crypto error taxonomy.

use std::fmt;

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to the cipher (must be 16, 24 or 32 bytes).
    InvalidKeyLen { actual: usize },

    /// AEAD tag mismatch (authentication failure).
    TagMismatch,

    /// Plaintext exceeds the u32 length field of the frame.
    PlaintextTooLarge { len: usize },

    /// General runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { actual } =>
                write!(f, "invalid AES key length: {} (expected 16, 24 or 32)", actual),
            TagMismatch =>
                write!(f, "AEAD tag mismatch"),
            PlaintextTooLarge { len } =>
                write!(f, "plaintext too large for u32 length field: {} bytes", len),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
