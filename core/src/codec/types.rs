//! codec/types.rs
//! Codec error taxonomy.
//!
//! Design notes:
//! - Configuration errors are detected eagerly at construction and are fatal.
//! - `EncodingOverflow` is recoverable by the caller: supply templates with
//!   larger capacity.
//! - Per-template decode failures are swallowed internally (most templates
//!   will not match); only the aggregate `DecodingNoMatch` is surfaced.

use std::fmt;

use crate::constants::FRAME_HEADER_LEN;
use crate::crypto::CryptoError;
use crate::template::TemplateError;

#[derive(Debug)]
pub enum CodecError {
    /// Template set must hold at least one template.
    EmptyTemplateSet,

    /// Mapping key must be exactly 32 bytes.
    InvalidMapKeyLen { expected: usize, actual: usize },

    /// Payload integer exceeds every template's capacity along the rotation
    /// scan (or the defensive post-decomposition residue check fired).
    EncodingOverflow { payload_len: usize },

    /// No template structurally matched the sentence, or every match failed
    /// word lookup, the selection consistency check, frame validation or
    /// authenticated decryption.
    DecodingNoMatch,

    /// Encryptor failure during encode.
    Crypto(CryptoError),

    /// Template failure during configuration or rendering.
    Template(TemplateError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CodecError::*;
        match self {
            EmptyTemplateSet =>
                write!(f, "template set must not be empty"),
            InvalidMapKeyLen { expected, actual } =>
                write!(f, "invalid mapping key length: expected={}, actual={}", expected, actual),
            EncodingOverflow { payload_len } =>
                write!(f,
                    "{}-byte payload does not fit into any template word space; \
                     increase bucket sizes or use more/longer templates",
                    payload_len),
            DecodingNoMatch =>
                write!(f,
                    "unable to decode sentence: no matching template or failed \
                     integrity checks (frame header is {} bytes minimum)",
                    FRAME_HEADER_LEN),
            Crypto(e) =>
                write!(f, "crypto error: {}", e),
            Template(e) =>
                write!(f, "template error: {}", e),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<CryptoError> for CodecError {
    fn from(e: CryptoError) -> Self {
        CodecError::Crypto(e)
    }
}

impl From<TemplateError> for CodecError {
    fn from(e: TemplateError) -> Self {
        CodecError::Template(e)
    }
}
