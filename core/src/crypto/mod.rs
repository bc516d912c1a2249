//! crypto/mod.rs
//! Authenticated-encryption collaborator consumed by the codec.
//!
//! Notes:
//! - The codec only depends on the `Encryptor` trait; the AES-GCM
//!   implementation here is the stock collaborator, not the only one.
//! - Key material is validated at construction, never per call.
//! - Nonces are random per encryption; everything downstream of a fixed
//!   frame byte sequence is deterministic.

pub mod types;
pub mod aead;

pub use types::*;
pub use aead::*;

use crate::frame::Frame;

/// Authenticated-encryption seam between the codec and its collaborator.
///
/// `encrypt` draws a fresh random nonce per call; `decrypt` fails with
/// `CryptoError::TagMismatch` on any authentication failure.
pub trait Encryptor: Send + Sync {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Frame, CryptoError>;
    fn decrypt(&self, frame: &Frame) -> Result<Vec<u8>, CryptoError>;
}
