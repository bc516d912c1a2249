//! crypto/aead.rs
//! AES-GCM implementation of the `Encryptor` seam.
//!
//! Design notes:
//! - Key length (16/24/32 bytes) selects the AES variant at construction;
//!   per-call paths never re-validate key material.
//! - Nonces are 12 random bytes from the OS per encryption.
//! - Tag verification is constant-time and fails closed (no partial
//!   plaintext); any authentication failure surfaces as `TagMismatch`.
//! - The 16-byte tag is carried in its own frame field, so the ciphertext
//!   field holds ciphertext only. Empty plaintext is legal: the ciphertext
//!   is empty and the tag still authenticates it.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{FRAME_V1, NONCE_LEN_12, TAG_LEN_16};
use crate::crypto::types::CryptoError;
use crate::crypto::Encryptor;
use crate::frame::Frame;

/// AES-GCM with a 192-bit key and 96-bit nonce (not aliased upstream).
type Aes192Gcm = aes_gcm::AesGcm<Aes192, U12>;

/// AES variant selected by key length.
#[derive(Clone)]
enum AeadImpl {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl AeadImpl {
    fn seal(&self, nonce: &[u8; NONCE_LEN_12], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            AeadImpl::Aes128(cipher) => cipher.encrypt(nonce, plaintext),
            AeadImpl::Aes192(cipher) => cipher.encrypt(nonce, plaintext),
            AeadImpl::Aes256(cipher) => cipher.encrypt(nonce, plaintext),
        }
        .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))
    }

    fn open(
        &self,
        nonce: &[u8; NONCE_LEN_12],
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            AeadImpl::Aes128(cipher) => cipher.decrypt(nonce, ciphertext_and_tag),
            AeadImpl::Aes192(cipher) => cipher.decrypt(nonce, ciphertext_and_tag),
            AeadImpl::Aes256(cipher) => cipher.decrypt(nonce, ciphertext_and_tag),
        }
        .map_err(|_| CryptoError::TagMismatch)
    }
}

/// Stock AES-GCM encryptor producing version-1 frames.
#[derive(Clone)]
pub struct AesGcmEncryptor {
    cipher: AeadImpl,
}

impl core::fmt::Debug for AesGcmEncryptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AesGcmEncryptor").finish_non_exhaustive()
    }
}

impl AesGcmEncryptor {
    /// Construct from raw key bytes; the key length picks the AES variant.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let cipher = match key.len() {
            16 => AeadImpl::Aes128(
                Aes128Gcm::new_from_slice(key)
                    .map_err(|_| CryptoError::InvalidKeyLen { actual: key.len() })?,
            ),
            24 => AeadImpl::Aes192(
                Aes192Gcm::new_from_slice(key)
                    .map_err(|_| CryptoError::InvalidKeyLen { actual: key.len() })?,
            ),
            32 => AeadImpl::Aes256(
                Aes256Gcm::new_from_slice(key)
                    .map_err(|_| CryptoError::InvalidKeyLen { actual: key.len() })?,
            ),
            actual => return Err(CryptoError::InvalidKeyLen { actual }),
        };
        Ok(Self { cipher })
    }
}

impl Encryptor for AesGcmEncryptor {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Frame, CryptoError> {
        let plaintext_len = u32::try_from(plaintext.len())
            .map_err(|_| CryptoError::PlaintextTooLarge { len: plaintext.len() })?;

        let mut nonce = [0u8; NONCE_LEN_12];
        OsRng.fill_bytes(&mut nonce);

        // The aead crate appends the 16-byte tag to the ciphertext; split it
        // into the frame's dedicated tag field.
        let mut ciphertext = self.cipher.seal(&nonce, plaintext)?;
        let tag_offset = ciphertext.len() - TAG_LEN_16;
        let mut tag = [0u8; TAG_LEN_16];
        tag.copy_from_slice(&ciphertext[tag_offset..]);
        ciphertext.truncate(tag_offset);

        Ok(Frame {
            version: FRAME_V1,
            nonce,
            tag,
            plaintext_len,
            ciphertext,
        })
    }

    fn decrypt(&self, frame: &Frame) -> Result<Vec<u8>, CryptoError> {
        let mut ciphertext_and_tag =
            Vec::with_capacity(frame.ciphertext.len() + TAG_LEN_16);
        ciphertext_and_tag.extend_from_slice(&frame.ciphertext);
        ciphertext_and_tag.extend_from_slice(&frame.tag);

        self.cipher.open(&frame.nonce, &ciphertext_and_tag)
    }
}
