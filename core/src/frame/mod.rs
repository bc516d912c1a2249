//! frame/mod.rs
//! Public module export for the authenticated-encryption frame.
//!
//! Notes:
//! - Fixed 33-byte header followed by a variable (possibly empty) ciphertext
//!   enables deterministic splitting without a length prefix.
//! - The frame is produced by the encryptor and consumed by the decryptor;
//!   the codec treats the serialized bytes as an opaque big-endian integer.
//! - Authentication lives in the AEAD tag; deserialization only checks the
//!   minimum length.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
