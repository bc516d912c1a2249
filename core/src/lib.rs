//! stego-core
//!
//! Reversible sentence-steganography codec.
//! Encodes authenticated-encrypted payloads into template sentences and
//! decodes them back to the exact original bytes.
//! No FFI, no async runtime.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

// Core modules
pub mod frame;
pub mod template;
pub mod crypto;
pub mod codec;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{Codec, CodecError};
    pub use crate::crypto::{AesGcmEncryptor, CryptoError, Encryptor};
    pub use crate::frame::{Frame, FrameError};
    pub use crate::template::{Bucket, Template, TemplateError};
}
