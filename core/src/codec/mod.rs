//! codec/mod.rs
//! Public module export for the sentence codec.
//!
//! Notes:
//! - The codec is a pure function of its inputs and its immutable
//!   configuration (template set, mapping key, encryptor); it holds no
//!   mutable shared state beyond atomic telemetry counters and may be called
//!   concurrently without synchronization.
//! - Template-set order is wire-significant; encoder and decoder must be
//!   configured with identical sets.
//! - The mapping key only seeds template rotation and is independent of the
//!   encryption key.

pub mod types;
pub mod select;
pub mod radix;
pub mod encode;
pub mod decode;

pub use types::*;

use crate::constants::MAP_KEY_LEN_32;
use crate::crypto::Encryptor;
use crate::telemetry::{CodecCounters, TelemetrySnapshot};
use crate::template::Template;

/// Sentence codec: big-integer <-> word-sequence conversion with keyed,
/// deterministic template selection.
pub struct Codec<E: Encryptor> {
    templates: Vec<Template>,
    map_key: [u8; MAP_KEY_LEN_32],
    encryptor: E,
    counters: CodecCounters,
}

impl<E: Encryptor> core::fmt::Debug for Codec<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Codec")
            .field("templates", &self.templates)
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}

impl<E: Encryptor> Codec<E> {
    /// Build a codec from an ordered template set, the 32-byte mapping key
    /// and the encryption collaborator.
    pub fn new(
        templates: Vec<Template>,
        map_key: &[u8],
        encryptor: E,
    ) -> Result<Self, CodecError> {
        if templates.is_empty() {
            return Err(CodecError::EmptyTemplateSet);
        }
        if map_key.len() != MAP_KEY_LEN_32 {
            return Err(CodecError::InvalidMapKeyLen {
                expected: MAP_KEY_LEN_32,
                actual: map_key.len(),
            });
        }

        let mut key = [0u8; MAP_KEY_LEN_32];
        key.copy_from_slice(map_key);

        Ok(Self {
            templates,
            map_key: key,
            encryptor,
            counters: CodecCounters::default(),
        })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    /// Immutable snapshot of the codec's telemetry counters.
    pub fn telemetry(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from_counters(&self.counters)
    }
}
