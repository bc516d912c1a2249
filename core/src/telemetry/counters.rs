//! telemetry/counters.rs
//! Counters bumped during encode/decode.
//!
//! Summary: collects call counts and byte counts while the codec runs.
//! Converted into an immutable `TelemetrySnapshot` on demand.
//!
//! Atomics rather than `&mut` methods: encode and decode take `&self` and are
//! callable concurrently, so the counters must not require synchronization.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters collected across all encode/decode calls of one codec.
#[derive(Debug, Default)]
pub struct CodecCounters {
    encodes: AtomicU64,
    encode_overflows: AtomicU64,
    decodes: AtomicU64,
    decode_attempts: AtomicU64,
    decode_rejected: AtomicU64,
    bytes_plaintext: AtomicU64,
    bytes_sentence: AtomicU64,
}

impl CodecCounters {
    /// Record one successful encode.
    ///
    /// - `plaintext_len`: input length before encryption
    /// - `sentence_len`: rendered sentence length in bytes
    pub fn add_encode(&self, plaintext_len: usize, sentence_len: usize) {
        self.encodes.fetch_add(1, Ordering::Relaxed);
        self.bytes_plaintext.fetch_add(plaintext_len as u64, Ordering::Relaxed);
        self.bytes_sentence.fetch_add(sentence_len as u64, Ordering::Relaxed);
    }

    /// Record an encode that found no template with sufficient capacity.
    pub fn add_encode_overflow(&self) {
        self.encode_overflows.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one per-template decode attempt (structural match tried).
    pub fn add_decode_attempt(&self) {
        self.decode_attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a candidate that structurally matched but failed a later gate
    /// (word lookup, selection consistency, frame length, authentication).
    pub fn add_decode_rejected(&self) {
        self.decode_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one successful decode.
    pub fn add_decode(&self, plaintext_len: usize, sentence_len: usize) {
        self.decodes.fetch_add(1, Ordering::Relaxed);
        self.bytes_plaintext.fetch_add(plaintext_len as u64, Ordering::Relaxed);
        self.bytes_sentence.fetch_add(sentence_len as u64, Ordering::Relaxed);
    }

    pub fn encodes(&self) -> u64 {
        self.encodes.load(Ordering::Relaxed)
    }

    pub fn encode_overflows(&self) -> u64 {
        self.encode_overflows.load(Ordering::Relaxed)
    }

    pub fn decodes(&self) -> u64 {
        self.decodes.load(Ordering::Relaxed)
    }

    pub fn decode_attempts(&self) -> u64 {
        self.decode_attempts.load(Ordering::Relaxed)
    }

    pub fn decode_rejected(&self) -> u64 {
        self.decode_rejected.load(Ordering::Relaxed)
    }

    pub fn bytes_plaintext(&self) -> u64 {
        self.bytes_plaintext.load(Ordering::Relaxed)
    }

    pub fn bytes_sentence(&self) -> u64 {
        self.bytes_sentence.load(Ordering::Relaxed)
    }
}
