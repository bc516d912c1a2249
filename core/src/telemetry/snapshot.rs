//! telemetry/snapshot.rs
//!
//! Telemetry snapshot structure and conversion.
//!
//! Design notes:
//! - `TelemetrySnapshot` is a plain-field mirror of the live counters,
//!   serializable for logs and diagnostics.
//! - `expansion_ratio` captures the cost of the sentence representation:
//!   rendered bytes per plaintext byte.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;

/// Immutable telemetry snapshot of one codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub encodes: u64,
    pub encode_overflows: u64,
    pub decodes: u64,
    pub decode_attempts: u64,
    pub decode_rejected: u64,
    pub bytes_plaintext: u64,
    pub bytes_sentence: u64,
    pub expansion_ratio: f64,
}

impl TelemetrySnapshot {
    pub fn from_counters(counters: &CodecCounters) -> Self {
        let bytes_plaintext = counters.bytes_plaintext();
        let bytes_sentence = counters.bytes_sentence();

        let expansion_ratio = if bytes_plaintext > 0 {
            bytes_sentence as f64 / bytes_plaintext as f64
        } else {
            0.0
        };

        Self {
            encodes: counters.encodes(),
            encode_overflows: counters.encode_overflows(),
            decodes: counters.decodes(),
            decode_attempts: counters.decode_attempts(),
            decode_rejected: counters.decode_rejected(),
            bytes_plaintext,
            bytes_sentence,
            expansion_ratio,
        }
    }
}
