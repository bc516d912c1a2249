//! telemetry/mod.rs
//! Codec telemetry: counters collected during encode/decode and an immutable
//! serializable snapshot.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
