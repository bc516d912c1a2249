//! template/mod.rs
//! Public module export for sentence templates.
//!
//! Notes:
//! - A template is immutable configuration: literal fragments interleaved
//!   with word slots, each slot backed by a finite ordered vocabulary.
//! - Template-set ordering is wire-significant: it is radix position 0's
//!   domain and must be identical on both sides of the codec.
//! - All structural invariants (fragment/slot arity, distinct words, no
//!   whitespace inside words) are enforced at construction, never at decode.

pub mod types;
pub mod matcher;

pub use types::*;
