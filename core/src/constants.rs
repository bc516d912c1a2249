/// Frame format version tag.
pub const FRAME_V1: u8 = 1;

/// AEAD nonce length (AES-GCM, 12 bytes).
pub const NONCE_LEN_12: usize = 12;

/// AEAD authentication tag length (bytes).
pub const TAG_LEN_16: usize = 16;

/// Plaintext length field width (u32, big-endian).
pub const PLAINTEXT_LEN_FIELD: usize = 4;

/// Fixed frame header length:
/// version(1) | nonce(12) | tag(16) | plaintext_len(4).
/// Every serialized frame is at least this long; ciphertext may be empty.
pub const FRAME_HEADER_LEN: usize = 1 + NONCE_LEN_12 + TAG_LEN_16 + PLAINTEXT_LEN_FIELD;

/// Mapping key length for the keyed seed hash (keyed BLAKE3).
pub const MAP_KEY_LEN_32: usize = 32;

/// Seed length produced by the keyed hash.
pub const SEED_LEN_32: usize = 32;
