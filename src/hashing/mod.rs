//! BLAKE3 helpers for artifact fingerprints and deterministic seeds.

/// Full 256-bit BLAKE3 digest.
#[inline]
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Used to seed the stub encoder. Not suitable where collisions matter; use
/// [`hash_bytes`] or [`fingerprint_hex`] there.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}

/// Hex-encoded BLAKE3 digest, logged when artifacts are loaded.
#[inline]
pub fn fingerprint_hex(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// First 12 hex characters of [`fingerprint_hex`], for log lines.
#[inline]
pub fn short_fingerprint(data: &[u8]) -> String {
    let mut hex = fingerprint_hex(data);
    hex.truncate(12);
    hex
}
