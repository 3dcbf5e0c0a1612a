//! Message digest transform
//!
//! Converts a text message into a bounded integer usable in the modular
//! arithmetic of signing and verification.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use tracing::trace;

/// Digest a message into an integer bounded by `q`.
///
/// The SHA-256 hash of the message's UTF-8 bytes is read as a little-endian
/// unsigned integer and combined with `q` by bitwise AND, not a modular
/// reduction. Every set bit of the result is therefore also set in `q`.
pub fn message_digest(text: &str, q: &BigUint) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let hash = hasher.finalize();

    trace!(hash = %hex::encode(&hash), "Message hashed");

    BigUint::from_bytes_le(&hash) & q
}
