//! Message digests.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::constants::SCALAR_SIZE;

/// `SHA256(SHA256(data))`.
pub fn hash256(data: &[u8]) -> [u8; SCALAR_SIZE] {
    let first = Sha256::digest(data);
    let mut out = [0u8; SCALAR_SIZE];
    out.copy_from_slice(&Sha256::digest(first));
    out
}

/// The digest `z` signed for `data`: `hash256(data)` read as a big-endian
/// integer.
pub fn message_digest(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&hash256(data))
}
