//! Sizes of the byte encodings used by this crate.

/// Size of a big-endian scalar: private keys, digests, nonces and the
/// HMAC seed buffers of the nonce generator.
pub const SCALAR_SIZE: usize = 32;

/// Size of a compact signature encoding, `r || s`.
pub const SIG_SIZE: usize = 2 * SCALAR_SIZE;
