//! Deterministic per-message nonces.
//!
//! The nonce is derived from the private key and the message digest with an
//! HMAC-SHA256 construction (RFC 6979, section 3.2, specialized to a 256-bit
//! group order). The same `(secret, z)` pair always yields the same `k`.

use curve::CurveParams;
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Sha256;
use tracing::trace;

use crate::constants::SCALAR_SIZE;
use crate::errors::EcdsaError;

type HmacSha256 = Hmac<Sha256>;

/// Big-endian, zero-padded 32-byte encoding of `value`.
pub(crate) fn scalar_to_bytes(value: &BigUint) -> Result<[u8; SCALAR_SIZE], EcdsaError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > SCALAR_SIZE {
        return Err(EcdsaError::ScalarTooLarge);
    }
    let mut out = [0u8; SCALAR_SIZE];
    out[SCALAR_SIZE - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

fn hmac(key: &[u8; SCALAR_SIZE], parts: &[&[u8]]) -> Result<[u8; SCALAR_SIZE], EcdsaError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| EcdsaError::NonceDerivation)?;
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; SCALAR_SIZE];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Derive the signing nonce `k` in `[1, n-1]` for `secret` and digest `z`.
///
/// Both inputs must fit in 32 bytes. A digest `z >= n` is reduced once by
/// subtracting `n`.
pub fn deterministic_k(secret: &BigUint, z: &BigUint) -> Result<BigUint, EcdsaError> {
    let n = CurveParams::secp256k1().n();

    let secret_bytes = scalar_to_bytes(secret)?;
    scalar_to_bytes(z)?;
    let z = if z >= n { z - n } else { z.clone() };
    let z_bytes = scalar_to_bytes(&z)?;

    let mut k = [0x00u8; SCALAR_SIZE];
    let mut v = [0x01u8; SCALAR_SIZE];

    k = hmac(&k, &[&v[..], &[0x00u8][..], &secret_bytes[..], &z_bytes[..]])?;
    v = hmac(&k, &[&v[..]])?;
    k = hmac(&k, &[&v[..], &[0x01u8][..], &secret_bytes[..], &z_bytes[..]])?;
    v = hmac(&k, &[&v[..]])?;

    loop {
        v = hmac(&k, &[&v[..]])?;
        let candidate = BigUint::from_bytes_be(&v);
        if !candidate.is_zero() && &candidate < n {
            return Ok(candidate);
        }

        trace!("nonce candidate outside [1, n-1], reseeding");
        k = hmac(&k, &[&v[..], &[0x00u8][..]])?;
        v = hmac(&k, &[&v[..]])?;
    }
}
