//! ECDSA signing and verification over secp256k1.

use core::fmt::{self, Display, Formatter};

use curve::{CurveParams, Point};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::constants::{SCALAR_SIZE, SIG_SIZE};
use crate::errors::EcdsaError;
use crate::nonce::deterministic_k;

/// An ECDSA signature `(r, s)` with both components in `[1, n-1]`.
///
/// Signatures produced by [`sign`] are in low-s form, `s <= n/2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SignatureRepr")]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

#[derive(Deserialize)]
struct SignatureRepr {
    r: BigUint,
    s: BigUint,
}

impl TryFrom<SignatureRepr> for Signature {
    type Error = EcdsaError;

    fn try_from(repr: SignatureRepr) -> Result<Self, Self::Error> {
        Self::new(repr.r, repr.s)
    }
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Result<Self, EcdsaError> {
        let n = CurveParams::secp256k1().n();
        for component in [&r, &s] {
            if component.is_zero() || component >= n {
                return Err(EcdsaError::ScalarOutOfRange);
            }
        }
        Ok(Self { r, s })
    }

    #[inline]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Whether `s <= n/2`.
    pub fn is_low_s(&self) -> bool {
        self.s <= CurveParams::secp256k1().n() / 2u32
    }

    /// Compact encoding: 32-byte big-endian `r` followed by `s`.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        // r, s < n, so each fits in SCALAR_SIZE bytes.
        for (chunk, value) in out.chunks_exact_mut(SCALAR_SIZE).zip([&self.r, &self.s]) {
            let bytes = value.to_bytes_be();
            chunk[SCALAR_SIZE - bytes.len()..].copy_from_slice(&bytes);
        }
        out
    }

    /// Parse the compact `r || s` encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() != SIG_SIZE {
            return Err(EcdsaError::InvalidLength {
                expected: SIG_SIZE,
                actual: bytes.len(),
            });
        }
        let (r, s) = bytes.split_at(SCALAR_SIZE);
        Self::new(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:064x},{:064x})", self.r, self.s)
    }
}

/// Sign the digest `z` with `secret`.
///
/// 1. `k = deterministic_k(secret, z)`
/// 2. `r = (k * G).x mod n`
/// 3. `s = (z + r * secret) / k mod n`
/// 4. if `s > n/2`, `s = n - s`
#[instrument(level = "debug", skip_all)]
pub fn sign(secret: &BigUint, z: &BigUint) -> Result<Signature, EcdsaError> {
    let params = CurveParams::secp256k1();
    let n = params.n();
    if secret.is_zero() || secret >= n {
        return Err(EcdsaError::ScalarOutOfRange);
    }

    let k = deterministic_k(secret, z)?;
    let commitment = params.mul_generator(&k)?;
    let r = commitment
        .x()
        .map(|x| x.num() % n)
        .ok_or(EcdsaError::DegenerateSignature)?;
    if r.is_zero() {
        return Err(EcdsaError::DegenerateSignature);
    }

    let k_inv = params.scalar(k)?.inverse()?;
    let e = params.scalar(z % n)?;
    let rd = params.scalar(r.clone())?.try_mul(&params.scalar(secret.clone())?)?;
    let s = e.try_add(&rd)?.try_mul(&k_inv)?;

    let mut s = s.num().clone();
    if s > n / 2u32 {
        s = n - &s;
    }
    if s.is_zero() {
        return Err(EcdsaError::DegenerateSignature);
    }

    debug!(r = %format_args!("{r:064x}"), "signed digest");
    Ok(Signature { r, s })
}

/// Check `signature` over the digest `z` against `public`.
///
/// Computes `u = z / s`, `v = r / s` and accepts iff the x-coordinate of
/// `u * G + v * public` equals `r` modulo `n`. Any malformed input, such as
/// a point off the curve, yields `false`.
#[instrument(level = "debug", skip_all)]
pub fn verify(public: &Point, z: &BigUint, signature: &Signature) -> bool {
    match try_verify(public, z, signature) {
        Ok(valid) => {
            debug!(valid, "verified signature");
            valid
        }
        Err(err) => {
            debug!(%err, "signature rejected");
            false
        }
    }
}

fn try_verify(public: &Point, z: &BigUint, signature: &Signature) -> Result<bool, EcdsaError> {
    let params = CurveParams::secp256k1();
    let n = params.n();
    if public.is_infinity() || !params.contains(public) {
        return Err(EcdsaError::InvalidPoint);
    }

    let s_inv = params.scalar(signature.s.clone())?.inverse()?;
    let u = params.scalar(z % n)?.try_mul(&s_inv)?;
    let v = params.scalar(signature.r.clone())?.try_mul(&s_inv)?;

    let total = params
        .mul_generator(u.num())?
        .try_add(&params.mul(v.num(), public)?)?;

    Ok(total.x().is_some_and(|x| x.num() % n == signature.r))
}
