//! Private and public keys over secp256k1.

use curve::{CurveParams, Point, random_nonzero_below};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::EcdsaError;
use crate::signatures::{Signature, sign, verify};

/// A secret scalar in `[1, n-1]` together with its public point.
///
/// The public point `secret * G` is computed once, at construction. Only the
/// secret is serialized; decoding recomputes the public point.
///
/// # Example
///
/// ```
/// use ecdsa::PrivateKey;
/// use num_bigint::BigUint;
///
/// let key = PrivateKey::new(BigUint::from(12345u32)).expect("valid secret");
/// let z = ecdsa::message_digest(b"Programming Bitcoin!");
/// let signature = key.sign(&z).expect("signing failed");
/// assert!(key.public_key().verify(&z, &signature));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PrivateKeyRepr", try_from = "PrivateKeyRepr")]
pub struct PrivateKey {
    secret: BigUint,
    public: PublicKey,
}

/// A secp256k1 point other than the identity, used to verify signatures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PublicKeyRepr")]
pub struct PublicKey {
    point: Point,
}

#[derive(Serialize, Deserialize)]
struct PrivateKeyRepr {
    secret: BigUint,
}

impl From<PrivateKey> for PrivateKeyRepr {
    fn from(key: PrivateKey) -> Self {
        Self { secret: key.secret }
    }
}

impl TryFrom<PrivateKeyRepr> for PrivateKey {
    type Error = EcdsaError;

    fn try_from(repr: PrivateKeyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.secret)
    }
}

#[derive(Deserialize)]
struct PublicKeyRepr {
    point: Point,
}

impl TryFrom<PublicKeyRepr> for PublicKey {
    type Error = EcdsaError;

    fn try_from(repr: PublicKeyRepr) -> Result<Self, Self::Error> {
        Self::from_point(repr.point)
    }
}

impl PrivateKey {
    /// Build a key from a secret scalar, rejecting values outside `[1, n-1]`.
    pub fn new(secret: BigUint) -> Result<Self, EcdsaError> {
        let params = CurveParams::secp256k1();
        if secret.is_zero() || &secret >= params.n() {
            return Err(EcdsaError::ScalarOutOfRange);
        }

        let point = params.mul_generator(&secret)?;
        Ok(Self {
            secret,
            public: PublicKey { point },
        })
    }

    /// Generate a random key using the provided random number generator.
    ///
    /// # Example
    ///
    /// ```
    /// use ecdsa::PrivateKey;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let key = PrivateKey::random(&mut rng).expect("keygen");
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, EcdsaError> {
        let n = CurveParams::secp256k1().n();
        let secret = random_nonzero_below(rng, n).ok_or(EcdsaError::ScalarOutOfRange)?;
        Self::new(secret)
    }

    #[inline]
    pub fn secret(&self) -> &BigUint {
        &self.secret
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The secret as 64 zero-padded hex characters.
    pub fn to_hex(&self) -> String {
        format!("{:064x}", self.secret)
    }

    /// Sign the digest `z` with a deterministic nonce.
    pub fn sign(&self, z: &BigUint) -> Result<Signature, EcdsaError> {
        sign(&self.secret, z)
    }
}

impl PublicKey {
    /// Wrap a point, rejecting the identity and points off secp256k1.
    pub fn from_point(point: Point) -> Result<Self, EcdsaError> {
        if point.is_infinity() || !CurveParams::secp256k1().contains(&point) {
            return Err(EcdsaError::InvalidPoint);
        }
        Ok(Self { point })
    }

    /// Build a key from affine coordinates.
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Result<Self, EcdsaError> {
        let point = CurveParams::secp256k1().point(x, y)?;
        Self::from_point(point)
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Check `signature` over the digest `z`. Never fails; an invalid
    /// signature is `false`.
    pub fn verify(&self, z: &BigUint, signature: &Signature) -> bool {
        verify(&self.point, z, signature)
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(key: &PrivateKey) -> Self {
        key.public.clone()
    }
}
