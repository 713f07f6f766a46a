//! Error types for key handling, signing and verification.

use curve::CurveError;

/// Errors that can occur while building keys or producing signatures.
///
/// A signature that fails to verify is not an error: [`crate::verify`]
/// reports it as `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcdsaError {
    /// A private key or signature component outside `[1, n-1]`.
    #[error("scalar is not in the range [1, n-1]")]
    ScalarOutOfRange,
    /// An integer input that does not fit in 32 big-endian bytes.
    #[error("integer does not fit in 32 bytes")]
    ScalarTooLarge,
    /// A public key that is the point at infinity or not on secp256k1.
    #[error("point is not a valid secp256k1 public key")]
    InvalidPoint,
    /// The signing equation produced `r = 0` or `s = 0`.
    ///
    /// With a deterministic nonce this cannot be retried for the same
    /// `(secret, z)` pair; the probability is negligible.
    #[error("signing produced a zero r or s")]
    DegenerateSignature,
    /// The HMAC could not be keyed.
    #[error("nonce derivation failed")]
    NonceDerivation,
    /// A byte-encoded signature of the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error(transparent)]
    Curve(#[from] CurveError),
}
