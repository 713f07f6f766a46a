//! ECDSA over secp256k1 with deterministic nonces.
//!
//! This library implements signing and verification on top of the `curve`
//! crate:
//! - Nonces are derived from the private key and message digest with
//!   HMAC-SHA256 (RFC 6979), so signing needs no randomness
//! - Signatures are normalized to low-s form
//! - Verification failure is a `false` result, never an error
//!
//! # Example
//!
//! ```
//! use ecdsa::{PrivateKey, message_digest};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let key = PrivateKey::random(&mut rng).expect("keygen");
//!
//! let z = message_digest(b"my message");
//! let signature = key.sign(&z).expect("signing failed");
//!
//! assert!(key.public_key().verify(&z, &signature));
//! assert!(!key.public_key().verify(&message_digest(b"my massage"), &signature));
//! ```
//!
//! # Scope
//!
//! The crate works on digests and integers only. Transaction formats, DER
//! encoding and key storage are left to callers.

mod constants;
mod errors;
mod hash;
mod keys;
mod nonce;
mod signatures;


pub use constants::{SCALAR_SIZE, SIG_SIZE};
pub use errors::EcdsaError;
pub use hash::{hash256, message_digest};
pub use keys::{PrivateKey, PublicKey};
pub use nonce::deterministic_k;
pub use signatures::{Signature, sign, verify};
