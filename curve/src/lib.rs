//! Prime field and elliptic curve arithmetic for short Weierstrass curves.
//!
//! This crate provides field elements over a runtime prime, affine curve
//! points with the chord-and-tangent group law, double-and-add scalar
//! multiplication, and the fixed secp256k1 parameters in [`CurveParams`].

mod error;
mod field;
mod group;
mod params;
mod point;
mod random;

pub use error::CurveError;
pub use field::FieldElement;
pub use params::CurveParams;
pub use point::Point;
pub use random::random_nonzero_below;

/// Integer multiplier of a curve point, reduced modulo the group order
/// before use on a fixed curve.
pub type Scalar = num_bigint::BigUint;
