//! Error types for field and curve arithmetic.

use num_bigint::BigUint;

/// Errors raised by field element and curve point operations.
///
/// Every variant is a local, synchronous failure caused by the caller's
/// input. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// A field value outside `[0, prime)`.
    #[error("value {num} is not in the range [0, {prime})")]
    OutOfRange { num: BigUint, prime: BigUint },
    /// Two field elements with different moduli were combined.
    #[error("cannot combine elements of F_{left} and F_{right}")]
    MismatchedField { left: BigUint, right: BigUint },
    /// Two points on different curves were combined.
    #[error("points are not on the same curve")]
    CurveMismatch,
    /// The coordinates do not satisfy `y^2 = x^3 + ax + b`.
    #[error("({x}, {y}) is not on the curve")]
    NotOnCurve { x: BigUint, y: BigUint },
    /// The zero element has no multiplicative inverse.
    #[error("division by zero in F_{prime}")]
    DivisionByZero { prime: BigUint },
    /// A claimed group order that is not the order of the base point.
    #[error("{n} is not the order of the base point")]
    InvalidOrder { n: BigUint },
}
