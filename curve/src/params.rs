//! Fixed curve configuration.
//!
//! secp256k1: y^2 = x^3 + 7 over F_p, p = 2^256 - 2^32 - 977
//! Group order n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//! Cofactor: 1

use std::sync::LazyLock;

use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

use crate::{CurveError, FieldElement, Point, Scalar};

const SECP256K1_P: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
const SECP256K1_N: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
const SECP256K1_GX: [u8; 32] =
    hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
const SECP256K1_GY: [u8; 32] =
    hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

static SECP256K1: LazyLock<CurveParams> = LazyLock::new(|| {
    let p = BigUint::from_bytes_be(&SECP256K1_P);
    let field = |num: BigUint| FieldElement::new_unchecked(num, p.clone());

    let a = field(BigUint::zero());
    let b = field(BigUint::from(7u32));
    let g = Point::new_unchecked(
        field(BigUint::from_bytes_be(&SECP256K1_GX)),
        field(BigUint::from_bytes_be(&SECP256K1_GY)),
        a.clone(),
        b.clone(),
    );

    CurveParams {
        a,
        b,
        p,
        n: BigUint::from_bytes_be(&SECP256K1_N),
        g,
    }
});

/// Parameters of a short Weierstrass curve with a distinguished base point.
///
/// `n` is the order of `g`. Scalars are reduced modulo `n` before they
/// drive a multiplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    a: FieldElement,
    b: FieldElement,
    p: BigUint,
    n: BigUint,
    g: Point,
}

impl CurveParams {
    /// Assemble curve parameters, checking that the base point is on the
    /// curve and that `n * G` is the identity.
    pub fn new(
        a: BigUint,
        b: BigUint,
        p: BigUint,
        n: BigUint,
        gx: BigUint,
        gy: BigUint,
    ) -> Result<Self, CurveError> {
        if n <= BigUint::one() {
            return Err(CurveError::InvalidOrder { n });
        }
        let a = FieldElement::new(a, p.clone())?;
        let b = FieldElement::new(b, p.clone())?;
        let g = Point::new(
            FieldElement::new(gx, p.clone())?,
            FieldElement::new(gy, p.clone())?,
            a.clone(),
            b.clone(),
        )?;
        if !g.scalar_mul(&n)?.is_infinity() {
            return Err(CurveError::InvalidOrder { n });
        }
        Ok(Self { a, b, p, n, g })
    }

    /// The secp256k1 parameters, built once per process.
    pub fn secp256k1() -> &'static Self {
        &SECP256K1
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// The base field modulus.
    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The order of the base point.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    #[inline]
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Element of the base field.
    pub fn field(&self, num: BigUint) -> Result<FieldElement, CurveError> {
        FieldElement::new(num, self.p.clone())
    }

    /// Element of the scalar field, i.e. integers modulo `n`.
    pub fn scalar(&self, num: BigUint) -> Result<FieldElement, CurveError> {
        FieldElement::new(num, self.n.clone())
    }

    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point, CurveError> {
        Point::new(self.field(x)?, self.field(y)?, self.a.clone(), self.b.clone())
    }

    pub fn infinity(&self) -> Point {
        Point::infinity(self.a.clone(), self.b.clone())
    }

    /// Whether `point` is a valid point of this curve.
    pub fn contains(&self, point: &Point) -> bool {
        point.a() == &self.a && point.b() == &self.b && point.is_on_curve()
    }

    /// `k * point` with `k` reduced modulo the group order.
    pub fn mul(&self, k: &Scalar, point: &Point) -> Result<Point, CurveError> {
        if point.a() != &self.a || point.b() != &self.b {
            return Err(CurveError::CurveMismatch);
        }
        let k = k % &self.n;
        trace!(bits = k.bits(), "scalar multiplication");
        point.scalar_mul(&k)
    }

    /// `k * G`.
    pub fn mul_generator(&self, k: &Scalar) -> Result<Point, CurveError> {
        self.mul(k, &self.g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(hex: &str) -> BigUint {
        BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
    }

    fn toy(n: u32) -> Result<CurveParams, CurveError> {
        CurveParams::new(
            BigUint::zero(),
            BigUint::from(7u32),
            BigUint::from(223u32),
            BigUint::from(n),
            BigUint::from(47u32),
            BigUint::from(71u32),
        )
    }

    #[test]
    fn test_generator_on_curve() {
        let params = CurveParams::secp256k1();
        let g = params.generator();
        assert!(g.is_on_curve());
        assert!(params.contains(g));
        assert!(!g.is_infinity());
    }

    #[test]
    fn test_constants() {
        let params = CurveParams::secp256k1();
        let expected_p = (BigUint::from(1u32) << 256u32)
            - (BigUint::from(1u32) << 32u32)
            - BigUint::from(977u32);
        assert_eq!(params.p(), &expected_p);
        assert_eq!(params.n().bits(), 256);
        assert!(params.n() < params.p());
    }

    #[test]
    fn test_order_of_generator() {
        let params = CurveParams::secp256k1();
        let g = params.generator();
        assert_eq!(g.scalar_mul(params.n()).unwrap(), params.infinity());
        assert_eq!(params.mul_generator(params.n()).unwrap(), params.infinity());
    }

    #[test]
    fn test_mul_reduces_modulo_n() {
        let params = CurveParams::secp256k1();
        let k = BigUint::from(12345u32);
        let wrapped = params.n() + &k;
        assert_eq!(
            params.mul_generator(&wrapped).unwrap(),
            params.mul_generator(&k).unwrap()
        );
    }

    #[test]
    fn test_small_multiples() {
        let params = CurveParams::secp256k1();
        let cases = [
            (
                2u64,
                "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
                "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
            ),
            (
                3,
                "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
                "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
            ),
            (
                7,
                "5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc",
                "6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da",
            ),
        ];
        for (k, x, y) in cases {
            let expected = params.point(from_hex(x), from_hex(y)).unwrap();
            assert_eq!(params.mul_generator(&BigUint::from(k)).unwrap(), expected);
        }
    }

    #[test]
    fn test_point_rejects_off_curve() {
        let params = CurveParams::secp256k1();
        let err = params
            .point(BigUint::from(1u32), BigUint::from(1u32))
            .unwrap_err();
        assert!(matches!(err, CurveError::NotOnCurve { .. }));
    }

    #[test]
    fn test_mul_rejects_foreign_point() {
        let params = CurveParams::secp256k1();
        let toy = toy(21).unwrap();
        assert!(!params.contains(toy.generator()));
        assert_eq!(
            params.mul(&BigUint::from(2u32), toy.generator()).unwrap_err(),
            CurveError::CurveMismatch
        );
    }

    #[test]
    fn test_toy_curve_order() {
        let toy = toy(21).unwrap();
        assert_eq!(toy.mul_generator(toy.n()).unwrap(), toy.infinity());
        assert_eq!(
            toy.mul_generator(&BigUint::from(23u32)).unwrap(),
            toy.mul_generator(&BigUint::from(2u32)).unwrap()
        );
    }

    #[test]
    fn test_new_rejects_bad_order() {
        for n in [0u32, 1, 7, 22] {
            assert_eq!(
                toy(n).unwrap_err(),
                CurveError::InvalidOrder {
                    n: BigUint::from(n)
                }
            );
        }
        assert!(toy(21).is_ok());
    }
}
