//! Affine points on a short Weierstrass curve `y^2 = x^3 + ax + b`.

use core::fmt::{self, Display, Formatter};
use core::ops::Neg;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{CurveError, FieldElement};

/// Affine point on the curve `y^2 = x^3 + ax + b`.
///
/// `xy` is `None` for the point at infinity. The identity carries its
/// curve coefficients, so identities of different curves compare unequal.
/// Decoded points are validated like [`Point::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PointRepr")]
pub struct Point {
    xy: Option<(FieldElement, FieldElement)>,
    a: FieldElement,
    b: FieldElement,
}

#[derive(Deserialize)]
struct PointRepr {
    xy: Option<(FieldElement, FieldElement)>,
    a: FieldElement,
    b: FieldElement,
}

impl TryFrom<PointRepr> for Point {
    type Error = CurveError;

    fn try_from(repr: PointRepr) -> Result<Self, Self::Error> {
        match repr.xy {
            Some((x, y)) => Self::new(x, y, repr.a, repr.b),
            None if repr.a.same_field(&repr.b) => Ok(Self::infinity(repr.a, repr.b)),
            None => Err(CurveError::MismatchedField {
                left: repr.a.prime().clone(),
                right: repr.b.prime().clone(),
            }),
        }
    }
}

impl Point {
    /// Create a finite point, checking that it lies on the curve.
    pub fn new(
        x: FieldElement,
        y: FieldElement,
        a: FieldElement,
        b: FieldElement,
    ) -> Result<Self, CurveError> {
        for other in [&b, &x, &y] {
            if !a.same_field(other) {
                return Err(CurveError::MismatchedField {
                    left: a.prime().clone(),
                    right: other.prime().clone(),
                });
            }
        }

        if !satisfies_curve(&x, &y, &a, &b) {
            return Err(CurveError::NotOnCurve {
                x: x.num().clone(),
                y: y.num().clone(),
            });
        }
        Ok(Self::new_unchecked(x, y, a, b))
    }

    /// Build a point whose coordinates are known to satisfy the curve.
    pub(crate) fn new_unchecked(
        x: FieldElement,
        y: FieldElement,
        a: FieldElement,
        b: FieldElement,
    ) -> Self {
        Self {
            xy: Some((x, y)),
            a,
            b,
        }
    }

    /// The point at infinity of the curve with coefficients `a` and `b`.
    pub fn infinity(a: FieldElement, b: FieldElement) -> Self {
        Self { xy: None, a, b }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.xy.is_none()
    }

    #[inline]
    pub fn x(&self) -> Option<&FieldElement> {
        self.xy.as_ref().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<&FieldElement> {
        self.xy.as_ref().map(|(_, y)| y)
    }

    fn coords(&self) -> Option<(&FieldElement, &FieldElement)> {
        self.xy.as_ref().map(|(x, y)| (x, y))
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Whether `other` lives on the same curve as `self`.
    #[inline]
    pub fn same_curve(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }

    /// The identity of this point's curve.
    pub fn identity(&self) -> Self {
        Self::infinity(self.a.clone(), self.b.clone())
    }

    /// Check `y^2 = x^3 + ax + b`. The identity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self.coords() {
            Some((x, y)) => satisfies_curve(x, y, &self.a, &self.b),
            None => true,
        }
    }

    /// Group addition.
    pub fn try_add(&self, other: &Self) -> Result<Self, CurveError> {
        if !self.same_curve(other) {
            return Err(CurveError::CurveMismatch);
        }

        let Some((x1, y1)) = self.coords() else {
            return Ok(other.clone());
        };
        let Some((x2, y2)) = other.coords() else {
            return Ok(self.clone());
        };

        if x1 == x2 {
            if y1 != y2 {
                // Vertical line through P and -P.
                return Ok(self.identity());
            }
            return self.double();
        }

        // s = (y2 - y1) / (x2 - x1)
        let s = y2.try_sub(y1)?.try_div(&x2.try_sub(x1)?)?;

        // x3 = s^2 - x1 - x2
        let x3 = s.try_mul(&s)?.try_sub(x1)?.try_sub(x2)?;

        // y3 = s(x1 - x3) - y1
        let y3 = s.try_mul(&x1.try_sub(&x3)?)?.try_sub(y1)?;

        Ok(Self::new_unchecked(x3, y3, self.a.clone(), self.b.clone()))
    }

    /// Point doubling: `2P`.
    pub fn double(&self) -> Result<Self, CurveError> {
        let Some((x1, y1)) = self.coords() else {
            return Ok(self.clone());
        };

        // Tangent is vertical.
        if y1.is_zero() {
            return Ok(self.identity());
        }

        // s = (3x^2 + a) / 2y
        let numerator = x1.try_mul(x1)?.scale(&BigUint::from(3u32)).try_add(&self.a)?;
        let denominator = y1.scale(&BigUint::from(2u32));
        let s = numerator.try_div(&denominator)?;

        // x3 = s^2 - 2x
        let x3 = s.try_mul(&s)?.try_sub(&x1.scale(&BigUint::from(2u32)))?;

        // y3 = s(x - x3) - y
        let y3 = s.try_mul(&x1.try_sub(&x3)?)?.try_sub(y1)?;

        Ok(Self::new_unchecked(x3, y3, self.a.clone(), self.b.clone()))
    }

    /// `-P = (x, -y)`.
    pub fn negate(&self) -> Self {
        match self.coords() {
            Some((x, y)) => Self::new_unchecked(x.clone(), -y, self.a.clone(), self.b.clone()),
            None => self.clone(),
        }
    }
}

fn satisfies_curve(
    x: &FieldElement,
    y: &FieldElement,
    a: &FieldElement,
    b: &FieldElement,
) -> bool {
    let check = || -> Result<bool, CurveError> {
        let y2 = y.try_mul(y)?;
        let x3 = x.try_mul(x)?.try_mul(x)?;
        let rhs = x3.try_add(&a.try_mul(x)?)?.try_add(b)?;
        Ok(y2 == rhs)
    };
    check().unwrap_or(false)
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.coords() {
            Some((x, y)) => write!(
                f,
                "Point({},{})_{}_{} FieldElement({})",
                x.num(),
                y.num(),
                self.a.num(),
                self.b.num(),
                x.prime()
            ),
            None => write!(f, "Point(infinity)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIME: u64 = 223;

    fn fe(num: u64) -> FieldElement {
        FieldElement::from_u64(num, PRIME).unwrap()
    }

    fn point(x: u64, y: u64) -> Point {
        Point::new(fe(x), fe(y), fe(0), fe(7)).unwrap()
    }

    fn inf() -> Point {
        Point::infinity(fe(0), fe(7))
    }

    #[test]
    fn test_on_curve() {
        for (x, y) in [(192, 105), (17, 56), (1, 193)] {
            assert!(Point::new(fe(x), fe(y), fe(0), fe(7)).is_ok());
        }
        for (x, y) in [(200, 119), (42, 99)] {
            let err = Point::new(fe(x), fe(y), fe(0), fe(7)).unwrap_err();
            assert!(matches!(err, CurveError::NotOnCurve { .. }));
        }
    }

    #[test]
    fn test_new_rejects_mixed_fields() {
        let x = FieldElement::from_u64(192, 227).unwrap();
        let err = Point::new(x, fe(105), fe(0), fe(7)).unwrap_err();
        assert!(matches!(err, CurveError::MismatchedField { .. }));
    }

    #[test]
    fn test_infinity() {
        let inf = inf();
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
        assert_eq!(inf.x(), None);
        assert_ne!(inf, Point::infinity(fe(5), fe(7)));
    }

    #[test]
    fn test_add() {
        let cases = [
            ((170, 142), (60, 139), (220, 181)),
            ((47, 71), (17, 56), (215, 68)),
            ((143, 98), (76, 66), (47, 71)),
        ];
        for ((x1, y1), (x2, y2), (x3, y3)) in cases {
            assert_eq!(point(x1, y1).try_add(&point(x2, y2)).unwrap(), point(x3, y3));
        }
    }

    #[test]
    fn test_add_identity() {
        let p = point(192, 105);
        assert_eq!(p.try_add(&inf()).unwrap(), p);
        assert_eq!(inf().try_add(&p).unwrap(), p);
        assert_eq!(inf().try_add(&inf()).unwrap(), inf());
    }

    #[test]
    fn test_add_inverse() {
        let p = point(47, 71);
        assert_eq!(p.try_add(&-&p).unwrap(), inf());
    }

    #[test]
    fn test_double() {
        assert_eq!(point(192, 105).double().unwrap(), point(49, 71));
        assert_eq!(point(143, 98).try_add(&point(143, 98)).unwrap(), point(64, 168));
        assert_eq!(point(47, 71).double().unwrap(), point(36, 111));
    }

    #[test]
    fn test_double_vertical_tangent() {
        // y^2 = x^3 + 7 over F_223 has no y = 0 point, use y^2 = x^3 - x instead.
        let a = fe(PRIME - 1);
        let b = fe(0);
        let p = Point::new(fe(1), fe(0), a.clone(), b.clone()).unwrap();
        assert_eq!(p.try_add(&p).unwrap(), Point::infinity(a, b));
    }

    #[test]
    fn test_commutative_and_associative() {
        let p = point(192, 105);
        let q = point(17, 56);
        let r = point(1, 193);
        assert_eq!(p.try_add(&q).unwrap(), q.try_add(&p).unwrap());
        assert_eq!(
            p.try_add(&q).unwrap().try_add(&r).unwrap(),
            p.try_add(&q.try_add(&r).unwrap()).unwrap()
        );
    }

    #[test]
    fn test_curve_mismatch() {
        let p = point(192, 105);
        let q = Point::infinity(fe(5), fe(7));
        assert_eq!(p.try_add(&q).unwrap_err(), CurveError::CurveMismatch);
    }

    #[derive(Serialize)]
    struct Raw {
        xy: Option<(FieldElement, FieldElement)>,
        a: FieldElement,
        b: FieldElement,
    }

    #[test]
    fn test_serde_roundtrip() {
        for p in [point(47, 71), inf()] {
            let bytes = bincode::serialize(&p).unwrap();
            let decoded: Point = bincode::deserialize(&bytes).unwrap();
            assert_eq!(decoded, p);
        }
    }

    #[test]
    fn test_deserialize_rejects_invalid_points() {
        let off_curve = Raw {
            xy: Some((fe(200), fe(119))),
            a: fe(0),
            b: fe(7),
        };
        let mixed_identity = Raw {
            xy: None,
            a: fe(0),
            b: FieldElement::from_u64(7, 227).unwrap(),
        };
        for raw in [off_curve, mixed_identity] {
            let bytes = bincode::serialize(&raw).unwrap();
            assert!(bincode::deserialize::<Point>(&bytes).is_err());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(inf().to_string(), "Point(infinity)");
        assert_eq!(
            point(192, 105).to_string(),
            "Point(192,105)_0_7 FieldElement(223)"
        );
    }
}
