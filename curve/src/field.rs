//! Prime field arithmetic over a runtime modulus.
//!
//! A [`FieldElement`] carries its own prime, so the same type serves the toy
//! fields used in tests (F_31, F_223) and the 256-bit secp256k1 base and
//! scalar fields. Binary operations check that both operands live in the same
//! field and fail with [`CurveError::MismatchedField`] otherwise.

use core::fmt::{self, Display, Formatter};
use core::ops::Neg;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::CurveError;

/// Element of the prime field F_p, with `0 <= num < prime`.
///
/// Deserialization goes through [`FieldElement::new`], so a decoded value
/// upholds the same range invariant as a constructed one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FieldElementRepr")]
pub struct FieldElement {
    num: BigUint,
    prime: BigUint,
}

#[derive(Deserialize)]
struct FieldElementRepr {
    num: BigUint,
    prime: BigUint,
}

impl TryFrom<FieldElementRepr> for FieldElement {
    type Error = CurveError;

    fn try_from(repr: FieldElementRepr) -> Result<Self, Self::Error> {
        Self::new(repr.num, repr.prime)
    }
}

impl FieldElement {
    /// Create a new element, rejecting values outside `[0, prime)`.
    pub fn new(num: BigUint, prime: BigUint) -> Result<Self, CurveError> {
        if prime <= BigUint::one() || num >= prime {
            return Err(CurveError::OutOfRange { num, prime });
        }
        Ok(Self { num, prime })
    }

    /// Build an element from parts already known to satisfy `num < prime`.
    #[inline]
    pub(crate) fn new_unchecked(num: BigUint, prime: BigUint) -> Self {
        Self { num, prime }
    }

    /// Convenience constructor for small fields.
    pub fn from_u64(num: u64, prime: u64) -> Result<Self, CurveError> {
        Self::new(BigUint::from(num), BigUint::from(prime))
    }

    /// The additive identity of F_prime.
    pub fn zero(prime: &BigUint) -> Self {
        Self {
            num: BigUint::zero(),
            prime: prime.clone(),
        }
    }

    /// The multiplicative identity of F_prime.
    pub fn one(prime: &BigUint) -> Self {
        Self {
            num: BigUint::one(),
            prime: prime.clone(),
        }
    }

    #[inline]
    pub fn num(&self) -> &BigUint {
        &self.num
    }

    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Whether `other` belongs to the same field as `self`.
    #[inline]
    pub fn same_field(&self, other: &Self) -> bool {
        self.prime == other.prime
    }

    fn check_field(&self, other: &Self) -> Result<(), CurveError> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(CurveError::MismatchedField {
                left: self.prime.clone(),
                right: other.prime.clone(),
            })
        }
    }

    /// Element built from a value already reduced into `[0, prime)`.
    #[inline]
    fn reduced(&self, num: BigUint) -> Self {
        Self {
            num,
            prime: self.prime.clone(),
        }
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, CurveError> {
        self.check_field(rhs)?;
        Ok(self.reduced((&self.num + &rhs.num) % &self.prime))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, CurveError> {
        self.check_field(rhs)?;
        Ok(self.reduced((&self.num + &self.prime - &rhs.num) % &self.prime))
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self, CurveError> {
        self.check_field(rhs)?;
        Ok(self.reduced((&self.num * &rhs.num) % &self.prime))
    }

    /// `self / rhs`, i.e. `self * rhs^(p-2)` by Fermat's little theorem.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, CurveError> {
        self.check_field(rhs)?;
        let inv = rhs.inverse()?;
        Ok(self.reduced((&self.num * &inv.num) % &self.prime))
    }

    /// Multiplicative inverse `self^(p-2)`. Requires `prime` to be prime.
    pub fn inverse(&self) -> Result<Self, CurveError> {
        if self.is_zero() {
            return Err(CurveError::DivisionByZero {
                prime: self.prime.clone(),
            });
        }
        let exp = &self.prime - BigUint::from(2u32);
        Ok(self.reduced(self.num.modpow(&exp, &self.prime)))
    }

    /// Raise to a signed power.
    ///
    /// The exponent is first reduced into `[0, p-1)`, the order of the
    /// multiplicative group, so negative exponents are inverses.
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let order = BigInt::from(&self.prime - BigUint::one());
        let mut e = exponent % &order;
        if e.sign() == Sign::Minus {
            e += &order;
        }
        self.reduced(self.num.modpow(e.magnitude(), &self.prime))
    }

    /// Unsigned power helper.
    pub fn pow_u64(&self, exponent: u64) -> Self {
        self.pow(&BigInt::from(exponent))
    }

    /// Multiply by a plain integer coefficient: `(coefficient * num) mod p`.
    pub fn scale(&self, coefficient: &BigUint) -> Self {
        self.reduced((coefficient * &self.num) % &self.prime)
    }

    /// 64-character, zero-padded, big-endian hex rendering of the value.
    pub fn to_hex(&self) -> String {
        format!("{:064x}", self.num)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.reduced((&self.prime - &self.num) % &self.prime)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.num)
    }
}
