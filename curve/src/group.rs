//! Scalar multiplication by binary expansion.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{CurveError, Point};

impl Point {
    /// Compute `coefficient * self` with right-to-left double-and-add.
    ///
    /// Runs exactly `coefficient.bits()` iterations; a zero coefficient
    /// yields the identity of this point's curve.
    pub fn scalar_mul(&self, coefficient: &BigUint) -> Result<Self, CurveError> {
        let mut result = self.identity();
        let mut current = self.clone();
        let mut coef = coefficient.clone();

        while !coef.is_zero() {
            if coef.bit(0) {
                result = result.try_add(&current)?;
            }
            current = current.try_add(&current)?;
            coef >>= 1u32;
        }

        Ok(result)
    }

    pub fn mul_u64(&self, n: u64) -> Result<Self, CurveError> {
        self.scalar_mul(&BigUint::from(n))
    }

    /// Smallest `n > 0` with `n * self == identity`, found by repeated
    /// addition. Returns `None` if no such `n <= limit` exists.
    pub fn order(&self, limit: u64) -> Result<Option<u64>, CurveError> {
        let identity = self.identity();
        let mut current = self.clone();

        for n in 1..=limit {
            if current == identity {
                return Ok(Some(n));
            }
            current = current.try_add(self)?;
        }

        Ok(None)
    }
}
