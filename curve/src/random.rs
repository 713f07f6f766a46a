use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

/// Sample a uniform integer in `[1, bound)` by rejection.
///
/// Draws `ceil(bits(bound) / 8)` bytes per attempt and masks the top byte so
/// that each attempt succeeds with probability above one half.
pub fn random_nonzero_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> Option<BigUint> {
    if bound <= &BigUint::from(1u32) {
        return None;
    }

    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64) * 8 - bits;
    let mut bytes = vec![0u8; len];

    loop {
        rng.fill(&mut bytes[..]);
        bytes[0] &= 0xff >> excess;
        let candidate = BigUint::from_bytes_be(&bytes);
        if !candidate.is_zero() && &candidate < bound {
            return Some(candidate);
        }
    }
}
