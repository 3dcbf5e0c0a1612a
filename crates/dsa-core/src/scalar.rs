//! Bounded pseudo-random scalar generation
//!
//! Supplies both the long-term private scalar `x` and the per-signature
//! ephemeral value `k`. All draws come from a single caller-owned RNG handle
//! threaded through the calls, so successive invocations are never
//! correlated by re-seeding.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;

/// Draw a scalar in `[1, m - 1]`.
///
/// Mixes two fractional draws and one integer draw from `rng`:
/// `b1 = floor(2^64 * f1)`, `b2 = floor(2^64 * f2)`, `b3 = 10^i mod m`,
/// then reduces `b1 * b3 + b2` modulo `m - 1`. A zero result maps to one,
/// so the scalar is never zero.
pub fn random_scalar<R: Rng>(rng: &mut R, m: &BigUint) -> BigUint {
    let f1: f64 = rng.gen();
    let f2: f64 = rng.gen();
    let i = rng.gen_range(0..i32::MAX) as u32;

    let b1 = BigUint::from((u64::MAX as f64 * f1) as u128);
    let b2 = BigUint::from((u64::MAX as f64 * f2) as u128);
    let b3 = BigUint::from(10u32).modpow(&BigUint::from(i), m);

    let result = (b1 * b3 + b2) % (m - 1u32);
    if result.is_zero() {
        BigUint::one()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn never_returns_zero() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let q = BigUint::from(101u32);
        for _ in 0..200 {
            let s = random_scalar(&mut rng, &q);
            assert!(!s.is_zero());
            assert!(s < q);
        }
    }

    #[test]
    fn smallest_bound_collapses_to_one() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let m = BigUint::from(2u32);
        for _ in 0..20 {
            assert_eq!(random_scalar(&mut rng, &m), BigUint::one());
        }
    }

    #[test]
    fn stays_below_large_bound() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let m = (BigUint::one() << 160usize) + 7u32;
        for _ in 0..50 {
            let s = random_scalar(&mut rng, &m);
            assert!(!s.is_zero());
            assert!(s < m);
        }
    }
}
