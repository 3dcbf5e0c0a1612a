//! Key pair generation

use rand::Rng;
use tracing::{info, instrument};

use crate::scalar::random_scalar;
use crate::types::{DomainParameters, KeyPair};

impl KeyPair {
    /// Generate a key pair under the given domain parameters.
    ///
    /// Draws the private scalar `x` in `[1, q - 1]` and derives the public
    /// value `y = g^x mod p`. The private scalar is never logged.
    #[instrument(skip(params, rng))]
    pub fn generate<R: Rng>(params: &DomainParameters, rng: &mut R) -> Self {
        let x = random_scalar(rng, &params.q);
        let y = params.g.modpow(&x, &params.p);

        info!(%y, "Key pair generated");

        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::Zero;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn textbook_params() -> DomainParameters {
        DomainParameters::new(BigUint::from(101u32), BigUint::from(809u32)).unwrap()
    }

    #[test]
    fn public_value_matches_private_scalar() {
        let params = textbook_params();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let key = KeyPair::generate(&params, &mut rng);
        assert_eq!(key.y, params.g.modpow(&key.x, &params.p));
    }

    #[test]
    fn private_scalar_is_bounded() {
        let params = textbook_params();
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        for _ in 0..20 {
            let key = KeyPair::generate(&params, &mut rng);
            assert!(!key.x.is_zero());
            assert!(key.x < params.q);
        }
    }
}
