//! Domain parameter setup

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::DomainParameters;
use crate::MAX_GENERATOR_CANDIDATES;

impl DomainParameters {
    /// Build domain parameters from the subgroup order `q` and modulus `p`.
    ///
    /// Computes the cofactor `t = (p - 1) / q` and derives a generator of
    /// the order-`q` subgroup by searching upward from `h = 2` for the
    /// first `h^t mod p` that is at least 2.
    ///
    /// Primality of `q` and `p` is a caller-supplied precondition and is
    /// not checked; exact division of `p - 1` by `q` is.
    ///
    /// # Arguments
    /// * `q` - Prime order of the subgroup
    /// * `p` - Prime modulus, with `q | p - 1`
    ///
    /// # Returns
    /// The parameters with the derived generator
    #[instrument]
    pub fn new(q: BigUint, p: BigUint) -> Result<Self> {
        if q < BigUint::from(2u32) {
            return Err(Error::InvalidParameters(format!(
                "q must be at least 2, got {}",
                q
            )));
        }

        let p_minus_one = &p - 1u32;
        if !(&p_minus_one % &q).is_zero() {
            return Err(Error::InvalidParameters(format!(
                "q does not divide p - 1 (q = {}, p = {})",
                q, p
            )));
        }

        let t = &p_minus_one / &q;
        let g = derive_generator(&p, &t)?;

        debug!(%t, %g, "Domain parameters ready");

        Ok(Self { q, p, t, g })
    }
}

/// Search for the smallest `h >= 2` whose power `h^t mod p` is at least 2.
///
/// The retry condition is exactly `g < 2`; no further check is made on the
/// order of the resulting `g`.
fn derive_generator(p: &BigUint, t: &BigUint) -> Result<BigUint> {
    let two = BigUint::from(2u32);
    let mut h = two.clone();
    for _ in 0..MAX_GENERATOR_CANDIDATES {
        let g = h.modpow(t, p);
        if g >= two {
            return Ok(g);
        }
        h += 1u32;
    }
    Err(Error::GeneratorSearchExhausted(MAX_GENERATOR_CANDIDATES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn textbook_parameters() {
        let params =
            DomainParameters::new(BigUint::from(101u32), BigUint::from(809u32)).unwrap();
        assert_eq!(params.t, BigUint::from(8u32));
        // h = 2 already qualifies: 2^8 mod 809 = 256
        assert_eq!(params.g, BigUint::from(256u32));
    }

    #[test]
    fn tiny_parameters() {
        let params = DomainParameters::new(BigUint::from(11u32), BigUint::from(23u32)).unwrap();
        assert_eq!(params.t, BigUint::from(2u32));
        assert_eq!(params.g, BigUint::from(4u32));
    }

    #[test]
    fn generator_lies_in_the_subgroup() {
        let params =
            DomainParameters::new(BigUint::from(101u32), BigUint::from(809u32)).unwrap();
        assert_eq!(params.g.modpow(&params.q, &params.p), BigUint::one());
    }

    #[test]
    fn rejects_non_divisor() {
        let err =
            DomainParameters::new(BigUint::from(7u32), BigUint::from(11u32)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn rejects_degenerate_order() {
        let err = DomainParameters::new(BigUint::from(1u32), BigUint::from(23u32)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }
}
