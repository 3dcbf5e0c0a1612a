//! Signature generation

use num_traits::Zero;
use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::digest::message_digest;
use crate::error::{Error, Result};
use crate::scalar::random_scalar;
use crate::types::{DomainParameters, KeyPair, Signature};
use crate::MAX_SIGNING_ATTEMPTS;

/// Sign a message under the given key pair.
///
/// Each attempt draws a fresh ephemeral scalar `k` and computes
/// `r = (g^k mod p) mod q` and `s = k^-1 * (H + x*r) mod q`, where the
/// inverse of `k` is `k^(q-2) mod q` per Fermat's little theorem (valid
/// because `q` is prime). Attempts yielding a zero `r` or `s` are discarded
/// and retried with a new `k`; the loop is capped, and exhausting the cap
/// surfaces as an error.
///
/// # Arguments
/// * `params` - Domain parameters
/// * `key` - Key pair holding the private scalar
/// * `text` - Message text to sign
/// * `rng` - Entropy source for the ephemeral scalars
///
/// # Returns
/// The signature pair `(r, s)`, both in `[1, q - 1]`
#[instrument(skip(params, key, rng))]
pub fn sign<R: Rng>(
    params: &DomainParameters,
    key: &KeyPair,
    text: &str,
    rng: &mut R,
) -> Result<Signature> {
    let q = &params.q;
    let hash = message_digest(text, q);
    let inverse_exponent = q - 2u32;

    for attempt in 0..MAX_SIGNING_ATTEMPTS {
        let k = random_scalar(rng, q);
        let r = params.g.modpow(&k, &params.p) % q;
        if r.is_zero() {
            trace!(attempt, "ephemeral r is zero, retrying");
            continue;
        }

        let k_inv = k.modpow(&inverse_exponent, q);
        let s = (k_inv * ((&hash + &key.x * &r) % q)) % q;
        if s.is_zero() {
            trace!(attempt, "signature scalar s is zero, retrying");
            continue;
        }

        debug!(%r, %s, "Signature generated");
        return Ok(Signature { r, s });
    }

    Err(Error::SigningExhausted(MAX_SIGNING_ATTEMPTS))
}
