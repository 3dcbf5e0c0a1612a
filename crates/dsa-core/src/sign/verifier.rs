//! Signature verification

use num_bigint::BigUint;
use tracing::{debug, instrument};

use crate::digest::message_digest;
use crate::error::Result;
use crate::types::{DomainParameters, Signature, Verification};

/// Verify a claimed signature over a message.
///
/// Recomputes the check value
/// `v = ((g^u1 mod p) * (y^u2 mod p) mod p) mod q` with
/// `w = s^(q-2) mod q`, `u1 = H*w mod q`, `u2 = r*w mod q`, and accepts iff
/// `v == r`. A single deterministic pass over the inputs; a mismatch is a
/// rejection, not an error. Only the domain parameters and the public value
/// `y` are required.
///
/// # Arguments
/// * `params` - Domain parameters
/// * `y` - The signer's public value
/// * `text` - Message text to check
/// * `signature` - The claimed `(r, s)` pair
#[instrument(skip(params, y))]
pub fn verify(
    params: &DomainParameters,
    y: &BigUint,
    text: &str,
    signature: &Signature,
) -> Verification {
    let q = &params.q;
    let hash = message_digest(text, q);

    let w = signature.s.modpow(&(q - 2u32), q);
    let u1 = (&hash * &w) % q;
    let u2 = (&signature.r * &w) % q;
    let v = compute_check_value(params, y, &u1, &u2);

    let accepted = v == signature.r;
    debug!(%v, r = %signature.r, accepted, "Verification complete");

    Verification { v, accepted }
}

/// Verify a signature supplied in its two-line text form.
///
/// Parsing failure surfaces as a format error rather than a rejection.
pub fn verify_lines(
    params: &DomainParameters,
    y: &BigUint,
    text: &str,
    lines: &[&str],
) -> Result<Verification> {
    let signature = Signature::from_lines(lines)?;
    Ok(verify(params, y, text, &signature))
}

/// Combine the two subgroup exponentiations into the check value
fn compute_check_value(
    params: &DomainParameters,
    y: &BigUint,
    u1: &BigUint,
    u2: &BigUint,
) -> BigUint {
    let v1 = params.g.modpow(u1, &params.p);
    let v2 = y.modpow(u2, &params.p);
    ((v1 * v2) % &params.p) % &params.q
}
