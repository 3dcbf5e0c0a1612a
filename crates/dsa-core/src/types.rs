//! Core value types for DSA operations

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Line separator used by the signature text encoding
pub const SIGNATURE_LINE_SEPARATOR: &str = "\r\n";

/// Width of the label prefix ("r = " / "s = ") ahead of the numeric value
const LABEL_WIDTH: usize = 4;

/// Shared domain parameters defining the group DSA operates in
///
/// `q` is the prime order of the subgroup, `p` the prime modulus,
/// `t = (p - 1) / q` the cofactor, and `g` the derived subgroup generator.
/// Immutable once constructed; see [`DomainParameters::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParameters {
    /// Prime order of the subgroup
    pub q: BigUint,

    /// Prime modulus
    pub p: BigUint,

    /// Cofactor `(p - 1) / q`
    pub t: BigUint,

    /// Generator of the order-`q` subgroup
    pub g: BigUint,
}

/// Long-term key pair
///
/// The private scalar `x` lies in `[1, q - 1]`; the public value is
/// `y = g^x mod p`. Generated once, immutable thereafter.
#[derive(Clone, Serialize, Deserialize)]
pub struct KeyPair {
    /// Private scalar (secret)
    pub x: BigUint,

    /// Public value `g^x mod p`
    pub y: BigUint,
}

/// DSA signature pair `(r, s)`, both in `[1, q - 1]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// R component
    pub r: BigUint,

    /// S component
    pub s: BigUint,
}

impl Signature {
    /// Create a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Parse a signature from its two-line text form.
    ///
    /// Each line carries a 4-character label prefix (`"r = "` / `"s = "`)
    /// ahead of the decimal value. The parse is positional: the prefix is
    /// stripped by width, not matched against the label.
    pub fn from_lines(lines: &[&str]) -> Result<Self> {
        if lines.len() < 2 {
            return Err(Error::MalformedSignature(format!(
                "expected 2 signature lines, got {}",
                lines.len()
            )));
        }
        let r = parse_signature_line(lines[0])?;
        let s = parse_signature_line(lines[1])?;
        Ok(Self { r, s })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r = {}{}s = {}", self.r, SIGNATURE_LINE_SEPARATOR, self.s)
    }
}

/// Strip the positional label prefix and parse the decimal remainder
fn parse_signature_line(line: &str) -> Result<BigUint> {
    let value = line
        .get(LABEL_WIDTH..)
        .ok_or_else(|| Error::MalformedSignature(line.to_string()))?;
    value
        .trim()
        .parse::<BigUint>()
        .map_err(|_| Error::MalformedSignature(line.to_string()))
}

/// Outcome of a verification pass
///
/// Carries the recomputed check value `v` alongside the acceptance result,
/// so callers observe both without any mutable state on the verifier side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// The recomputed check value
    pub v: BigUint,

    /// Whether `v` matched the signature's `r` component
    pub accepted: bool,
}

impl Verification {
    /// Whether the signature was accepted
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v = {}", self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_text_round_trip() {
        let sig = Signature::new(BigUint::from(36u32), BigUint::from(87u32));
        let text = sig.to_string();
        assert_eq!(text, "r = 36\r\ns = 87");

        let lines: Vec<&str> = text.split(SIGNATURE_LINE_SEPARATOR).collect();
        assert_eq!(Signature::from_lines(&lines).unwrap(), sig);
    }

    #[test]
    fn parse_is_positional_not_label_aware() {
        // any 4-character prefix is stripped, whatever it says
        let sig = Signature::from_lines(&["X = 12", "Y = 34"]).unwrap();
        assert_eq!(sig.r, BigUint::from(12u32));
        assert_eq!(sig.s, BigUint::from(34u32));
    }

    #[test]
    fn short_or_garbage_lines_fail() {
        for lines in [
            &["r =", "s = 5"][..],
            &["r = 5"][..],
            &["r = five", "s = 5"][..],
            &["r = 5", "s = "][..],
        ] {
            assert!(matches!(
                Signature::from_lines(lines),
                Err(Error::MalformedSignature(_))
            ));
        }
    }

    #[test]
    fn verification_renders_check_value() {
        let outcome = Verification {
            v: BigUint::from(42u32),
            accepted: true,
        };
        assert_eq!(outcome.to_string(), "v = 42");
        assert!(outcome.is_accepted());
    }
}
