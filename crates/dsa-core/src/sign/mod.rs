//! Signing and verification module
//!
//! Produces `(r, s)` signature pairs over a bounded message digest and
//! recomputes the check value `v` on the verifying side.

mod signer;
mod verifier;

pub use signer::sign;
pub use verifier::{verify, verify_lines};
