//! # DSA Core
//!
//! Core primitives for the Digital Signature Algorithm over the prime-order
//! subgroup of the multiplicative group modulo `p`.
//!
//! This crate provides the fundamental building blocks for:
//! - Domain parameter setup (deriving a subgroup generator from `q` and `p`)
//! - Key pair generation
//! - Message signing and signature verification
//!
//! ## Protocol Overview
//!
//! The caller supplies a prime subgroup order `q` and a prime modulus `p`
//! with `q | p - 1`; primality itself is trusted, not checked. Setup derives
//! a generator `g` of the order-`q` subgroup and a key pair
//! `(x, y = g^x mod p)`. Signing produces a pair `(r, s)` over a bounded
//! message digest; verification recomputes a check value `v` and accepts iff
//! `v == r`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dsa_core::{sign, DomainParameters, KeyPair};
//!
//! let params = DomainParameters::new(q, p)?;
//! let key = KeyPair::generate(&params, &mut rng);
//!
//! let signature = sign::sign(&params, &key, "message", &mut rng)?;
//! let outcome = sign::verify(&params, &key.y, "message", &signature);
//! assert!(outcome.accepted);
//! ```

pub mod digest;
pub mod error;
pub mod keygen;
pub mod scalar;
pub mod sign;
pub mod types;

pub use error::{Error, Result};
pub use types::{DomainParameters, KeyPair, Signature, Verification};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Candidate cap for the subgroup generator search
pub const MAX_GENERATOR_CANDIDATES: usize = 1 << 16;

/// Attempt cap for the signing retry loop
pub const MAX_SIGNING_ATTEMPTS: usize = 1 << 10;
