//! Key generation module
//!
//! Derives the domain parameters (the subgroup generator `g` from `q` and
//! `p`) and the long-term key pair (`x`, `y = g^x mod p`).

mod keypair;
mod params;
