// src/crypto/mod.rs

//! Low-level crypto primitives: secure randomness and password key derivation.

pub mod kdf;
pub mod rng;
