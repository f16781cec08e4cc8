// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, &password)?` writes a complete envelope.
//! `encrypt_with_rng` and `encrypt_with_header` expose the injection points for
//! custom randomness and deterministic output.

pub(crate) mod encrypt;

pub use encrypt::{encrypt, encrypt_with_header, encrypt_with_rng};
