// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &password)?` reads an envelope and writes
//! the recovered plaintext.

pub(crate) mod decrypt;

pub use decrypt::decrypt;
