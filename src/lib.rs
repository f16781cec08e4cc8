// src/lib.rs

//! Password-based AES-256-CBC envelopes.
//!
//! An envelope is `salt (16) ‖ IV (16) ‖ ciphertext`. The key is
//! PBKDF2-HMAC-SHA256(password, salt, 10 000 rounds); the ciphertext is
//! AES-256-CBC with PKCS#7 padding. There is no authentication tag: a wrong
//! password is detected only by the final block's padding, which also accepts
//! a wrong password roughly once in 256 tries.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod engine;
pub mod error;
pub mod header;
pub mod stream;
pub mod utils;

// High-level API
pub use decryptor::decrypt;
pub use encryptor::{encrypt, encrypt_with_header, encrypt_with_rng};
pub use error::EnvelopeError;

// Building blocks for custom flows
pub use crypto::kdf::pbkdf2::{derive_key, derive_key_new};
pub use crypto::rng::{RandomSource, SecureRng};
pub use engine::{CipherContext, Direction};
pub use header::EnvelopeHeader;
pub use stream::{pump, StreamStats};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
