//! # Key Derivation
//!
//! Maps a password and a per-envelope salt to the AES-256 key.
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256, 10 000 iterations, 32-byte output
//!
//! The high-level [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt)
//! call this automatically. It is public for callers that drive the
//! [`CipherContext`](crate::engine::CipherContext) themselves.

pub mod pbkdf2;
