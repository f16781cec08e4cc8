//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret-bearing buffers, built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Access always goes through `.expose_secret()` / `.expose_secret_mut()`.
//!
//! `Fixed` on its own is `Copy` and never wipes itself, so it only carries
//! values that end up in the envelope in the clear (salt, IV). Keys, plaintext
//! staging blocks and passwords sit inside `Zeroizing` and are wiped on drop.
//! Build a [`SecretBuffer`] with `SecretBuffer::new(bytes.into())`.

use secure_gate::{Fixed, Zeroizing};

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: public fixed-size values
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = Fixed<[u8; N]>;

// ─────────────────────────────────────────────────────────────────────────────
// SecretBuffer: fixed-size values wiped on drop
// ─────────────────────────────────────────────────────────────────────────────
pub type SecretBuffer<const N: usize> = Zeroizing<Fixed<[u8; N]>>;

pub type Block16 = SecretBuffer<16>; // one AES block, may hold plaintext

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = Zeroizing<String>; // wiped including spare capacity

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size values, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
pub type Aes256Key32 = SecretBuffer<32>; // PBKDF2 output, AES-256 key
pub type Iv16 = SpanBuffer<16>; // CBC initialization vector
pub type Salt16 = SpanBuffer<16>; // PBKDF2 salt
