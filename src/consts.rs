//! # Constants
//!
//! Sizes and work factors of the envelope format. Every value here is part of
//! the on-disk contract: changing one makes existing envelopes unreadable.

/// AES block size in bytes. Also the PKCS#7 padding modulus.
pub const BLOCK_SIZE: usize = 16;

/// Salt length stored at offset 0 of every envelope.
pub const SALT_LEN: usize = 16;

/// IV length stored at offset 16 of every envelope.
pub const IV_LEN: usize = 16;

/// Derived AES-256 key length.
pub const KEY_LEN: usize = 32;

/// Fixed header size: salt followed by IV.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// Fixed at `10_000`. Envelopes carry no version or parameter field, so this
/// value cannot be raised without breaking decryption of existing files.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Bytes read from the source per pipeline step.
///
/// Independent of [`BLOCK_SIZE`]; the cipher engine buffers partial blocks.
pub const CHUNK_SIZE: usize = 4096;

/// Ciphertext body length for a plaintext of `plaintext_len` bytes.
///
/// PKCS#7 always adds between 1 and 16 bytes, so the body is
/// `16 * (plaintext_len / 16 + 1)`.
///
/// ```
/// use aesenvelope_rs::consts::ciphertext_len;
///
/// assert_eq!(ciphertext_len(0), 16);
/// assert_eq!(ciphertext_len(11), 16);
/// assert_eq!(ciphertext_len(16), 32);
/// ```
#[inline]
pub const fn ciphertext_len(plaintext_len: u64) -> u64 {
    BLOCK_SIZE as u64 * (plaintext_len / BLOCK_SIZE as u64 + 1)
}

/// Full envelope length (header + ciphertext) for a plaintext of `plaintext_len` bytes.
#[inline]
pub const fn envelope_len(plaintext_len: u64) -> u64 {
    HEADER_LEN as u64 + ciphertext_len(plaintext_len)
}
