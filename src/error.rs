//! # Error Types
//!
//! All operations return [`Result<T, EnvelopeError>`](EnvelopeError). Nothing in
//! the library aborts the process; the binary alone turns an error into an exit
//! status.

use thiserror::Error;

/// The error type for all envelope operations.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Reading the source or writing the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operating system's secure random generator could not supply bytes.
    ///
    /// Raised before any header byte is written.
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    /// The PBKDF2 primitive reported an internal failure.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// A zero-length password was supplied.
    #[error("empty password")]
    EmptyPassword,

    /// Key or IV of the wrong length was handed to the cipher engine.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// The cipher engine was used after it had been finalized.
    #[error("invalid cipher state: {0}")]
    InvalidState(&'static str),

    /// The input ended before the 32-byte salt + IV header was complete.
    #[error("malformed envelope: expected at least 32 header bytes, found {len}")]
    TruncatedEnvelope {
        /// Number of bytes that were available.
        len: usize,
    },

    /// The final block did not carry valid PKCS#7 padding.
    ///
    /// Envelopes carry no authentication tag, so a wrong password and corrupted
    /// ciphertext are indistinguishable. A wrong password is also accepted with
    /// probability of roughly 1/256, in which case garbage plaintext is produced.
    #[error("wrong password or corrupted data")]
    Padding,
}

impl EnvelopeError {
    /// `true` for failures caused by the input file rather than the environment.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            EnvelopeError::TruncatedEnvelope { .. } | EnvelopeError::Padding
        )
    }
}
