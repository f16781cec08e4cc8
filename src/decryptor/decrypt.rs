//! src/decryptor/decrypt.rs
//! Envelope decryption: header → PBKDF2 key → CBC stream → padding check

use crate::aliases::{Aes256Key32, PasswordString};
use crate::crypto::kdf::pbkdf2::derive_key;
use crate::engine::{CipherContext, Direction};
use crate::error::EnvelopeError;
use crate::header::EnvelopeHeader;
use crate::stream::pump;
use std::io::{Read, Write};
use tracing::debug;

/// Decrypt an envelope from `input`, writing the plaintext to `output`.
///
/// Plaintext is written as it is recovered, so on failure `output` may already
/// hold everything except the final block.
///
/// # Errors
///
/// - [`EnvelopeError::TruncatedEnvelope`] if `input` is shorter than the 32-byte
///   header; checked before the password is looked at or a key is derived
/// - [`EnvelopeError::EmptyPassword`]
/// - [`EnvelopeError::Padding`] for a wrong password or corrupted ciphertext;
///   the format has no tag to tell the two apart
/// - [`EnvelopeError::Io`] from either side of the stream
#[inline(always)]
pub fn decrypt<R, W>(
    mut input: R,
    output: W,
    password: &PasswordString,
) -> Result<(), EnvelopeError>
where
    R: Read,
    W: Write,
{
    let header = EnvelopeHeader::read_from(&mut input)?;
    debug!("envelope header read");

    let mut key = Aes256Key32::new([0u8; 32].into());
    derive_key(password, &header.salt, &mut key)?;
    let mut context = CipherContext::new(&key, &header.iv, Direction::Decrypt);
    drop(key);

    match pump(input, output, &mut context) {
        Ok(_) => Ok(()),
        Err(EnvelopeError::Padding) => {
            debug!("final block padding invalid");
            Err(EnvelopeError::Padding)
        }
        Err(e) => Err(e),
    }
}
