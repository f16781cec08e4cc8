//! src/encryptor/encrypt.rs
//! Envelope encryption: salt + IV → PBKDF2 key → header → CBC stream

use crate::aliases::{Aes256Key32, PasswordString};
use crate::crypto::kdf::pbkdf2::derive_key;
use crate::crypto::rng::{RandomSource, SecureRng};
use crate::engine::{CipherContext, Direction};
use crate::error::EnvelopeError;
use crate::header::EnvelopeHeader;
use crate::stream::pump;
use std::io::{Read, Write};
use tracing::debug;

/// Encrypt `input` into a complete envelope on `output`.
///
/// A fresh salt and IV are drawn from the operating system's CSPRNG for every
/// call, so encrypting the same plaintext twice never yields the same bytes.
///
/// # Errors
///
/// - [`EnvelopeError::EmptyPassword`] before anything is read or written
/// - [`EnvelopeError::EntropyUnavailable`] before the header is written
/// - [`EnvelopeError::Io`] from either side of the stream
///
/// # Example
///
/// ```
/// use aesenvelope_rs::aliases::PasswordString;
/// use aesenvelope_rs::{decrypt, encrypt};
/// use std::io::Cursor;
///
/// let password = PasswordString::new("pw".to_string());
///
/// let mut envelope = Vec::new();
/// encrypt(Cursor::new(b"hello world"), &mut envelope, &password)?;
/// assert_eq!(envelope.len(), 32 + 16);
///
/// let mut plaintext = Vec::new();
/// decrypt(Cursor::new(&envelope), &mut plaintext, &password)?;
/// assert_eq!(plaintext, b"hello world");
/// # Ok::<(), aesenvelope_rs::EnvelopeError>(())
/// ```
#[inline(always)]
pub fn encrypt<R, W>(input: R, output: W, password: &PasswordString) -> Result<(), EnvelopeError>
where
    R: Read,
    W: Write,
{
    encrypt_with_rng(input, output, password, &mut SecureRng::new())
}

/// [`encrypt`] with a caller-supplied random source for the salt and IV.
///
/// The source is asked for bytes exactly twice: salt first, then IV.
pub fn encrypt_with_rng<R, W, G>(
    input: R,
    output: W,
    password: &PasswordString,
    rng: &mut G,
) -> Result<(), EnvelopeError>
where
    R: Read,
    W: Write,
    G: RandomSource + ?Sized,
{
    if password.is_empty() {
        return Err(EnvelopeError::EmptyPassword);
    }

    let header = EnvelopeHeader::generate(rng)?;
    encrypt_with_header(input, output, password, &header)
}

/// Encrypt under a caller-fixed salt and IV.
///
/// Deterministic: identical inputs give identical envelopes. Meant for test
/// vectors and reproducible fixtures. Reusing an IV with the same password and
/// salt leaks plaintext relationships, so production code should go through
/// [`encrypt`].
pub fn encrypt_with_header<R, W>(
    input: R,
    mut output: W,
    password: &PasswordString,
    header: &EnvelopeHeader,
) -> Result<(), EnvelopeError>
where
    R: Read,
    W: Write,
{
    let mut key = Aes256Key32::new([0u8; 32].into());
    derive_key(password, &header.salt, &mut key)?;
    let mut context = CipherContext::new(&key, &header.iv, Direction::Encrypt);
    drop(key); // zeroized here, the cipher keeps its own schedule

    header.write_to(&mut output)?;
    debug!("envelope header written");

    pump(input, output, &mut context)?;
    Ok(())
}
