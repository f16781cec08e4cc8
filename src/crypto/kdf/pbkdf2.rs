//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{Aes256Key32, PasswordString, Salt16};
use crate::consts::PBKDF2_ITERATIONS;
use crate::EnvelopeError;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

/// Derive the envelope key: PBKDF2-HMAC-SHA256 over the raw password bytes,
/// [`PBKDF2_ITERATIONS`] rounds, written straight into `out_key`.
///
/// Deterministic: the same password and salt always produce the same key, which
/// is what lets decryption rebuild the encryption key from the stored salt.
///
/// # Errors
///
/// - [`EnvelopeError::EmptyPassword`] if the password has no bytes
/// - [`EnvelopeError::KeyDerivation`] if the primitive itself fails
#[inline(always)]
pub fn derive_key(
    password: &PasswordString,
    salt: &Salt16,
    out_key: &mut Aes256Key32,
) -> Result<(), EnvelopeError> {
    let password = password.as_bytes();
    if password.is_empty() {
        return Err(EnvelopeError::EmptyPassword);
    }

    pbkdf2_sha256(
        password,
        salt.expose_secret(),
        PBKDF2_ITERATIONS,
        out_key.expose_secret_mut(),
    )
}

/// Convenience: derive and return a fresh key buffer.
#[inline]
pub fn derive_key_new(
    password: &PasswordString,
    salt: &Salt16,
) -> Result<Aes256Key32, EnvelopeError> {
    let mut key = Aes256Key32::new([0u8; 32].into());
    derive_key(password, salt, &mut key)?;
    Ok(key)
}

#[inline(always)]
pub(crate) fn pbkdf2_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), EnvelopeError> {
    pbkdf2::<Hmac<Sha256>>(password, salt, iterations, out)
        .map_err(|e| EnvelopeError::KeyDerivation(format!("PBKDF2 failed: {e}")))
}
