// src/crypto/rng.rs
//! Secure randomness for salts and IVs.
//!
//! Encryption pulls from a [`RandomSource`] exactly twice: once for the salt,
//! once for the IV. Decryption never touches it.

use crate::error::EnvelopeError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;

/// A cryptographically secure byte generator.
///
/// [`SecureRng`] is the production source. The trait exists so the pipeline
/// can be driven with a deterministic or failing source in tests.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EnvelopeError>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EnvelopeError> {
        (**self).fill(dest)
    }
}

/// Operating-system CSPRNG (`getrandom` via `OsRng`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRng(OsRng);

impl SecureRng {
    #[inline(always)]
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl RandomSource for SecureRng {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EnvelopeError> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| EnvelopeError::EntropyUnavailable(e.to_string()))
    }
}

/// Draw `N` fresh bytes into a `Fixed` buffer (salt and IV material).
#[inline]
pub fn generate<const N: usize, G>(rng: &mut G) -> Result<Fixed<[u8; N]>, EnvelopeError>
where
    G: RandomSource + ?Sized,
{
    let mut out = Fixed::new([0u8; N]);
    rng.fill(out.expose_secret_mut())?;
    Ok(out)
}
