//! # Envelope Header
//!
//! Every envelope starts with a fixed 32-byte header followed directly by the
//! CBC ciphertext:
//!
//! | offset | length | field      |
//! |--------|--------|------------|
//! | 0      | 16     | salt       |
//! | 16     | 16     | IV         |
//! | 32     | N      | ciphertext |
//!
//! There is no magic, version, length prefix or authentication tag. Everything
//! after the header is ciphertext, up to the end of the input.

use crate::aliases::{Iv16, Salt16};
use crate::consts::{HEADER_LEN, IV_LEN, SALT_LEN};
use crate::crypto::rng::{generate, RandomSource};
use crate::error::EnvelopeError;
use std::io::{ErrorKind, Read, Write};

/// Salt and IV of one envelope.
pub struct EnvelopeHeader {
    pub salt: Salt16,
    pub iv: Iv16,
}

impl EnvelopeHeader {
    /// Build a header from known values (deterministic encryption, tests).
    pub fn new(salt: [u8; SALT_LEN], iv: [u8; IV_LEN]) -> Self {
        Self {
            salt: Salt16::new(salt),
            iv: Iv16::new(iv),
        }
    }

    /// Draw a fresh salt, then a fresh IV, from `rng`.
    pub fn generate<G>(rng: &mut G) -> Result<Self, EnvelopeError>
    where
        G: RandomSource + ?Sized,
    {
        let salt = generate::<SALT_LEN, _>(rng)?;
        let iv = generate::<IV_LEN, _>(rng)?;
        Ok(Self { salt, iv })
    }

    /// Serialize as `salt ‖ iv`.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..SALT_LEN].copy_from_slice(self.salt.expose_secret());
        out[SALT_LEN..].copy_from_slice(self.iv.expose_secret());
        out
    }

    /// Parse the header at the start of `bytes`. Extra bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        if bytes.len() < HEADER_LEN {
            return Err(EnvelopeError::TruncatedEnvelope { len: bytes.len() });
        }

        let mut salt = [0u8; SALT_LEN];
        let mut iv = [0u8; IV_LEN];
        salt.copy_from_slice(&bytes[..SALT_LEN]);
        iv.copy_from_slice(&bytes[SALT_LEN..HEADER_LEN]);
        Ok(Self::new(salt, iv))
    }

    #[inline]
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), EnvelopeError> {
        writer.write_all(&self.to_bytes()).map_err(EnvelopeError::Io)
    }

    /// Read exactly [`HEADER_LEN`] bytes from `reader`.
    ///
    /// Short reads are retried; the reader is left positioned at the first
    /// ciphertext byte.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::TruncatedEnvelope`] if the input ends early
    /// - [`EnvelopeError::Io`] on any other read failure
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self, EnvelopeError> {
        let mut buf = [0u8; HEADER_LEN];
        let len = read_full(reader, &mut buf)?;
        Self::from_bytes(&buf[..len])
    }
}

/// Fill as much of `buf` as the reader can supply; returns bytes read.
fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize, EnvelopeError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(EnvelopeError::Io(e)),
        }
    }
    Ok(filled)
}
