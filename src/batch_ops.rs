//! src/batch_ops.rs
//! Parallel encryption/decryption of independent envelopes.
//!
//! Each job gets its own salt, IV, key and cipher context; jobs share nothing
//! but the password. The first failing job's error is returned.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::aliases::PasswordString;
use crate::{decrypt, encrypt, EnvelopeError};

pub fn encrypt_batch<R, W>(
    batch: &mut [(R, W)],
    password: &PasswordString,
) -> Result<(), EnvelopeError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encrypt(src, dst, password))
}

pub fn decrypt_batch<R, W>(
    batch: &mut [(R, W)],
    password: &PasswordString,
) -> Result<(), EnvelopeError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, password))
}
