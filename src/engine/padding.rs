//! src/engine/padding.rs
//! PKCS#7 padding for the final CBC block.

use crate::aliases::Block16;
use crate::consts::BLOCK_SIZE;
use crate::error::EnvelopeError;
use subtle::ConstantTimeEq;

/// Pad the first `filled` bytes of `block` up to a full block.
///
/// `filled` must be `0..16`; a block-aligned plaintext therefore always gets a
/// whole extra block of `0x10` bytes.
#[inline(always)]
pub fn pad_block(block: &mut Block16, filled: usize) {
    debug_assert!(filled < BLOCK_SIZE);
    let pad = (BLOCK_SIZE - filled) as u8;
    block.expose_secret_mut()[filled..].fill(pad);
}

/// Validate the padding of a decrypted final block and return the number of
/// plaintext bytes it carries (`0..=15`).
///
/// The pad-length byte is range checked first; the padding run itself is
/// compared in constant time.
#[inline(always)]
pub fn unpadded_len(block: &Block16) -> Result<usize, EnvelopeError> {
    let block = block.expose_secret();
    let pad = block[BLOCK_SIZE - 1];

    if pad == 0 || pad as usize > BLOCK_SIZE {
        return Err(EnvelopeError::Padding);
    }

    let start = BLOCK_SIZE - pad as usize;
    let expected = [pad; BLOCK_SIZE];
    if !bool::from(block[start..].ct_eq(&expected[start..])) {
        return Err(EnvelopeError::Padding);
    }

    Ok(start)
}
