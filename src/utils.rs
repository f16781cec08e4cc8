// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used on both sides of CBC: plaintext ⊕ previous ciphertext before the block
/// transform when encrypting, decrypted block ⊕ previous ciphertext after it
/// when decrypting.
///
/// # Panics
///
/// Panics if any slice is shorter than 16 bytes. Callers pass `Fixed<[u8; 16]>`
/// contents or AES blocks, which are always exactly 16.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
