//! src/engine/context.rs
//! Streaming AES-256-CBC: one key, one IV, one direction per context
//!
//! CBC chaining is done by hand over the raw `aes` block cipher, the same way
//! in both directions. The only state carried between calls is the previous
//! ciphertext block and one partial block of input.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::{BLOCK_SIZE, IV_LEN, KEY_LEN};
use crate::engine::padding::{pad_block, unpadded_len};
use crate::error::EnvelopeError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};

/// Which way a [`CipherContext`] transforms data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Lifecycle of a [`CipherContext`]. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Bound to key and IV, no input seen yet.
    Initialized,
    /// At least one `update` call has been made.
    Updating,
    /// `finalize` has run; the context is spent.
    Finalized,
}

enum BlockCipher {
    Enc(Aes256Enc),
    Dec(Aes256Dec),
}

/// Streaming CBC state machine with PKCS#7 padding.
///
/// Feed input with [`update`](Self::update) in chunks of any size, then call
/// [`finalize`](Self::finalize) exactly once. Output only ever contains whole
/// blocks until `finalize`.
///
/// When decrypting, the most recent full ciphertext block is held back until
/// either more input arrives or `finalize` runs, since it may be the padded
/// final block.
///
/// A context is not shareable: every `update` mutates the partial-block buffer,
/// so all methods take `&mut self`.
pub struct CipherContext {
    cipher: BlockCipher,
    direction: Direction,
    state: State,
    /// Previous ciphertext block, or the IV before the first block.
    chain: Block16,
    partial: Block16,
    partial_len: usize,
}

impl CipherContext {
    /// Bind a context to a typed key and IV.
    pub fn new(key: &Aes256Key32, iv: &Iv16, direction: Direction) -> Self {
        let key = key.expose_secret();
        let cipher = match direction {
            Direction::Encrypt => BlockCipher::Enc(Aes256Enc::new(key.into())),
            Direction::Decrypt => BlockCipher::Dec(Aes256Dec::new(key.into())),
        };

        Self {
            cipher,
            direction,
            state: State::Initialized,
            chain: Block16::new((*iv.expose_secret()).into()),
            partial: Block16::new([0u8; BLOCK_SIZE].into()),
            partial_len: 0,
        }
    }

    /// Bind a context to untyped key and IV bytes.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::InvalidKeyMaterial`] unless the key is 32 bytes and the
    /// IV is 16 bytes.
    pub fn init(key: &[u8], iv: &[u8], direction: Direction) -> Result<Self, EnvelopeError> {
        if key.len() != KEY_LEN {
            return Err(EnvelopeError::InvalidKeyMaterial(format!(
                "key must be {KEY_LEN} bytes, got {}",
                key.len()
            )));
        }
        let iv: [u8; IV_LEN] = iv.try_into().map_err(|_| {
            EnvelopeError::InvalidKeyMaterial(format!(
                "IV must be {IV_LEN} bytes, got {}",
                iv.len()
            ))
        })?;

        let mut owned = Aes256Key32::new([0u8; KEY_LEN].into());
        owned.expose_secret_mut().copy_from_slice(key);
        Ok(Self::new(&owned, &Iv16::new(iv), direction))
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Transform `input` and return the whole blocks that became available.
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
        let mut out = Vec::with_capacity(self.partial_len + input.len());
        self.update_into(input, &mut out)?;
        Ok(out)
    }

    /// Like [`update`](Self::update), but appends to a caller-owned buffer.
    pub fn update_into(
        &mut self,
        mut input: &[u8],
        out: &mut Vec<u8>,
    ) -> Result<(), EnvelopeError> {
        if self.state == State::Finalized {
            return Err(EnvelopeError::InvalidState("update called after finalize"));
        }
        self.state = State::Updating;

        while !input.is_empty() {
            // A held decrypt block is not the last one if more input follows.
            if self.partial_len == BLOCK_SIZE {
                self.process_partial(out);
            }

            let take = (BLOCK_SIZE - self.partial_len).min(input.len());
            self.partial.expose_secret_mut()[self.partial_len..self.partial_len + take]
                .copy_from_slice(&input[..take]);
            self.partial_len += take;
            input = &input[take..];

            if self.partial_len == BLOCK_SIZE && self.direction == Direction::Encrypt {
                self.process_partial(out);
            }
        }

        Ok(())
    }

    /// Finish the stream and return the last output bytes.
    ///
    /// Encrypting always yields exactly one padded block. Decrypting yields the
    /// final block's plaintext with padding stripped (0 to 15 bytes).
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::InvalidState`] if already finalized
    /// - [`EnvelopeError::Padding`] when decrypting input that is empty, not
    ///   block-aligned, or whose last block has malformed padding
    pub fn finalize(&mut self) -> Result<Vec<u8>, EnvelopeError> {
        if self.state == State::Finalized {
            return Err(EnvelopeError::InvalidState("finalize called twice"));
        }
        self.state = State::Finalized;

        let mut out = Vec::with_capacity(BLOCK_SIZE);
        match self.direction {
            Direction::Encrypt => {
                pad_block(&mut self.partial, self.partial_len);
                self.partial_len = BLOCK_SIZE;
                self.process_partial(&mut out);
            }
            Direction::Decrypt => {
                if self.partial_len != BLOCK_SIZE {
                    return Err(EnvelopeError::Padding);
                }
                self.process_partial(&mut out);
                let mut last = Block16::new([0u8; BLOCK_SIZE].into());
                last.expose_secret_mut().copy_from_slice(&out);
                let keep = unpadded_len(&last)?;
                out.truncate(keep);
            }
        }

        Ok(out)
    }

    /// Run the buffered full block through CBC and append the result to `out`.
    #[inline(always)]
    fn process_partial(&mut self, out: &mut Vec<u8>) {
        debug_assert_eq!(self.partial_len, BLOCK_SIZE);
        let mut staged = Block16::new([0u8; BLOCK_SIZE].into());

        match &self.cipher {
            BlockCipher::Enc(cipher) => {
                xor_blocks(
                    self.partial.expose_secret(),
                    self.chain.expose_secret(),
                    staged.expose_secret_mut(),
                );
                let mut aes_block = AesBlock::from(*staged.expose_secret());
                cipher.encrypt_block(&mut aes_block);
                self.chain.expose_secret_mut().copy_from_slice(aes_block.as_slice());
                out.extend_from_slice(aes_block.as_slice());
            }
            BlockCipher::Dec(cipher) => {
                let mut aes_block = AesBlock::from(*self.partial.expose_secret());
                cipher.decrypt_block(&mut aes_block);
                xor_blocks(
                    aes_block.as_slice(),
                    self.chain.expose_secret(),
                    staged.expose_secret_mut(),
                );
                self.chain
                    .expose_secret_mut()
                    .copy_from_slice(self.partial.expose_secret());
                out.extend_from_slice(staged.expose_secret());
            }
        }

        self.partial_len = 0;
    }
}
