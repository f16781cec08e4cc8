// src/engine/mod.rs

//! Cipher engine: AES-256-CBC as an `update`/`finalize` state machine.
//!
//! [`CipherContext`] accepts input in chunks of any length and buffers the
//! partial block between calls, so callers never have to align reads to the
//! 16-byte block size.

pub(crate) mod context;
pub(crate) mod padding;

pub use context::{CipherContext, Direction, State};
pub use padding::{pad_block, unpadded_len};
