//! tests/common.rs
//! Shared constants and helpers for the integration tests

#![allow(dead_code)] // each test binary uses a different subset

use aesenvelope_rs::aliases::PasswordString;
use aesenvelope_rs::{decrypt, encrypt, EnvelopeError, RandomSource};
use std::io::Cursor;

pub const TEST_PASSWORD: &str = "pw";
pub const WRONG_PASSWORD: &str = "wrong";

/// Lengths around every block boundary that matters for padding.
pub const EDGE_LENGTHS: &[usize] = &[0, 1, 11, 15, 16, 17, 31, 32, 33, 4095, 4096, 4097];

pub fn password(s: &str) -> PasswordString {
    PasswordString::new(s.to_string())
}

pub fn seal(plaintext: &[u8], pw: &str) -> Vec<u8> {
    let mut out = Vec::new();
    encrypt(Cursor::new(plaintext), &mut out, &password(pw)).expect("encryption failed");
    out
}

pub fn open(envelope: &[u8], pw: &str) -> Result<Vec<u8>, EnvelopeError> {
    let mut out = Vec::new();
    decrypt(Cursor::new(envelope), &mut out, &password(pw))?;
    Ok(out)
}

pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

/// Counts calls and fills with a running byte counter.
#[derive(Default)]
pub struct CountingRng {
    pub calls: usize,
    next: u8,
}

impl RandomSource for CountingRng {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EnvelopeError> {
        self.calls += 1;
        for byte in dest {
            *byte = self.next;
            self.next = self.next.wrapping_add(1);
        }
        Ok(())
    }
}

pub struct BrokenRng;

impl RandomSource for BrokenRng {
    fn fill(&mut self, _dest: &mut [u8]) -> Result<(), EnvelopeError> {
        Err(EnvelopeError::EntropyUnavailable("getrandom failed".into()))
    }
}
