//! src/stream.rs
//! Chunked pipeline: source → cipher context → sink
//!
//! Shared by both directions. Memory use is bounded by [`CHUNK_SIZE`] no matter
//! how large the input is.

use crate::consts::CHUNK_SIZE;
use crate::engine::CipherContext;
use crate::error::EnvelopeError;
use secure_gate::Zeroizing;
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, trace};

/// Byte counts of one pipeline run (header excluded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
}

/// Stream the whole of `source` through `context` into `sink`.
///
/// Each chunk's output is written before the next chunk is read, `finalize` is
/// called exactly once after the source reports end-of-data, and its tail is
/// written last. The sink is flushed before returning.
///
/// On error nothing is rolled back: whatever was already written stays in the
/// sink.
pub fn pump<R, W>(
    mut source: R,
    mut sink: W,
    context: &mut CipherContext,
) -> Result<StreamStats, EnvelopeError>
where
    R: Read,
    W: Write,
{
    // one side of every chunk is plaintext
    let mut chunk = Zeroizing::new(vec![0u8; CHUNK_SIZE]);
    let mut output = Zeroizing::new(Vec::with_capacity(CHUNK_SIZE + 16));
    let mut stats = StreamStats::default();

    loop {
        let n = match source.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(EnvelopeError::Io(e)),
        };
        stats.bytes_read += n as u64;

        output.clear();
        context.update_into(&chunk[..n], &mut output)?;
        sink.write_all(&output)?;
        stats.bytes_written += output.len() as u64;
        trace!(read = n, written = output.len(), "chunk");
    }

    let tail = context.finalize()?;
    sink.write_all(&tail)?;
    sink.flush()?;
    stats.bytes_written += tail.len() as u64;

    debug!(
        direction = ?context.direction(),
        bytes_read = stats.bytes_read,
        bytes_written = stats.bytes_written,
        "stream finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;

    /// Hands out at most `step` bytes per read and reports `Interrupted` every
    /// other call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(ErrorKind::Interrupted.into());
            }
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn ctx(direction: Direction) -> CipherContext {
        CipherContext::init(&[7u8; 32], &[9u8; 16], direction).unwrap()
    }

    #[test]
    fn read_granularity_does_not_change_output() {
        let plaintext: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();

        let mut reference = Vec::new();
        pump(&plaintext[..], &mut reference, &mut ctx(Direction::Encrypt)).unwrap();

        for step in [1usize, 7, 16, 17, 4096] {
            let mut out = Vec::new();
            let source = Trickle {
                data: &plaintext,
                step,
                interrupt: false,
            };
            let stats = pump(source, &mut out, &mut ctx(Direction::Encrypt)).unwrap();
            assert_eq!(out, reference, "step {step}");
            assert_eq!(stats.bytes_read, 10_000);
            assert_eq!(stats.bytes_written, 10_016);
        }

        let mut back = Vec::new();
        let source = Trickle {
            data: &reference,
            step: 5,
            interrupt: false,
        };
        pump(source, &mut back, &mut ctx(Direction::Decrypt)).unwrap();
        assert_eq!(back, plaintext);
    }

    #[test]
    fn sink_failure_aborts() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = pump(&[0u8; 64][..], Full, &mut ctx(Direction::Encrypt)).unwrap_err();
        assert!(matches!(err, EnvelopeError::Io(_)));
    }
}
