//! Core trait for checksum engines.
//!
//! [`Checksum`] is the narrow capability every engine in this workspace
//! satisfies: feed bytes in, read the finalized value out, reset for reuse.
//! Stream consumption is a free function over the trait rather than part of
//! the engines themselves; the engines only ever see delivered byte buffers.

use crate::error::{ChecksumError, Result};
use std::fmt::Debug;
use std::io::{ErrorKind, Read};

/// Chunk size used when folding a reader into a checksum.
const READ_CHUNK_SIZE: usize = 32768;

/// An incrementally updatable checksum.
///
/// # Implementor requirements
///
/// - `update` over a buffer must equal `update_byte` applied to each byte in
///   order, so splitting input into arbitrary chunks never changes the
///   result.
/// - `value` must not disturb the running state; it may be read at any time.
/// - `reset` must restore the state of a freshly constructed engine with the
///   same parameters.
pub trait Checksum {
    /// The checksum output type (`u16`, `u32` or `u64`).
    type Output: Copy + Eq + Debug;

    /// Fold a single byte into the running register.
    fn update_byte(&mut self, byte: u8);

    /// Fold a buffer into the running register, byte by byte in order.
    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.update_byte(byte);
        }
    }

    /// Fold `count` bytes starting at `offset` into the running register.
    ///
    /// Returns [`ChecksumError::OutOfRange`] when the range falls outside the
    /// buffer; the register is left untouched in that case.
    fn update_range(&mut self, data: &[u8], offset: usize, count: usize) -> Result<()> {
        let chunk = offset
            .checked_add(count)
            .and_then(|end| data.get(offset..end))
            .ok_or_else(|| ChecksumError::out_of_range(offset, count, data.len()))?;
        self.update(chunk);
        Ok(())
    }

    /// Restore the register to its initial state.
    fn reset(&mut self);

    /// The finalized checksum for all bytes folded so far (non-mutating).
    fn value(&self) -> Self::Output;

    /// The finalized checksum serialized in little-endian byte order.
    fn value_bytes(&self) -> Vec<u8>;
}

/// Read `reader` to exhaustion in fixed-size chunks, folding every chunk into
/// `checksum`. Returns the total number of bytes consumed.
///
/// # Example
///
/// ```
/// use oxisum_core::crc::Crc32;
/// use oxisum_core::traits::update_from_reader;
/// use std::io::Cursor;
///
/// let mut crc = Crc32::new();
/// let consumed = update_from_reader(&mut crc, &mut Cursor::new(b"123456789")).unwrap();
/// assert_eq!(consumed, 9);
/// assert_eq!(crc.value(), 0xCBF43926);
/// ```
pub fn update_from_reader<C, R>(checksum: &mut C, reader: &mut R) -> Result<u64>
where
    C: Checksum + ?Sized,
    R: Read + ?Sized,
{
    let mut buffer = vec![0u8; READ_CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                checksum.update(&buffer[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(total)
}
