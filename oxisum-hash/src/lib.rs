//! # OxiSum Hash
//!
//! Named-algorithm checksum dispatch for OxiSum.
//!
//! This crate is a thin convenience layer over the engines in
//! [`oxisum_core`]: pick an algorithm by name, feed it a buffer, a string or
//! a reader, and get the finalized checksum back as little-endian bytes.
//! Every call constructs a fresh engine; no state survives between calls.
//!
//! ## Example
//!
//! ```rust
//! use oxisum_hash::{HashType, hash_bytes, hash_str};
//!
//! let crc = hash_bytes(HashType::Crc32, b"123456789");
//! assert_eq!(crc, 0xCBF43926u32.to_le_bytes());
//!
//! // Algorithms can be selected by catalog name
//! let ty: HashType = "CRC-64".parse().unwrap();
//! assert_eq!(ty, HashType::Crc64);
//! assert_eq!(hash_str(ty, "123456789").len(), 8);
//! ```
//!
//! Cryptographic digests (MD5, SHA family) are deliberately not part of this
//! dispatch; unknown names surface
//! [`ChecksumError::UnsupportedAlgorithm`](oxisum_core::ChecksumError).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

use oxisum_core::crc::{Crc16, Crc32, Crc64};
use oxisum_core::error::{ChecksumError, Result};
use oxisum_core::traits::{Checksum, update_from_reader};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Known checksum algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashType {
    /// CRC-16/ARC (16-bit output).
    Crc16,
    /// Standard CRC-32 (32-bit output).
    Crc32,
    /// CRC-64/XZ (64-bit output).
    Crc64,
}

impl HashType {
    /// Size of the produced checksum in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            Self::Crc16 => 2,
            Self::Crc32 => 4,
            Self::Crc64 => 8,
        }
    }

    /// Canonical catalog name of the default parameter set.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc16 => "CRC-16/ARC",
            Self::Crc32 => "CRC-32",
            Self::Crc64 => "CRC-64/XZ",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashType {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CRC16" | "CRC-16" | "CRC-16/ARC" => Ok(Self::Crc16),
            "CRC32" | "CRC-32" => Ok(Self::Crc32),
            "CRC64" | "CRC-64" | "CRC-64/XZ" => Ok(Self::Crc64),
            _ => Err(ChecksumError::unsupported_algorithm(s)),
        }
    }
}

fn finish_bytes<C: Checksum>(mut engine: C, data: &[u8]) -> Vec<u8> {
    engine.update(data);
    engine.value_bytes()
}

fn finish_reader<C: Checksum, R: Read + ?Sized>(mut engine: C, reader: &mut R) -> Result<Vec<u8>> {
    update_from_reader(&mut engine, reader)?;
    Ok(engine.value_bytes())
}

/// Hash a whole buffer with the named algorithm.
///
/// Returns the checksum serialized in little-endian byte order
/// ([`HashType::output_size`] bytes).
pub fn hash_bytes(ty: HashType, data: &[u8]) -> Vec<u8> {
    match ty {
        HashType::Crc16 => finish_bytes(Crc16::new(), data),
        HashType::Crc32 => finish_bytes(Crc32::new(), data),
        HashType::Crc64 => finish_bytes(Crc64::new(), data),
    }
}

/// Hash `count` bytes of a buffer starting at `offset`.
///
/// Fails with [`ChecksumError::OutOfRange`] when the range falls outside the
/// buffer; nothing is hashed in that case.
pub fn hash_range(ty: HashType, data: &[u8], offset: usize, count: usize) -> Result<Vec<u8>> {
    let chunk = offset
        .checked_add(count)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| ChecksumError::out_of_range(offset, count, data.len()))?;
    Ok(hash_bytes(ty, chunk))
}

/// Hash the UTF-8 bytes of a string with the named algorithm.
pub fn hash_str(ty: HashType, data: &str) -> Vec<u8> {
    hash_bytes(ty, data.as_bytes())
}

/// Read `reader` to exhaustion in fixed-size chunks and hash everything read.
pub fn hash_reader<R: Read + ?Sized>(ty: HashType, reader: &mut R) -> Result<Vec<u8>> {
    match ty {
        HashType::Crc16 => finish_reader(Crc16::new(), reader),
        HashType::Crc32 => finish_reader(Crc32::new(), reader),
        HashType::Crc64 => finish_reader(Crc64::new(), reader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("CRC-32".parse::<HashType>().unwrap(), HashType::Crc32);
        assert_eq!("crc32".parse::<HashType>().unwrap(), HashType::Crc32);
        assert_eq!("CRC-64/XZ".parse::<HashType>().unwrap(), HashType::Crc64);
        assert_eq!("crc-16".parse::<HashType>().unwrap(), HashType::Crc16);
    }

    #[test]
    fn test_from_str_unsupported() {
        for name in ["MD5", "SHA-256", "", "CRC-24"] {
            let err = name.parse::<HashType>().unwrap_err();
            assert!(matches!(err, ChecksumError::UnsupportedAlgorithm { .. }));
        }
    }

    #[test]
    fn test_display_round_trip() {
        for ty in [HashType::Crc16, HashType::Crc32, HashType::Crc64] {
            assert_eq!(ty.to_string().parse::<HashType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_output_size() {
        assert_eq!(HashType::Crc16.output_size(), 2);
        assert_eq!(HashType::Crc32.output_size(), 4);
        assert_eq!(HashType::Crc64.output_size(), 8);
    }
}
