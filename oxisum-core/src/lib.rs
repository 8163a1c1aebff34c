//! # OxiSum Core
//!
//! Core components for the OxiSum checksum library.
//!
//! This crate provides parametrized, table-driven CRC engines at three
//! register widths, plus the small pieces they are built from:
//!
//! - [`crc`]: [`Crc16`], [`Crc32`] and [`Crc64`] engines with the standard
//!   parameter catalog (Ethernet CRC-32, BZIP2, Castagnoli, MPEG-2, POSIX,
//!   XZ, WE, ECMA-182, ...)
//! - [`ccitt16`]: a table-free CRC-CCITT specialization
//! - [`reflect`]: bit-order reversal for 16/32/64-bit words
//! - [`traits`]: the [`Checksum`] capability trait and reader folding
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! An engine is configured once from a parameter set (polynomial, initial
//! value, reflection, final XOR), builds its 256-entry lookup table, and
//! then folds input a byte at a time. Tables are frozen after construction
//! and shared between blueprint copies; the running register is exclusive
//! to each engine.
//!
//! ## Example
//!
//! ```rust
//! use oxisum_core::crc::{Crc32, Crc64};
//!
//! // One-shot
//! assert_eq!(Crc32::compute(b"123456789"), 0xCBF43926);
//!
//! // Incremental, with a catalog variant
//! let mut crc = Crc64::xz();
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.value(), 0x995DC9BBDF1939FA);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod ccitt16;
pub mod crc;
pub mod error;
pub mod reflect;
pub mod traits;

// Re-exports for convenience
pub use ccitt16::CcittCrc16;
pub use crc::{Crc16, Crc32, Crc64};
pub use error::{ChecksumError, Result};
pub use traits::{Checksum, update_from_reader};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ccitt16::CcittCrc16;
    pub use crate::crc::{Crc16, Crc32, Crc64};
    pub use crate::error::{ChecksumError, Result};
    pub use crate::traits::{Checksum, update_from_reader};
}
