//! Parametrized CRC (Cyclic Redundancy Check) engines.
//!
//! One algorithmic core instantiated at three register widths: [`Crc16`],
//! [`Crc32`] and [`Crc64`]. Every engine is configured by a parameter set
//! (generator polynomial in normal bit order, initial register value,
//! input/output reflection, final XOR constant, display name), builds a
//! 256-entry lookup table once at construction and then folds input a byte
//! at a time.
//!
//! Two table-driven strategies cover the catalog:
//!
//! - **Reflected** (LSB-first) variants reverse the polynomial once and walk
//!   the register right, e.g. CRC-32 (Ethernet/ZIP/PNG), CRC-32C, CRC-64/XZ.
//! - **Normal** (MSB-first) variants keep the polynomial as published and
//!   walk the register left, e.g. CRC-32/BZIP2, CRC-32/MPEG-2, CRC-64/WE.
//!
//! Mixed reflection (input reflected, output not, or vice versa) is a
//! configuration error.
//!
//! ## Example
//!
//! ```
//! use oxisum_core::crc::Crc32;
//!
//! let mut crc = Crc32::new();
//! crc.update(b"Hello, World!");
//! assert_eq!(crc.value(), 0xEC4AC3D0);
//!
//! assert_eq!(Crc32::castagnoli().name(), "CRC-32C");
//! ```

use crate::error::{ChecksumError, Result};
use crate::reflect::{reflect16, reflect32, reflect64};
use crate::traits::Checksum;
use std::fmt;
use std::sync::Arc;

macro_rules! impl_crc_engine {
    ($(#[$doc:meta])* $name:ident, $uint:ty, $bits:expr, $reflect_fn:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            polynomial: $uint,
            initializer: $uint,
            final_xor: $uint,
            reflect_input: bool,
            reflect_output: bool,
            name: String,
            // Built once, then frozen; blueprint copies share it.
            table: Arc<[$uint; 256]>,
            register: $uint,
        }

        impl $name {
            /// Create an engine from an explicit parameter set.
            ///
            /// `polynomial` is given in normal (non-reflected) bit order as
            /// published in the CRC catalogs. Fails with
            /// [`ChecksumError::UnevenReflection`] when `reflect_input` and
            /// `reflect_output` differ.
            pub fn with_params(
                polynomial: $uint,
                initializer: $uint,
                reflect_input: bool,
                reflect_output: bool,
                final_xor: $uint,
                name: impl Into<String>,
            ) -> Result<Self> {
                let name = name.into();
                if reflect_input != reflect_output {
                    return Err(ChecksumError::uneven_reflection(name));
                }
                let table = if reflect_input {
                    Self::build_reflected_table(polynomial)
                } else {
                    Self::build_table(polynomial)
                };
                Ok(Self {
                    polynomial,
                    initializer,
                    final_xor,
                    reflect_input,
                    reflect_output,
                    name,
                    table: Arc::new(table),
                    register: initializer,
                })
            }

            /// Catalog constructor; reflection flags are always even here.
            fn from_catalog(
                polynomial: $uint,
                initializer: $uint,
                reflected: bool,
                final_xor: $uint,
                name: &str,
            ) -> Self {
                let table = if reflected {
                    Self::build_reflected_table(polynomial)
                } else {
                    Self::build_table(polynomial)
                };
                Self {
                    polynomial,
                    initializer,
                    final_xor,
                    reflect_input: reflected,
                    reflect_output: reflected,
                    name: name.to_string(),
                    table: Arc::new(table),
                    register: initializer,
                }
            }

            /// Build the MSB-first lookup table for a normal-order polynomial.
            fn build_table(polynomial: $uint) -> [$uint; 256] {
                let top: $uint = 1 << ($bits - 1);
                let mut table = [0; 256];
                for (i, entry) in table.iter_mut().enumerate() {
                    let mut crc = (i as $uint) << ($bits - 8);
                    for _ in 0..8 {
                        crc = if crc & top != 0 {
                            (crc << 1) ^ polynomial
                        } else {
                            crc << 1
                        };
                    }
                    *entry = crc;
                }
                table
            }

            /// Build the LSB-first lookup table; the polynomial is reflected
            /// once up front.
            fn build_reflected_table(polynomial: $uint) -> [$uint; 256] {
                let poly = $reflect_fn(polynomial);
                let mut table = [0; 256];
                for (i, entry) in table.iter_mut().enumerate() {
                    let mut crc = i as $uint;
                    for _ in 0..8 {
                        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
                    }
                    *entry = crc;
                }
                table
            }

            /// Fold a single byte into the running register.
            #[inline]
            pub fn update_byte(&mut self, byte: u8) {
                if self.reflect_input {
                    let index = ((self.register ^ byte as $uint) & 0xFF) as usize;
                    self.register = (self.register >> 8) ^ self.table[index];
                } else {
                    let index =
                        (((self.register >> ($bits - 8)) ^ byte as $uint) & 0xFF) as usize;
                    self.register = (self.register << 8) ^ self.table[index];
                }
            }

            /// Fold a buffer into the running register.
            ///
            /// Strictly sequential; splitting input across multiple calls at
            /// any boundary yields the same result as one call over the
            /// concatenation.
            #[inline]
            pub fn update(&mut self, data: &[u8]) {
                for &byte in data {
                    self.update_byte(byte);
                }
            }

            /// The finalized checksum for all bytes folded so far.
            ///
            /// Applies the final XOR to the raw register; the running state
            /// is not disturbed, so updates may continue afterwards.
            #[inline]
            pub fn value(&self) -> $uint {
                self.register ^ self.final_xor
            }

            /// Overwrite the raw register, bypassing the final XOR.
            ///
            /// This seeds the engine with an arbitrary intermediate state,
            /// e.g. to resume a computation captured via a raw register dump.
            pub fn set_value(&mut self, raw: $uint) {
                self.register = raw;
            }

            /// Restore the register to the configured initializer.
            ///
            /// Parameters and table are untouched; idempotent.
            pub fn reset(&mut self) {
                self.register = self.initializer;
            }

            /// The 256-entry lookup table (read-only view).
            pub fn table(&self) -> &[$uint; 256] {
                &self.table
            }

            /// Create a fresh engine from this one's parameter set.
            ///
            /// The lookup table is shared, not recomputed; the new engine
            /// starts at the initializer regardless of this engine's current
            /// register state.
            pub fn blueprint(&self) -> Self {
                Self {
                    polynomial: self.polynomial,
                    initializer: self.initializer,
                    final_xor: self.final_xor,
                    reflect_input: self.reflect_input,
                    reflect_output: self.reflect_output,
                    name: self.name.clone(),
                    table: Arc::clone(&self.table),
                    register: self.initializer,
                }
            }

            /// The generator polynomial in normal bit order.
            pub fn polynomial(&self) -> $uint {
                self.polynomial
            }

            /// The initial register value.
            pub fn initializer(&self) -> $uint {
                self.initializer
            }

            /// The final XOR constant.
            pub fn final_xor(&self) -> $uint {
                self.final_xor
            }

            /// Whether input bytes are processed least-significant-bit first.
            pub fn reflect_input(&self) -> bool {
                self.reflect_input
            }

            /// Whether the output is reported in reflected bit order.
            pub fn reflect_output(&self) -> bool {
                self.reflect_output
            }

            /// The display name of the parameter set (diagnostics only).
            pub fn name(&self) -> &str {
                &self.name
            }
        }

        impl Checksum for $name {
            type Output = $uint;

            #[inline]
            fn update_byte(&mut self, byte: u8) {
                $name::update_byte(self, byte);
            }

            #[inline]
            fn update(&mut self, data: &[u8]) {
                $name::update(self, data);
            }

            fn reset(&mut self) {
                $name::reset(self);
            }

            fn value(&self) -> $uint {
                $name::value(self)
            }

            fn value_bytes(&self) -> Vec<u8> {
                self.value().to_le_bytes().to_vec()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{} width={} poly={:#x} init={:#x} refin={} refout={} xorout={:#x}",
                    self.name,
                    $bits,
                    self.polynomial,
                    self.initializer,
                    self.reflect_input,
                    self.reflect_output,
                    self.final_xor,
                )
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

impl_crc_engine!(
    /// Parametrized 16-bit CRC engine.
    ///
    /// The default parameter set is CRC-16/ARC as used by LZH/LHA archives.
    Crc16,
    u16,
    16,
    reflect16
);

impl_crc_engine!(
    /// Parametrized 32-bit CRC engine.
    ///
    /// The default parameter set is the standard CRC-32 first popularized by
    /// Ethernet and used by ZIP, GZIP and PNG.
    Crc32,
    u32,
    32,
    reflect32
);

impl_crc_engine!(
    /// Parametrized 64-bit CRC engine.
    ///
    /// The default parameter set is CRC-64/XZ as used by the XZ container.
    Crc64,
    u64,
    64,
    reflect64
);

impl Crc16 {
    /// Create a CRC-16/ARC engine (the default).
    ///
    /// width=16 poly=0x8005 init=0x0000 refin=true refout=true xorout=0x0000
    /// check=0xbb3d name="CRC-16/ARC"
    pub fn new() -> Self {
        Self::arc()
    }

    /// width=16 poly=0x8005 init=0x0000 refin=true refout=true xorout=0x0000
    /// check=0xbb3d name="CRC-16/ARC"
    pub fn arc() -> Self {
        Self::from_catalog(0x8005, 0x0000, true, 0x0000, "CRC-16/ARC")
    }

    /// width=16 poly=0x1021 init=0xffff refin=false refout=false xorout=0x0000
    /// check=0x29b1 name="CRC-16/CCITT-FALSE"
    pub fn ccitt() -> Self {
        Self::from_catalog(0x1021, 0xFFFF, false, 0x0000, "CRC-16/CCITT-FALSE")
    }

    /// width=16 poly=0x1021 init=0x0000 refin=true refout=true xorout=0x0000
    /// check=0x2189 name="CRC-16/KERMIT"
    pub fn kermit() -> Self {
        Self::from_catalog(0x1021, 0x0000, true, 0x0000, "CRC-16/KERMIT")
    }

    /// Compute the default CRC-16/ARC of a buffer in one call.
    pub fn compute(data: &[u8]) -> u16 {
        let mut crc = Self::new();
        crc.update(data);
        crc.value()
    }
}

impl Crc32 {
    /// The standard CRC-32 polynomial, first popularized by Ethernet:
    /// x^32+x^26+x^23+x^22+x^16+x^12+x^11+x^10+x^8+x^7+x^5+x^4+x^2+x^1+x^0.
    pub const DEFAULT_POLYNOMIAL: u32 = 0x04C11DB7;

    /// Create a standard CRC-32 engine (the default).
    ///
    /// width=32 poly=0x04c11db7 init=0xffffffff refin=true refout=true
    /// xorout=0xffffffff check=0xcbf43926 name="CRC-32"
    pub fn new() -> Self {
        Self::from_catalog(Self::DEFAULT_POLYNOMIAL, 0xFFFFFFFF, true, 0xFFFFFFFF, "CRC-32")
    }

    /// width=32 poly=0xf4acfb13 init=0xffffffff refin=true refout=true
    /// xorout=0xffffffff check=0x1697d06a name="CRC-32/AUTOSAR"
    pub fn autosar() -> Self {
        Self::from_catalog(0xF4ACFB13, 0xFFFFFFFF, true, 0xFFFFFFFF, "CRC-32/AUTOSAR")
    }

    /// width=32 poly=0x04c11db7 init=0xffffffff refin=false refout=false
    /// xorout=0xffffffff check=0xfc891918 name="CRC-32/BZIP2"
    pub fn bzip2() -> Self {
        Self::from_catalog(Self::DEFAULT_POLYNOMIAL, 0xFFFFFFFF, false, 0xFFFFFFFF, "CRC-32/BZIP2")
    }

    /// width=32 poly=0x1edc6f41 init=0xffffffff refin=true refout=true
    /// xorout=0xffffffff check=0xe3069283 name="CRC-32C"
    pub fn castagnoli() -> Self {
        Self::from_catalog(0x1EDC6F41, 0xFFFFFFFF, true, 0xFFFFFFFF, "CRC-32C")
    }

    /// width=32 poly=0xa833982b init=0xffffffff refin=true refout=true
    /// xorout=0xffffffff check=0x87315576 name="CRC-32D"
    pub fn d() -> Self {
        Self::from_catalog(0xA833982B, 0xFFFFFFFF, true, 0xFFFFFFFF, "CRC-32D")
    }

    /// width=32 poly=0x04c11db7 init=0xffffffff refin=false refout=false
    /// xorout=0x00000000 check=0x0376e6e7 name="CRC-32/MPEG-2"
    pub fn mpeg2() -> Self {
        Self::from_catalog(Self::DEFAULT_POLYNOMIAL, 0xFFFFFFFF, false, 0x00000000, "CRC-32/MPEG-2")
    }

    /// width=32 poly=0x04c11db7 init=0x00000000 refin=false refout=false
    /// xorout=0xffffffff check=0x765e7680 name="CRC-32/POSIX"
    pub fn posix() -> Self {
        Self::from_catalog(Self::DEFAULT_POLYNOMIAL, 0x00000000, false, 0xFFFFFFFF, "CRC-32/POSIX")
    }

    /// Alias for [`Crc32::posix`], matching the POSIX `cksum` utility.
    pub fn cksum() -> Self {
        Self::posix()
    }

    /// width=32 poly=0x814141ab init=0x00000000 refin=false refout=false
    /// xorout=0x00000000 check=0x3010bf7f name="CRC-32Q"
    pub fn q() -> Self {
        Self::from_catalog(0x814141AB, 0x00000000, false, 0x00000000, "CRC-32Q")
    }

    /// Compute the default CRC-32 of a buffer in one call.
    pub fn compute(data: &[u8]) -> u32 {
        let mut crc = Self::new();
        crc.update(data);
        crc.value()
    }
}

impl Crc64 {
    /// The ECMA-182 polynomial used by all 64-bit catalog variants here.
    pub const DEFAULT_POLYNOMIAL: u64 = 0x42F0E1EBA9EA3693;

    /// Create a CRC-64/XZ engine (the default).
    ///
    /// width=64 poly=0x42f0e1eba9ea3693 init=0xffffffffffffffff refin=true
    /// refout=true xorout=0xffffffffffffffff check=0x995dc9bbdf1939fa
    /// name="CRC-64/XZ"
    pub fn new() -> Self {
        Self::xz()
    }

    /// width=64 poly=0x42f0e1eba9ea3693 init=0xffffffffffffffff refin=true
    /// refout=true xorout=0xffffffffffffffff check=0x995dc9bbdf1939fa
    /// name="CRC-64/XZ"
    pub fn xz() -> Self {
        Self::from_catalog(
            Self::DEFAULT_POLYNOMIAL,
            0xFFFFFFFFFFFFFFFF,
            true,
            0xFFFFFFFFFFFFFFFF,
            "CRC-64/XZ",
        )
    }

    /// width=64 poly=0x42f0e1eba9ea3693 init=0xffffffffffffffff refin=false
    /// refout=false xorout=0xffffffffffffffff check=0x62ec59e3f1a4f00a
    /// name="CRC-64/WE"
    pub fn we() -> Self {
        Self::from_catalog(
            Self::DEFAULT_POLYNOMIAL,
            0xFFFFFFFFFFFFFFFF,
            false,
            0xFFFFFFFFFFFFFFFF,
            "CRC-64/WE",
        )
    }

    /// width=64 poly=0x42f0e1eba9ea3693 init=0x0000000000000000 refin=false
    /// refout=false xorout=0x0000000000000000 check=0x6c40df5f0b497347
    /// name="CRC-64"
    pub fn ecma182() -> Self {
        Self::from_catalog(Self::DEFAULT_POLYNOMIAL, 0, false, 0, "CRC-64")
    }

    /// Compute the default CRC-64/XZ of a buffer in one call.
    pub fn compute(data: &[u8]) -> u64 {
        let mut crc = Self::new();
        crc.update(data);
        crc.value()
    }
}
