//! Table-free CRC-CCITT engine.
//!
//! [`CcittCrc16`] evaluates the CRC-CCITT recurrence (polynomial 0x1021,
//! initial value 0xFFFF, no final XOR) directly from nibble-derived terms
//! instead of a 256-entry lookup table. It is observation-equivalent to
//! [`Crc16::ccitt`](crate::crc::Crc16::ccitt) for every input; the closed
//! form trades one table indirection for three shifts and is useful where a
//! 512-byte table per engine is unwelcome.

use crate::traits::Checksum;

/// CRC-16/CCITT-FALSE calculator without a lookup table.
///
/// - Polynomial: 0x1021
/// - Initial value: 0xFFFF
/// - Final XOR: 0x0000
/// - Reflected input/output: No
///
/// # Example
///
/// ```
/// use oxisum_core::ccitt16::CcittCrc16;
///
/// let mut crc = CcittCrc16::new();
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0x29B1);
/// ```
#[derive(Debug, Clone)]
pub struct CcittCrc16 {
    crc: u16,
}

impl CcittCrc16 {
    /// Create a new CRC-CCITT calculator.
    pub fn new() -> Self {
        Self { crc: 0xFFFF }
    }

    /// Reset the CRC to its initial state.
    pub fn reset(&mut self) {
        self.crc = 0xFFFF;
    }

    /// Fold a single byte into the running register.
    ///
    /// One step of polynomial division, expressed through the folded nibble
    /// term `x`: shifted-out bits re-enter at the x^12, x^5 and x^0
    /// positions of 0x1021.
    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        let mut x = (self.crc >> 8) ^ byte as u16;
        x ^= x >> 4;
        self.crc = (self.crc << 8) ^ (x << 12) ^ (x << 5) ^ x;
    }

    /// Update the CRC with more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.update_byte(byte);
        }
    }

    /// Get the current CRC value.
    pub fn value(&self) -> u16 {
        self.crc
    }

    /// Compute the CRC-CCITT of a buffer in one call.
    pub fn compute(data: &[u8]) -> u16 {
        let mut crc = Self::new();
        crc.update(data);
        crc.value()
    }
}

impl Default for CcittCrc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum for CcittCrc16 {
    type Output = u16;

    #[inline]
    fn update_byte(&mut self, byte: u8) {
        CcittCrc16::update_byte(self, byte);
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        CcittCrc16::update(self, data);
    }

    fn reset(&mut self) {
        CcittCrc16::reset(self);
    }

    fn value(&self) -> u16 {
        CcittCrc16::value(self)
    }

    fn value_bytes(&self) -> Vec<u8> {
        self.value().to_le_bytes().to_vec()
    }
}
