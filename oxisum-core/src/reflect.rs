//! Bit reflection (bit-order reversal) for fixed-width words.
//!
//! CRC variants historically process bits either most-significant-first
//! ("normal") or least-significant-first ("reflected"). The reflected table
//! construction reverses the generator polynomial once up front so that the
//! per-byte fold can stay a plain shift-and-lookup.
//!
//! These run once per engine construction, never on the per-byte path.

/// Reverse the bit order of a 16-bit word.
///
/// ```
/// use oxisum_core::reflect::reflect16;
///
/// assert_eq!(reflect16(0x8005), 0xA001);
/// assert_eq!(reflect16(0x0001), 0x8000);
/// ```
pub const fn reflect16(mut x: u16) -> u16 {
    // move bits
    x = ((x & 0x5555) << 1) | ((x >> 1) & 0x5555);
    x = ((x & 0x3333) << 2) | ((x >> 2) & 0x3333);
    x = ((x & 0x0F0F) << 4) | ((x >> 4) & 0x0F0F);
    // move bytes
    (x << 8) | (x >> 8)
}

/// Reverse the bit order of a 32-bit word.
///
/// ```
/// use oxisum_core::reflect::reflect32;
///
/// assert_eq!(reflect32(0x04C11DB7), 0xEDB88320);
/// ```
pub const fn reflect32(mut x: u32) -> u32 {
    // move bits
    x = ((x & 0x55555555) << 1) | ((x >> 1) & 0x55555555);
    x = ((x & 0x33333333) << 2) | ((x >> 2) & 0x33333333);
    x = ((x & 0x0F0F0F0F) << 4) | ((x >> 4) & 0x0F0F0F0F);
    // move bytes
    (x << 24) | ((x & 0xFF00) << 8) | ((x >> 8) & 0xFF00) | (x >> 24)
}

/// Reverse the bit order of a 64-bit word.
///
/// ```
/// use oxisum_core::reflect::reflect64;
///
/// assert_eq!(reflect64(0x42F0E1EBA9EA3693), 0xC96C5795D7870F42);
/// ```
pub const fn reflect64(mut x: u64) -> u64 {
    // move bits
    x = ((x & 0x5555555555555555) << 1) | ((x >> 1) & 0x5555555555555555);
    x = ((x & 0x3333333333333333) << 2) | ((x >> 2) & 0x3333333333333333);
    x = ((x & 0x0F0F0F0F0F0F0F0F) << 4) | ((x >> 4) & 0x0F0F0F0F0F0F0F0F);
    // move bytes
    (x << 56)
        | ((x & 0xFF00) << 40)
        | ((x & 0xFF_0000) << 24)
        | ((x & 0xFF00_0000) << 8)
        | ((x >> 8) & 0xFF00_0000)
        | ((x >> 24) & 0xFF_0000)
        | ((x >> 40) & 0xFF00)
        | (x >> 56)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_known_polynomials() {
        // CRC-16/ARC
        assert_eq!(reflect16(0x8005), 0xA001);
        // CRC-32 (Ethernet) and CRC-32C (Castagnoli)
        assert_eq!(reflect32(0x04C11DB7), 0xEDB88320);
        assert_eq!(reflect32(0x1EDC6F41), 0x82F63B78);
        // CRC-64/XZ
        assert_eq!(reflect64(0x42F0E1EBA9EA3693), 0xC96C5795D7870F42);
    }

    #[test]
    fn test_reflect_fixed_points() {
        assert_eq!(reflect16(0x0000), 0x0000);
        assert_eq!(reflect16(0xFFFF), 0xFFFF);
        assert_eq!(reflect32(0x00000000), 0x00000000);
        assert_eq!(reflect32(0xFFFFFFFF), 0xFFFFFFFF);
        assert_eq!(reflect64(0), 0);
        assert_eq!(reflect64(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_reflect_involution() {
        // reflect(reflect(x)) == x across a spread of bit patterns
        let mut x: u64 = 0x0123456789ABCDEF;
        for _ in 0..64 {
            assert_eq!(reflect16(reflect16(x as u16)), x as u16);
            assert_eq!(reflect32(reflect32(x as u32)), x as u32);
            assert_eq!(reflect64(reflect64(x)), x);
            x = x.rotate_left(7) ^ 0xA5A5_5A5A_A5A5_5A5A;
        }
    }

    #[test]
    fn test_reflect_single_bits() {
        for i in 0..32 {
            assert_eq!(reflect32(1 << i), 1 << (31 - i));
        }
        for i in 0..64 {
            assert_eq!(reflect64(1 << i), 1 << (63 - i));
        }
    }

    #[test]
    fn test_reflect_matches_naive() {
        fn naive64(x: u64) -> u64 {
            let mut r = 0;
            for i in 0..64 {
                if x >> i & 1 != 0 {
                    r |= 1 << (63 - i);
                }
            }
            r
        }
        for &x in &[0x42F0E1EBA9EA3693u64, 0xDEADBEEF, 1, u64::MAX, 0x8000000000000001] {
            assert_eq!(reflect64(x), naive64(x));
            assert_eq!(reflect32(x as u32), (naive64(x as u32 as u64) >> 32) as u32);
        }
    }
}
