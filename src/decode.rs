//! Conversion of raw register values into samples.
//!
//! The ADS1015 left-aligns its 12-bit result in the 16-bit conversion
//! register, so its low four bits are always zero and must be shifted off.
//! The ADS1115 uses all 16 bits. Both chips produce two's-complement results.
use crate::constants::{TWELVE_BIT_MAX, TWELVE_BIT_SIGN_EXTENSION};

/// Shift the raw register value down to the chip's resolution, without sign
/// handling.
///
/// Single-ended readings are treated as non-negative magnitudes. A shift of
/// 16 or more leaves no bits and yields 0.
pub fn decode_unsigned(raw: u16, bit_shift: u8) -> u16 {
    raw.checked_shr(bit_shift.into()).unwrap_or(0)
}

/// Shift the raw register value down to the chip's resolution and interpret
/// it as two's-complement.
///
/// With a non-zero shift the result is a 12-bit value, which is sign-extended
/// to 16 bits if its top bit is set. A shift of 16 or more yields 0.
pub fn decode_signed(raw: u16, bit_shift: u8) -> i16 {
    let shifted = decode_unsigned(raw, bit_shift);
    if bit_shift == 0 {
        return shifted as i16;
    }
    if shifted > TWELVE_BIT_MAX {
        (shifted | TWELVE_BIT_SIGN_EXTENSION) as i16
    } else {
        shifted as i16
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn twelve_bit_sign_extension() {
        // Shifted values 0x0800, 0x07FF and 0 as they sit in the register.
        assert_eq!(decode_signed(0x8000, 4), -2048);
        assert_eq!(decode_signed(0x7FF0, 4), 2047);
        assert_eq!(decode_signed(0x0000, 4), 0);
        assert_eq!(decode_signed(0xFFF0, 4), -1);
    }

    #[test]
    fn sixteen_bit_reinterpretation() {
        assert_eq!(decode_signed(0x8000, 0), -32768);
        assert_eq!(decode_signed(0x7FFF, 0), 32767);
        assert_eq!(decode_signed(0xFFFF, 0), -1);
        assert_eq!(decode_signed(0x0000, 0), 0);
    }

    #[test]
    fn unsigned_only_shifts() {
        assert_eq!(decode_unsigned(0xFFF0, 4), 0x0FFF);
        assert_eq!(decode_unsigned(0x8000, 4), 0x0800);
        assert_eq!(decode_unsigned(0x8000, 0), 0x8000);
        assert_eq!(decode_unsigned(0x1234, 0), 0x1234);
    }

    #[test]
    fn oversized_shift_yields_zero() {
        assert_eq!(decode_unsigned(0xFFFF, 16), 0);
        assert_eq!(decode_unsigned(0xFFFF, u8::MAX), 0);
        assert_eq!(decode_signed(0x8000, 16), 0);
        assert_eq!(decode_signed(0xFFFF, 200), 0);
    }

    #[test]
    fn low_bits_are_discarded() {
        assert_eq!(decode_signed(0x000F, 4), 0);
        assert_eq!(decode_unsigned(0x000F, 4), 0);
    }
}
