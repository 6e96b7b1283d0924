//! Fixed values from the ADS1015/ADS1115 datasheets.

/// Bus address with the ADDR pin tied to ground.
pub const ADDRESS_GND: u8 = 0x48;
/// Bus address with the ADDR pin tied to VDD.
pub const ADDRESS_VDD: u8 = 0x49;

pub(crate) const POINTER_CONVERSION: u8 = 0x00;
pub(crate) const POINTER_CONFIG: u8 = 0x01;
pub(crate) const POINTER_LOW_THRESHOLD: u8 = 0x02;
pub(crate) const POINTER_HIGH_THRESHOLD: u8 = 0x03;

// Config word bit positions, MSB first:
// OS | MUX[2:0] | PGA[2:0] | MODE | DR[2:0] | COMP_MODE | COMP_POL | COMP_LAT | COMP_QUE[1:0]
pub(crate) const BIT_OS: usize = 15;
pub(crate) const BITS_MUX: std::ops::RangeInclusive<usize> = 12..=14;
pub(crate) const BITS_PGA: std::ops::RangeInclusive<usize> = 9..=11;
pub(crate) const BIT_MODE: usize = 8;
pub(crate) const BITS_DATA_RATE: std::ops::RangeInclusive<usize> = 5..=7;
pub(crate) const BIT_COMP_MODE: usize = 4;
pub(crate) const BIT_COMP_POLARITY: usize = 3;
pub(crate) const BIT_COMP_LATCH: usize = 2;
pub(crate) const BITS_COMP_QUEUE: std::ops::RangeInclusive<usize> = 0..=1;

/// Largest positive value of a 12-bit two's-complement result.
pub(crate) const TWELVE_BIT_MAX: u16 = 0x07FF;
/// Bits OR-ed in to sign-extend a negative 12-bit result to 16 bits.
pub(crate) const TWELVE_BIT_SIGN_EXTENSION: u16 = 0xF000;

/// Pause between the two pointer writes of a register read.
pub(crate) const POINTER_SETTLE_MICROS: u32 = 10;

pub(crate) const ADS1015_CONVERSION_DELAY_MICROS: u32 = 1_000;
pub(crate) const ADS1115_CONVERSION_DELAY_MICROS: u32 = 8_000;
