use std::time::Duration;

use crate::config::DataRate;
use crate::constants::{ADS1015_CONVERSION_DELAY_MICROS, ADS1115_CONVERSION_DELAY_MICROS};

/// Parameters that differ between the supported chips.
///
/// Only the two chip constants exist: use [`Variant::ADS1015`] or
/// [`Variant::ADS1115`] when constructing the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    bit_shift: u8,
    conversion_delay_us: u32,
    data_rates: [u16; 8],
}

impl Variant {
    /// 12-bit ADS1015.
    pub const ADS1015: Variant = Variant {
        bit_shift: 4,
        conversion_delay_us: ADS1015_CONVERSION_DELAY_MICROS,
        data_rates: [128, 250, 490, 920, 1600, 2400, 3300, 3300],
    };

    /// 16-bit ADS1115.
    pub const ADS1115: Variant = Variant {
        bit_shift: 0,
        conversion_delay_us: ADS1115_CONVERSION_DELAY_MICROS,
        data_rates: [8, 16, 32, 64, 128, 250, 475, 860],
    };

    /// Number of unused low-order bits in the conversion register, 4 or 0.
    pub fn bit_shift(&self) -> u8 {
        self.bit_shift
    }

    /// Time to wait after starting a conversion before reading the result.
    ///
    /// This is a fixed sleep, not a poll of the OS bit. It must exceed the
    /// conversion time at the configured data rate or a stale result is read.
    pub fn conversion_delay(&self) -> Duration {
        Duration::from_micros(self.conversion_delay_us.into())
    }

    pub(crate) fn conversion_delay_us(&self) -> u32 {
        self.conversion_delay_us
    }

    /// Effective resolution of a conversion result in bits.
    pub fn resolution_bits(&self) -> u8 {
        16 - self.bit_shift
    }

    /// Nominal conversion rate for the given data rate code on this chip.
    pub fn samples_per_second(&self, rate: DataRate) -> u16 {
        self.data_rates[u8::from(rate) as usize]
    }
}
