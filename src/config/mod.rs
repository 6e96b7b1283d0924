//! The 16-bit Config register and its fields.
//!
//! [`Config`] is a plain value: [`Config::to_word`] and [`Config::from_word`]
//! convert between it and the register contents without touching the bus.
use bit_field::BitField;

use crate::constants::{
    BIT_COMP_LATCH, BIT_COMP_MODE, BIT_COMP_POLARITY, BIT_MODE, BIT_OS, BITS_COMP_QUEUE,
    BITS_DATA_RATE, BITS_MUX, BITS_PGA,
};

mod comparator;
mod gain;
mod mux;

pub use comparator::{ComparatorLatch, ComparatorMode, ComparatorPolarity, ComparatorQueue};
pub use gain::Gain;
pub use mux::{Channel, DifferentialPair, Mux};

/// Conversion mode (MODE bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Free-running conversions.
    Continuous,
    /// One conversion per write of the OS bit, then power down.
    #[default]
    SingleShot,
}

impl From<bool> for Mode {
    fn from(value: bool) -> Self {
        if value { Self::SingleShot } else { Self::Continuous }
    }
}

impl From<Mode> for bool {
    fn from(value: Mode) -> Self {
        match value {
            Mode::SingleShot => true,
            Mode::Continuous => false,
        }
    }
}

/// Data rate code (DR\[2:0\]).
///
/// Variants are named for the ADS1015 rate. The same code selects a lower
/// rate on the ADS1115; use [`Variant::samples_per_second`] for the rate of a
/// particular chip.
///
/// [`Variant::samples_per_second`]: crate::Variant::samples_per_second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataRate {
    /// Code `0b000`. ADS1115: 8 SPS.
    Sps128,
    /// Code `0b001`. ADS1115: 16 SPS.
    Sps250,
    /// Code `0b010`. ADS1115: 32 SPS.
    Sps490,
    /// Code `0b011`. ADS1115: 64 SPS.
    Sps920,
    /// Code `0b100`, the power-on default. ADS1115: 128 SPS.
    #[default]
    Sps1600,
    /// Code `0b101`. ADS1115: 250 SPS.
    Sps2400,
    /// Code `0b110`. ADS1115: 475 SPS.
    Sps3300,
    /// Code `0b111`, also 3300 SPS on the ADS1015. ADS1115: 860 SPS.
    Sps3300b,
}

impl From<u8> for DataRate {
    fn from(value: u8) -> Self {
        assert!(value <= 0b111, "Incorrect use of the from constructor.");
        match value {
            0b000 => Self::Sps128,
            0b001 => Self::Sps250,
            0b010 => Self::Sps490,
            0b011 => Self::Sps920,
            0b100 => Self::Sps1600,
            0b101 => Self::Sps2400,
            0b110 => Self::Sps3300,
            0b111 => Self::Sps3300b,
            _ => unreachable!(),
        }
    }
}

impl From<DataRate> for u8 {
    fn from(value: DataRate) -> Self {
        match value {
            DataRate::Sps128 => 0b000,
            DataRate::Sps250 => 0b001,
            DataRate::Sps490 => 0b010,
            DataRate::Sps920 => 0b011,
            DataRate::Sps1600 => 0b100,
            DataRate::Sps2400 => 0b101,
            DataRate::Sps3300 => 0b110,
            DataRate::Sps3300b => 0b111,
        }
    }
}

/// Contents of the Config register.
///
/// Bit layout, MSB first:
///
/// ```text
///  15 | 14..12 | 11..9 |  8   | 7..5 |     4     |    3     |    2     |   1..0
///  OS |  MUX   |  PGA  | MODE |  DR  | COMP_MODE | COMP_POL | COMP_LAT | COMP_QUE
/// ```
///
/// # Datasheet
///
/// See section 9.6.3 (Config Register) of the ADS1115 datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Operational status bit.
    ///
    /// When writing, `true` starts a single conversion. When reading, `true`
    /// means no conversion is in progress.
    pub start: bool,
    /// Input multiplexer selection.
    pub mux: Mux,
    /// Programmable gain amplifier setting.
    pub gain: Gain,
    /// Single-shot or continuous conversion.
    pub mode: Mode,
    /// Data rate code.
    pub data_rate: DataRate,
    /// Comparator shape.
    pub comparator_mode: ComparatorMode,
    /// ALERT/RDY pin polarity.
    pub comparator_polarity: ComparatorPolarity,
    /// ALERT/RDY pin latching.
    pub comparator_latch: ComparatorLatch,
    /// Comparator assertion queue, or disabled.
    pub comparator_queue: ComparatorQueue,
}

impl Config {
    /// Settings for a single conversion of the given input.
    ///
    /// The comparator is disabled (non-latching, active-low, traditional), the
    /// data rate is the default code, and the start bit is set.
    pub fn single_shot(mux: Mux, gain: Gain) -> Self {
        Self {
            start: true,
            mux,
            gain,
            mode: Mode::SingleShot,
            data_rate: DataRate::default(),
            comparator_mode: ComparatorMode::Traditional,
            comparator_polarity: ComparatorPolarity::ActiveLow,
            comparator_latch: ComparatorLatch::NonLatching,
            comparator_queue: ComparatorQueue::Disabled,
        }
    }

    /// Settings for continuous conversion of a single-ended channel with the
    /// comparator asserting (and latching) on the first conversion above the
    /// high threshold.
    pub fn comparator(channel: Channel, gain: Gain) -> Self {
        Self {
            start: false,
            mux: channel.into(),
            gain,
            mode: Mode::Continuous,
            data_rate: DataRate::default(),
            comparator_mode: ComparatorMode::Traditional,
            comparator_polarity: ComparatorPolarity::ActiveLow,
            comparator_latch: ComparatorLatch::Latching,
            comparator_queue: ComparatorQueue::AfterOne,
        }
    }

    /// Assemble the 16-bit register value.
    pub fn to_word(&self) -> u16 {
        let mut word = 0u16;
        word.set_bit(BIT_OS, self.start);
        word.set_bits(BITS_MUX, u8::from(self.mux) as u16);
        word.set_bits(BITS_PGA, u8::from(self.gain) as u16);
        word.set_bit(BIT_MODE, self.mode.into());
        word.set_bits(BITS_DATA_RATE, u8::from(self.data_rate) as u16);
        word.set_bit(BIT_COMP_MODE, self.comparator_mode.into());
        word.set_bit(BIT_COMP_POLARITY, self.comparator_polarity.into());
        word.set_bit(BIT_COMP_LATCH, self.comparator_latch.into());
        word.set_bits(BITS_COMP_QUEUE, u8::from(self.comparator_queue) as u16);
        word
    }

    /// Split a 16-bit register value into its fields.
    pub fn from_word(word: u16) -> Self {
        Self {
            start: word.get_bit(BIT_OS),
            mux: (word.get_bits(BITS_MUX) as u8).into(),
            gain: (word.get_bits(BITS_PGA) as u8).into(),
            mode: word.get_bit(BIT_MODE).into(),
            data_rate: (word.get_bits(BITS_DATA_RATE) as u8).into(),
            comparator_mode: word.get_bit(BIT_COMP_MODE).into(),
            comparator_polarity: word.get_bit(BIT_COMP_POLARITY).into(),
            comparator_latch: word.get_bit(BIT_COMP_LATCH).into(),
            comparator_queue: (word.get_bits(BITS_COMP_QUEUE) as u8).into(),
        }
    }
}

impl From<Config> for u16 {
    fn from(value: Config) -> Self {
        value.to_word()
    }
}

impl From<u16> for Config {
    fn from(value: u16) -> Self {
        Config::from_word(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_shot_channel_0_default_gain() {
        // OS | MUX=100 | PGA=000 | MODE | DR=100 | COMP_QUE=11
        let config = Config::single_shot(Channel::Ain0.into(), Gain::default());
        assert_eq!(config.to_word(), 0xC183);
    }

    #[test]
    fn single_shot_differential_2_3_gain_16() {
        let config = Config::single_shot(DifferentialPair::Ain2Ain3.into(), Gain::V0_256);
        assert_eq!(config.to_word(), 0x8000 | 0x3000 | 0x0A00 | 0x0100 | 0x0080 | 0x0003);
    }

    #[test]
    fn comparator_channel_0_default_gain() {
        // No OS bit, continuous, latching, assert after one conversion.
        let config = Config::comparator(Channel::Ain0, Gain::default());
        assert_eq!(config.to_word(), 0x4084);
    }

    #[test]
    fn single_ended_mux_fields_are_distinct_and_ordered() {
        let fields: Vec<u16> = Channel::ALL
            .iter()
            .map(|&c| Config::single_shot(c.into(), Gain::default()).to_word() & 0x7000)
            .collect();
        assert_eq!(fields, [0x4000, 0x5000, 0x6000, 0x7000]);
    }

    #[test]
    fn gain_field_round_trips_through_word() {
        for gain in Gain::ALL {
            let word = Config::single_shot(Mux::Single1, gain).to_word();
            assert_eq!(Config::from_word(word).gain, gain);
            assert_eq!(word & 0x0E00, (u8::from(gain) as u16) << 9);
        }
    }

    #[test]
    fn fields_round_trip_through_word() {
        for gain in Gain::ALL {
            for channel in Channel::ALL {
                let config = Config::comparator(channel, gain);
                assert_eq!(Config::from_word(config.to_word()), config);
            }
            for pair in [DifferentialPair::Ain0Ain1, DifferentialPair::Ain2Ain3] {
                let config = Config::single_shot(pair.into(), gain);
                assert_eq!(Config::from_word(config.to_word()), config);
            }
        }
    }

    #[test]
    fn every_word_round_trips() {
        for word in 0..=u16::MAX {
            assert_eq!(Config::from_word(word).to_word(), word);
        }
    }

    #[test]
    fn power_on_reset_value() {
        // Datasheet reset value of the Config register.
        let config = Config::from_word(0x8583);
        assert!(config.start);
        assert_eq!(config.mux, Mux::Diff0_1);
        assert_eq!(config.gain, Gain::V2_048);
        assert_eq!(config.mode, Mode::SingleShot);
        assert_eq!(config.data_rate, DataRate::Sps1600);
        assert_eq!(config.comparator_queue, ComparatorQueue::Disabled);
    }
}
