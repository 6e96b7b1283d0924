use std::path::PathBuf;

use ads1x15_hal::{DifferentialPair, Gain, Variant};
use clap::{Parser, ValueEnum, value_parser};

use crate::util;

/// CLI for the ADS1015 and ADS1115 analog-to-digital converters
///
/// Readings are printed as raw conversion codes. Single-ended readings are
/// unsigned; differential and comparator readings are signed.
///
/// Set RUST_LOG=debug to see the config words written to the chip, or
/// RUST_LOG=trace to see every register transfer.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// I2C bus device file
    #[arg(short, long, default_value = "/dev/i2c-1")]
    pub(crate) bus: PathBuf,
    /// Device 7-bit address in hexadecimal: 0x48 with ADDR tied to GND, 0x49
    /// with ADDR tied to VDD
    #[arg(short, long, default_value = "0x48", value_parser = util::u8_from_hex)]
    pub(crate) address: u8,
    /// Chip type
    #[arg(short, long, default_value = "ads1015")]
    pub(crate) chip: Chip,
    /// Full-scale input range in volts
    #[arg(short, long, default_value = "6.144")]
    pub(crate) gain: GainRange,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Read a single-ended input against GND.
    Read {
        /// Input channel, in the range 0..=3.
        #[arg(value_parser = value_parser!(u8).range(0..=3))]
        channel: u8,
    },
    /// Read the difference across an input pair.
    Diff {
        /// Input pair.
        pair: Pair,
    },
    /// Arm the comparator on a single-ended input in continuous mode.
    ///
    /// The ALERT/RDY pin latches low after the first conversion above the
    /// threshold. Use `last` to clear it.
    Comparator {
        /// Input channel, in the range 0..=3.
        #[arg(value_parser = value_parser!(u8).range(0..=3))]
        channel: u8,
        /// High threshold as a conversion code.
        #[arg(allow_negative_numbers = true)]
        threshold: i16,
    },
    /// Read the last conversion result without starting a new conversion.
    Last,
    /// Read and decode the Config register.
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Chip {
    /// 12-bit ADS1015.
    Ads1015,
    /// 16-bit ADS1115.
    Ads1115,
}

impl From<Chip> for Variant {
    fn from(value: Chip) -> Self {
        match value {
            Chip::Ads1015 => Variant::ADS1015,
            Chip::Ads1115 => Variant::ADS1115,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum GainRange {
    #[value(name = "6.144")]
    V6_144,
    #[value(name = "4.096")]
    V4_096,
    #[value(name = "2.048")]
    V2_048,
    #[value(name = "1.024")]
    V1_024,
    #[value(name = "0.512")]
    V0_512,
    #[value(name = "0.256")]
    V0_256,
}

impl From<GainRange> for Gain {
    fn from(value: GainRange) -> Self {
        match value {
            GainRange::V6_144 => Gain::V6_144,
            GainRange::V4_096 => Gain::V4_096,
            GainRange::V2_048 => Gain::V2_048,
            GainRange::V1_024 => Gain::V1_024,
            GainRange::V0_512 => Gain::V0_512,
            GainRange::V0_256 => Gain::V0_256,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Pair {
    /// AIN0 positive, AIN1 negative.
    #[value(name = "0-1")]
    Ain0Ain1,
    /// AIN2 positive, AIN3 negative.
    #[value(name = "2-3")]
    Ain2Ain3,
}

impl From<Pair> for DifferentialPair {
    fn from(value: Pair) -> Self {
        match value {
            Pair::Ain0Ain1 => DifferentialPair::Ain0Ain1,
            Pair::Ain2Ain3 => DifferentialPair::Ain2Ain3,
        }
    }
}
