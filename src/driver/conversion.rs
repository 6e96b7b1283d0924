//! Single-shot and last-result reads.
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::ADS1x15;
use crate::config::{Channel, Config, DifferentialPair, Mux};
use crate::decode::{decode_signed, decode_unsigned};
use crate::error::Error;
use crate::registers::Register;

impl<I2C: I2c, D: DelayNs> ADS1x15<I2C, D> {
    /// Measure a single-ended input against GND.
    ///
    /// `channel` must be in `0..=3`. Any other value returns `Ok(0)` without
    /// any bus traffic.
    ///
    /// The result is the conversion register shifted down to the chip's
    /// resolution and is not sign-extended: 0..=4095 for the ADS1015 and
    /// 0..=65535 for the ADS1115. Inputs slightly below GND read as large
    /// values on the ADS1115 for this reason.
    pub fn read_single_ended(&mut self, channel: u8) -> Result<u16, Error<I2C::Error>> {
        let Ok(channel) = Channel::try_from(channel) else {
            return Ok(0);
        };
        let raw = self.convert(channel.into())?;
        Ok(decode_unsigned(raw, self.variant.bit_shift()))
    }

    /// Measure the voltage difference across one of the two fixed input pairs.
    ///
    /// The result is signed, as the positive input may be below the negative.
    pub fn read_differential(&mut self, pair: DifferentialPair) -> Result<i16, Error<I2C::Error>> {
        let raw = self.convert(pair.into())?;
        Ok(decode_signed(raw, self.variant.bit_shift()))
    }

    /// Read the latest result without writing a new configuration.
    ///
    /// Waits for the conversion delay first. In comparator mode this read
    /// also clears a latched ALERT/RDY pin.
    pub fn last_conversion_result(&mut self) -> Result<i16, Error<I2C::Error>> {
        let raw = self.read_conversion_after_delay()?;
        Ok(decode_signed(raw, self.variant.bit_shift()))
    }

    /// Read back and decode the Config register.
    ///
    /// This does not change the driver's gain setting.
    pub fn read_config(&mut self) -> Result<Config, Error<I2C::Error>> {
        let word = self.read_register(Register::Config)?;
        Ok(Config::from_word(word))
    }

    /// Start a single-shot conversion of `mux` and return the raw result.
    fn convert(&mut self, mux: Mux) -> Result<u16, Error<I2C::Error>> {
        self.write_config(Config::single_shot(mux, self.gain))?;
        self.read_conversion_after_delay()
    }
}
