use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::ADS1x15;
use crate::config::{Channel, Config};
use crate::error::Error;
use crate::registers::Register;

impl<I2C: I2c, D: DelayNs> ADS1x15<I2C, D> {
    /// Put the chip in continuous mode on a single-ended channel with the
    /// comparator armed.
    ///
    /// The ALERT/RDY pin is pulled low after the first conversion above
    /// `threshold` and stays low until the conversion register is read (see
    /// [`ADS1x15::last_conversion_result`]). `threshold` is in the same units as
    /// a conversion result and is shifted up into place for the ADS1015.
    ///
    /// `channel` must be in `0..=3`. Any other value does nothing and returns
    /// `Ok(())` without any bus traffic.
    ///
    /// Nothing is read back and the call does not wait.
    pub fn start_comparator(&mut self, channel: u8, threshold: i16) -> Result<(), Error<I2C::Error>> {
        let Ok(channel) = Channel::try_from(channel) else {
            return Ok(());
        };
        let threshold = (threshold << self.variant.bit_shift()) as u16;
        self.write_register(Register::HighThreshold, threshold)?;
        self.write_config(Config::comparator(channel, self.gain))
    }
}
