use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::config::{Config, Gain};
use crate::connect::Connect;
use crate::error::Error;
use crate::registers::Register;
use crate::transport;
use crate::variant::Variant;

mod comparator;
mod conversion;

/// Driver for the ADS1015 and ADS1115.
///
/// # Quick start
///
/// Create the driver with [`ADS1x15::ads1015`] or [`ADS1x15::ads1115`] (no bus
/// traffic happens at this point), then [`bind`] it to a bus. If you already
/// hold an open bus, [`ADS1x15::with_bus`] does both at once.
///
/// [`bind`]: ADS1x15::bind
///
/// # Overview
///
/// Each read writes a single-shot configuration, sleeps for the variant's
/// conversion delay, then reads the conversion register. The calling thread
/// is blocked for the whole sequence. There is no internal locking, so
/// callers sharing a driver between threads must serialise access.
///
/// The gain set with [`ADS1x15::set_gain`] applies from the next configuration
/// write onwards.
///
/// The bus handle is owned by the driver and dropped with it. Use
/// [`ADS1x15::release`] to take it back instead.
#[derive(Debug)]
pub struct ADS1x15<I2C, D> {
    address: SevenBitAddress,
    variant: Variant,
    gain: Gain,
    bus: Option<I2C>,
    delay: D,
}

impl<I2C, D> ADS1x15<I2C, D> {
    ////////////////////////////////////////////////////////////////////////////////
    // Constructors
    ////////////////////////////////////////////////////////////////////////////////

    /// Create an unbound driver for the chip at the 7-bit `address`.
    ///
    /// The gain starts at the widest range, ±6.144V. No bus traffic occurs.
    pub fn new(address: SevenBitAddress, variant: Variant, delay: D) -> Self {
        Self {
            address,
            variant,
            gain: Gain::default(),
            bus: None,
            delay,
        }
    }

    /// Create an unbound driver for an ADS1015 (12-bit).
    pub fn ads1015(address: SevenBitAddress, delay: D) -> Self {
        Self::new(address, Variant::ADS1015, delay)
    }

    /// Create an unbound driver for an ADS1115 (16-bit).
    pub fn ads1115(address: SevenBitAddress, delay: D) -> Self {
        Self::new(address, Variant::ADS1115, delay)
    }

    /// Create a driver that is already bound to `i2c`.
    pub fn with_bus(address: SevenBitAddress, variant: Variant, i2c: I2C, delay: D) -> Self {
        let mut device = Self::new(address, variant, delay);
        device.bus = Some(i2c);
        device
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Bus ownership
    ////////////////////////////////////////////////////////////////////////////////

    /// Acquire a bus handle for this device's address from `connector`.
    ///
    /// On failure the error is logged and returned, and the driver is left
    /// unbound. Later operations return [`Error::NotBound`] without touching
    /// the bus. Binding an already-bound driver replaces (and drops) the
    /// previous handle.
    pub fn bind<C>(&mut self, connector: &mut C) -> Result<(), C::Error>
    where
        C: Connect<Bus = I2C>,
    {
        match connector.connect(self.address) {
            Ok(bus) => {
                log::debug!("bound to {:#04X}", self.address);
                self.bus = Some(bus);
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to bind to {:#04X}: {e:?}", self.address);
                self.bus = None;
                Err(e)
            }
        }
    }

    /// Whether the driver currently holds a bus handle.
    pub fn is_bound(&self) -> bool {
        self.bus.is_some()
    }

    /// Consume the driver and return its bus handle, if bound.
    pub fn release(self) -> Option<I2C> {
        self.bus
    }

    ////////////////////////////////////////////////////////////////////////////////
    // State
    ////////////////////////////////////////////////////////////////////////////////

    /// 7-bit bus address of the chip.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Parameters of the chip variant.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Set the programmable gain used for subsequent conversions.
    pub fn set_gain(&mut self, gain: Gain) {
        log::debug!("gain {:?} -> {gain:?}", self.gain);
        self.gain = gain;
    }

    /// Current programmable gain setting.
    pub fn gain(&self) -> Gain {
        self.gain
    }
}

impl<I2C: I2c, D: DelayNs> ADS1x15<I2C, D> {
    fn bus(&mut self) -> Result<&mut I2C, Error<I2C::Error>> {
        self.bus.as_mut().ok_or(Error::NotBound)
    }

    fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        let address = self.address;
        transport::write_register(self.bus()?, address, register, value)?;
        Ok(())
    }

    fn write_config(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        let word = config.to_word();
        log::debug!("config {word:#06X} {config:?}");
        self.write_register(Register::Config, word)
    }

    fn read_register(&mut self, register: Register) -> Result<u16, Error<I2C::Error>> {
        let Some(bus) = self.bus.as_mut() else {
            return Err(Error::NotBound);
        };
        let value = transport::read_register(bus, &mut self.delay, self.address, register)?;
        Ok(value)
    }

    /// Sleep for the conversion delay, then read the raw conversion register.
    fn read_conversion_after_delay(&mut self) -> Result<u16, Error<I2C::Error>> {
        let Some(bus) = self.bus.as_mut() else {
            return Err(Error::NotBound);
        };
        self.delay.delay_us(self.variant.conversion_delay_us());
        let value =
            transport::read_register(bus, &mut self.delay, self.address, Register::Conversion)?;
        Ok(value)
    }
}
