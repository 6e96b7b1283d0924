//! Acquiring an I2C bus for a device.
//!
//! The driver does not open buses itself. [`ADS1x15::bind`] asks a [`Connect`]
//! implementation for a bus handle instead, so any `embedded-hal` I2C
//! implementation can be used.
//!
//! [`ADS1x15::bind`]: crate::ADS1x15::bind
use std::fmt::Debug;

use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Source of I2C bus handles.
pub trait Connect {
    /// Bus handle produced on success.
    type Bus: I2c;
    /// Failure to open the bus or to address the target.
    type Error: Debug;

    /// Open a bus handle for talking to the target at `address`.
    fn connect(&mut self, address: SevenBitAddress) -> Result<Self::Bus, Self::Error>;
}

#[cfg(feature = "linux")]
pub use linux::LinuxBus;

#[cfg(feature = "linux")]
mod linux {
    use std::path::PathBuf;

    use embedded_hal::i2c::SevenBitAddress;
    use linux_embedded_hal::I2cdev;
    use linux_embedded_hal::i2cdev::linux::LinuxI2CError;

    use super::Connect;

    /// Linux I2C character device, eg `/dev/i2c-1`.
    ///
    /// The target address is carried in every transfer, so connecting only
    /// opens the device file.
    #[derive(Debug, Clone)]
    pub struct LinuxBus {
        path: PathBuf,
    }

    impl LinuxBus {
        /// Use the bus device at `path`.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl Connect for LinuxBus {
        type Bus = I2cdev;
        type Error = LinuxI2CError;

        fn connect(&mut self, address: SevenBitAddress) -> Result<Self::Bus, Self::Error> {
            log::debug!("opening {} for {address:#04X}", self.path.display());
            I2cdev::new(&self.path)
        }
    }
}
