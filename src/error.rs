use std::fmt;

/// Wrapper for problems when communicating with the ADS1x15.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug)]
pub enum Error<E> {
    /// A transfer on the I2C bus failed.
    I2c(E),
    /// The driver has no bus because [`bind`] has not succeeded.
    ///
    /// No bus traffic was attempted.
    ///
    /// [`bind`]: crate::ADS1x15::bind
    NotBound,
}

#[doc(hidden)]
impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C transfer failed: {e:?}"),
            Error::NotBound => write!(f, "device is not bound to an I2C bus"),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for Error<E> {}
