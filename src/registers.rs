//! Register pointers.
use crate::constants::{
    POINTER_CONFIG, POINTER_CONVERSION, POINTER_HIGH_THRESHOLD, POINTER_LOW_THRESHOLD,
};

/// One of the four 16-bit registers addressable through the pointer byte.
///
/// # Datasheet
///
/// See section 9.6 (Register Map) of the ADS1115 datasheet. The ADS1015 uses
/// the same map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Result of the last conversion. Read-only.
    Conversion,
    /// Operating configuration, see [`Config`](crate::config::Config).
    Config,
    /// Comparator low threshold.
    LowThreshold,
    /// Comparator high threshold.
    HighThreshold,
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        match value {
            Register::Conversion => POINTER_CONVERSION,
            Register::Config => POINTER_CONFIG,
            Register::LowThreshold => POINTER_LOW_THRESHOLD,
            Register::HighThreshold => POINTER_HIGH_THRESHOLD,
        }
    }
}
