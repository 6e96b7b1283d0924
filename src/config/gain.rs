/// Programmable gain amplifier setting.
///
/// Each setting fixes the full-scale input range. Variants are named for that
/// range, from widest to narrowest. The last three PGA codes (`0b101`,
/// `0b110` and `0b111`) all select ±0.256V on the chip, and are kept distinct
/// here so a config word read back from the device decodes to the exact code
/// it holds.
///
/// # Datasheet
///
/// See the PGA\[2:0\] field of the Config register (table 8 in the ADS1115
/// datasheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gain {
    /// ±6.144V (gain of 2/3). Inputs remain limited to VDD + 0.3V.
    #[default]
    V6_144,
    /// ±4.096V (gain of 1).
    V4_096,
    /// ±2.048V (gain of 2).
    V2_048,
    /// ±1.024V (gain of 4).
    V1_024,
    /// ±0.512V (gain of 8).
    V0_512,
    /// ±0.256V (gain of 16).
    V0_256,
    /// ±0.256V, PGA code `0b110`.
    V0_256b,
    /// ±0.256V, PGA code `0b111`.
    V0_256c,
}

impl Gain {
    /// Every gain setting, widest range first.
    pub const ALL: [Gain; 8] = [
        Gain::V6_144,
        Gain::V4_096,
        Gain::V2_048,
        Gain::V1_024,
        Gain::V0_512,
        Gain::V0_256,
        Gain::V0_256b,
        Gain::V0_256c,
    ];

    /// Full-scale range in millivolts (the positive half of ±FSR).
    pub fn full_scale_millivolts(&self) -> u16 {
        match self {
            Gain::V6_144 => 6144,
            Gain::V4_096 => 4096,
            Gain::V2_048 => 2048,
            Gain::V1_024 => 1024,
            Gain::V0_512 => 512,
            Gain::V0_256 | Gain::V0_256b | Gain::V0_256c => 256,
        }
    }
}

impl From<u8> for Gain {
    fn from(value: u8) -> Self {
        assert!(value <= 0b111, "Incorrect use of the from constructor.");
        match value {
            0b000 => Self::V6_144,
            0b001 => Self::V4_096,
            0b010 => Self::V2_048,
            0b011 => Self::V1_024,
            0b100 => Self::V0_512,
            0b101 => Self::V0_256,
            0b110 => Self::V0_256b,
            0b111 => Self::V0_256c,
            _ => unreachable!(),
        }
    }
}

impl From<Gain> for u8 {
    fn from(value: Gain) -> Self {
        match value {
            Gain::V6_144 => 0b000,
            Gain::V4_096 => 0b001,
            Gain::V2_048 => 0b010,
            Gain::V1_024 => 0b011,
            Gain::V0_512 => 0b100,
            Gain::V0_256 => 0b101,
            Gain::V0_256b => 0b110,
            Gain::V0_256c => 0b111,
        }
    }
}
