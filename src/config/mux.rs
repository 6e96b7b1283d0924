/// Single-ended input channel, measured against GND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// AIN0.
    Ain0,
    /// AIN1.
    Ain1,
    /// AIN2.
    Ain2,
    /// AIN3.
    Ain3,
}

impl Channel {
    /// All four single-ended channels in order.
    pub const ALL: [Channel; 4] = [Channel::Ain0, Channel::Ain1, Channel::Ain2, Channel::Ain3];
}

impl TryFrom<u8> for Channel {
    type Error = u8;

    /// Map a channel number in `0..=3`, returning the number unchanged if it is
    /// out of range.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ain0),
            1 => Ok(Self::Ain1),
            2 => Ok(Self::Ain2),
            3 => Ok(Self::Ain3),
            n => Err(n),
        }
    }
}

/// One of the two fixed differential input pairs read by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferentialPair {
    /// AIN0 positive, AIN1 negative. Pair selector 0.
    Ain0Ain1,
    /// AIN2 positive, AIN3 negative. Pair selector 1.
    Ain2Ain3,
}

impl TryFrom<u8> for DifferentialPair {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ain0Ain1),
            1 => Ok(Self::Ain2Ain3),
            n => Err(n),
        }
    }
}

/// Input multiplexer selection.
///
/// This covers every MUX\[2:0\] code so that any config word read from the
/// chip can be decoded. The driver itself only selects the single-ended
/// channels and the pairs in [`DifferentialPair`].
///
/// # Datasheet
///
/// See the MUX\[2:0\] field of the Config register (table 8 in the ADS1115
/// datasheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mux {
    /// AIN0 positive, AIN1 negative.
    Diff0_1,
    /// AIN0 positive, AIN3 negative.
    Diff0_3,
    /// AIN1 positive, AIN3 negative.
    Diff1_3,
    /// AIN2 positive, AIN3 negative.
    Diff2_3,
    /// AIN0 against GND.
    Single0,
    /// AIN1 against GND.
    Single1,
    /// AIN2 against GND.
    Single2,
    /// AIN3 against GND.
    Single3,
}

impl From<Channel> for Mux {
    fn from(value: Channel) -> Self {
        match value {
            Channel::Ain0 => Mux::Single0,
            Channel::Ain1 => Mux::Single1,
            Channel::Ain2 => Mux::Single2,
            Channel::Ain3 => Mux::Single3,
        }
    }
}

impl From<DifferentialPair> for Mux {
    fn from(value: DifferentialPair) -> Self {
        match value {
            DifferentialPair::Ain0Ain1 => Mux::Diff0_1,
            DifferentialPair::Ain2Ain3 => Mux::Diff2_3,
        }
    }
}

impl From<u8> for Mux {
    fn from(value: u8) -> Self {
        assert!(value <= 0b111, "Incorrect use of the from constructor.");
        match value {
            0b000 => Self::Diff0_1,
            0b001 => Self::Diff0_3,
            0b010 => Self::Diff1_3,
            0b011 => Self::Diff2_3,
            0b100 => Self::Single0,
            0b101 => Self::Single1,
            0b110 => Self::Single2,
            0b111 => Self::Single3,
            _ => unreachable!(),
        }
    }
}

impl From<Mux> for u8 {
    fn from(value: Mux) -> Self {
        match value {
            Mux::Diff0_1 => 0b000,
            Mux::Diff0_3 => 0b001,
            Mux::Diff1_3 => 0b010,
            Mux::Diff2_3 => 0b011,
            Mux::Single0 => 0b100,
            Mux::Single1 => 0b101,
            Mux::Single2 => 0b110,
            Mux::Single3 => 0b111,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn channel_numbers() {
        for (n, channel) in Channel::ALL.into_iter().enumerate() {
            assert_eq!(Channel::try_from(n as u8), Ok(channel));
        }
        assert_eq!(Channel::try_from(4), Err(4));
        assert_eq!(Channel::try_from(255), Err(255));
    }

    #[test]
    fn pair_selectors() {
        assert_eq!(DifferentialPair::try_from(0), Ok(DifferentialPair::Ain0Ain1));
        assert_eq!(DifferentialPair::try_from(1), Ok(DifferentialPair::Ain2Ain3));
        assert_eq!(DifferentialPair::try_from(2), Err(2));
    }

    #[test]
    fn single_ended_codes_are_ordered_and_distinct() {
        let codes: Vec<u8> = Channel::ALL.map(|c| u8::from(Mux::from(c))).to_vec();
        assert_eq!(codes, [0b100, 0b101, 0b110, 0b111]);
    }

    #[test]
    fn pairs_do_not_share_codes_with_channels() {
        let pair_codes = [DifferentialPair::Ain0Ain1, DifferentialPair::Ain2Ain3]
            .map(|p| u8::from(Mux::from(p)));
        assert_eq!(pair_codes, [0b000, 0b011]);
        for channel in Channel::ALL {
            assert!(!pair_codes.contains(&u8::from(Mux::from(channel))));
        }
    }

    #[test]
    fn codes_round_trip() {
        for code in 0..=0b111u8 {
            assert_eq!(u8::from(Mux::from(code)), code);
        }
    }
}
