/// Comparator shape (COMP_MODE bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparatorMode {
    /// Assert above the high threshold, release below the low threshold.
    #[default]
    Traditional,
    /// Assert outside the window formed by the two thresholds.
    Window,
}

impl From<bool> for ComparatorMode {
    fn from(value: bool) -> Self {
        if value { Self::Window } else { Self::Traditional }
    }
}

impl From<ComparatorMode> for bool {
    fn from(value: ComparatorMode) -> Self {
        match value {
            ComparatorMode::Window => true,
            ComparatorMode::Traditional => false,
        }
    }
}

/// Level of the ALERT/RDY pin when asserted (COMP_POL bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparatorPolarity {
    /// Pin is pulled low on assertion.
    #[default]
    ActiveLow,
    /// Pin is driven high on assertion.
    ActiveHigh,
}

impl From<bool> for ComparatorPolarity {
    fn from(value: bool) -> Self {
        if value { Self::ActiveHigh } else { Self::ActiveLow }
    }
}

impl From<ComparatorPolarity> for bool {
    fn from(value: ComparatorPolarity) -> Self {
        match value {
            ComparatorPolarity::ActiveHigh => true,
            ComparatorPolarity::ActiveLow => false,
        }
    }
}

/// Whether an asserted ALERT/RDY pin stays asserted (COMP_LAT bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparatorLatch {
    /// Pin follows the comparator.
    #[default]
    NonLatching,
    /// Pin stays asserted until the conversion register is read.
    Latching,
}

impl From<bool> for ComparatorLatch {
    fn from(value: bool) -> Self {
        if value { Self::Latching } else { Self::NonLatching }
    }
}

impl From<ComparatorLatch> for bool {
    fn from(value: ComparatorLatch) -> Self {
        match value {
            ComparatorLatch::Latching => true,
            ComparatorLatch::NonLatching => false,
        }
    }
}

/// Number of successive threshold crossings before ALERT/RDY asserts, or
/// comparator disabled (COMP_QUE\[1:0\]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparatorQueue {
    /// Assert after one conversion past the threshold.
    AfterOne,
    /// Assert after two conversions.
    AfterTwo,
    /// Assert after four conversions.
    AfterFour,
    /// Comparator disabled, ALERT/RDY pin high-impedance.
    #[default]
    Disabled,
}

impl From<u8> for ComparatorQueue {
    fn from(value: u8) -> Self {
        assert!(value <= 0b11, "Incorrect use of the from constructor.");
        match value {
            0b00 => Self::AfterOne,
            0b01 => Self::AfterTwo,
            0b10 => Self::AfterFour,
            0b11 => Self::Disabled,
            _ => unreachable!(),
        }
    }
}

impl From<ComparatorQueue> for u8 {
    fn from(value: ComparatorQueue) -> Self {
        match value {
            ComparatorQueue::AfterOne => 0b00,
            ComparatorQueue::AfterTwo => 0b01,
            ComparatorQueue::AfterFour => 0b10,
            ComparatorQueue::Disabled => 0b11,
        }
    }
}
