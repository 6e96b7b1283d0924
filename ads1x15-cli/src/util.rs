use ads1x15_hal::constants::{ADDRESS_GND, ADDRESS_VDD};

pub(crate) fn u8_from_hex(value: &str) -> Result<u8, std::num::ParseIntError> {
    let s = if value.to_ascii_lowercase().starts_with("0x") {
        &value[2..]
    } else {
        value
    };
    u8::from_str_radix(s, 16)
}

/// Name the ADDR pin wiring that selects `address`, if it is a known one.
pub(crate) fn addr_pin(address: u8) -> Option<&'static str> {
    match address {
        ADDRESS_GND => Some("GND"),
        ADDRESS_VDD => Some("VDD"),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::{addr_pin, u8_from_hex};

    #[test]
    fn with_and_without_prefix() {
        assert_eq!(u8_from_hex("0x48"), Ok(0x48));
        assert_eq!(u8_from_hex("0X4B"), Ok(0x4B));
        assert_eq!(u8_from_hex("49"), Ok(0x49));
        assert!(u8_from_hex("0x100").is_err());
    }

    #[test]
    fn addr_pin_wiring() {
        assert_eq!(addr_pin(0x48), Some("GND"));
        assert_eq!(addr_pin(0x49), Some("VDD"));
        assert_eq!(addr_pin(0x4A), None);
    }
}
