//! Register reads and writes over I2C.
//!
//! Every register is 16 bits wide and transferred most significant byte
//! first. The register is selected by a pointer byte written before the data.
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::constants::{POINTER_CONVERSION, POINTER_SETTLE_MICROS};
use crate::registers::Register;

/// Write `value` to `register`.
///
/// The pointer byte, high byte and low byte go out in a single bus write,
/// with no pause between the pointer and the value. The chip only latches a
/// register write whose three bytes arrive in one transaction, so they are
/// never split into separate writes.
pub(crate) fn write_register<I2C: I2c>(
    i2c: &mut I2C,
    address: SevenBitAddress,
    register: Register,
    value: u16,
) -> Result<(), I2C::Error> {
    let [high, low] = value.to_be_bytes();
    log::trace!("write {register:?} <- {value:#06X} @ {address:#04X}");
    i2c.write(address, &[register.into(), high, low])
}

/// Read the 16-bit contents of `register`.
///
/// The conversion pointer is written first, then after a short pause the
/// pointer of the target register, then two bytes are read back.
pub(crate) fn read_register<I2C: I2c, D: DelayNs>(
    i2c: &mut I2C,
    delay: &mut D,
    address: SevenBitAddress,
    register: Register,
) -> Result<u16, I2C::Error> {
    i2c.write(address, &[POINTER_CONVERSION])?;
    delay.delay_us(POINTER_SETTLE_MICROS);
    i2c.write(address, &[register.into()])?;
    let mut buf = [0u8; 2];
    i2c.read(address, &mut buf)?;
    let value = u16::from_be_bytes(buf);
    log::trace!("read {register:?} -> {value:#06X} @ {address:#04X}");
    Ok(value)
}

#[cfg(test)]
mod test {
    use embedded_hal_mock::eh1::delay::{
        CheckedDelay, NoopDelay, Transaction as DelayTransaction,
    };
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::*;

    const ADDRESS: u8 = 0x48;

    #[test]
    fn write_is_pointer_then_big_endian_value() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(ADDRESS, vec![0x01, 0xC1, 0x83])]);
        write_register(&mut i2c, ADDRESS, Register::Config, 0xC183).unwrap();
        i2c.done();
    }

    #[test]
    fn read_selects_pointer_and_reassembles_big_endian() {
        let mut i2c = I2cMock::new(&[
            I2cTransaction::write(ADDRESS, vec![0x00]),
            I2cTransaction::write(ADDRESS, vec![0x03]),
            I2cTransaction::read(ADDRESS, vec![0x12, 0x34]),
        ]);
        let value =
            read_register(&mut i2c, &mut NoopDelay::new(), ADDRESS, Register::HighThreshold)
                .unwrap();
        assert_eq!(value, 0x1234);
        i2c.done();
    }

    #[test]
    fn read_pauses_between_pointer_writes() {
        let mut i2c = I2cMock::new(&[
            I2cTransaction::write(ADDRESS, vec![0x00]),
            I2cTransaction::write(ADDRESS, vec![0x01]),
            I2cTransaction::read(ADDRESS, vec![0x85, 0x83]),
        ]);
        let mut delay = CheckedDelay::new(&[DelayTransaction::delay_us(10)]);
        let value = read_register(&mut i2c, &mut delay, ADDRESS, Register::Config).unwrap();
        assert_eq!(value, 0x8583);
        i2c.done();
        delay.done();
    }

    #[test]
    fn read_stops_at_failed_pointer_write() {
        use embedded_hal::i2c::ErrorKind;

        let mut i2c = I2cMock::new(&[
            I2cTransaction::write(ADDRESS, vec![0x00]).with_error(ErrorKind::Other)
        ]);
        let result = read_register(&mut i2c, &mut NoopDelay::new(), ADDRESS, Register::Config);
        assert!(result.is_err());
        i2c.done();
    }
}
