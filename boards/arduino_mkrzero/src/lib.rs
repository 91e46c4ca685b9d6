// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Board definition for the Arduino MKR Zero
//!
//! - <https://docs.arduino.cc/hardware/mkr-zero>

#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

use board_config::{BoardPins, BusAssignment, I2cPins, PinError, SpiPins, UartPins};
use samd21::gpio::{self, PinId};
use samd21::Samd21;

/// Name printed on the board.
pub const BOARD_NAME: &str = "Arduino MKR Zero";
/// Microcontroller on the board.
pub const MCU_NAME: &str = "samd21g18";

/// Default I2C bus, on the SDA/SCL header pins.
pub const DEFAULT_I2C_BUS: I2cPins<PinId> = I2cPins {
    scl: PinId::PA09,
    sda: PinId::PA08,
};

/// Default SPI bus, on the SCK/MOSI/MISO header pins.
pub const DEFAULT_SPI_BUS: SpiPins<PinId> = SpiPins {
    sck: PinId::PA17,
    mosi: PinId::PA16,
    miso: PinId::PA19,
};

/// Default UART bus, on the RX/TX header pins.
pub const DEFAULT_UART_BUS: UartPins<PinId> = UartPins {
    rx: PinId::PB23,
    tx: PinId::PB22,
};

/// USB is always used internally so skip the pin objects for it.
pub const IGNORED_PINS: [PinId; 2] = [PinId::PA24, PinId::PA25];

/// The complete pin map of the board.
pub const BOARD: BoardPins<PinId> = BoardPins {
    board_name: BOARD_NAME,
    mcu_name: MCU_NAME,
    i2c: DEFAULT_I2C_BUS,
    spi: DEFAULT_SPI_BUS,
    uart: DEFAULT_UART_BUS,
    ignored: &IGNORED_PINS,
};

const _: () = assert!(gpio::contains_all(&IGNORED_PINS, &gpio::USB_PINS));
const _: () = assert!(gpio::contains_all(
    &gpio::PINS,
    &[
        DEFAULT_I2C_BUS.scl,
        DEFAULT_I2C_BUS.sda,
        DEFAULT_SPI_BUS.sck,
        DEFAULT_SPI_BUS.mosi,
        DEFAULT_SPI_BUS.miso,
        DEFAULT_UART_BUS.rx,
        DEFAULT_UART_BUS.tx,
    ]
));

/// Check the pin map against the SAMD21 and resolve the SERCOM instance of
/// each default bus.
pub fn verify() -> Result<BusAssignment, PinError<PinId>> {
    board_config::verify::<Samd21>(&BOARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_config::{ChipPins, Peripheral};
    use std::vec::Vec;

    fn sercom(instance: u8) -> Peripheral {
        Peripheral {
            name: "SERCOM",
            instance,
        }
    }

    #[test]
    fn default_buses_resolve() {
        assert_eq!(
            Ok(BusAssignment {
                i2c: sercom(0),
                spi: sercom(1),
                uart: sercom(5),
            }),
            verify()
        );
    }

    #[test]
    fn usb_pins_are_not_user_pins() {
        let pins: Vec<PinId> = BOARD.user_pins(Samd21::PINS).collect();
        assert_eq!(Samd21::PINS.len() - 2, pins.len());
        assert!(!pins.contains(&PinId::PA24));
        assert!(!pins.contains(&PinId::PA25));
        assert!(pins.contains(&PinId::PA23));
        assert!(pins.contains(&PinId::PA27));
    }

    #[test]
    fn forgetting_a_usb_pin_is_caught() {
        let board = BoardPins {
            ignored: &[PinId::PA24],
            ..BOARD
        };
        assert_eq!(
            Err(PinError::FixedFunctionNotIgnored(PinId::PA25)),
            board_config::verify::<Samd21>(&board)
        );
    }
}
