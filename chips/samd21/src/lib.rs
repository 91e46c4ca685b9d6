// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Pin capabilities of the SAMD21G18 (48 pin package).

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

use board_config::{ChipPins, I2cPins, Peripheral, SpiPins, UartPins};

pub mod gpio;
pub mod sercom;

use gpio::PinId;

pub enum Samd21 {}

const fn sercom(instance: u8) -> Peripheral {
    Peripheral {
        name: "SERCOM",
        instance,
    }
}

impl ChipPins for Samd21 {
    type Pin = PinId;

    const NAME: &'static str = "samd21g18";
    const PINS: &'static [PinId] = &gpio::PINS;
    const FIXED_FUNCTION_PINS: &'static [PinId] = &gpio::USB_PINS;

    fn i2c_peripheral(pins: &I2cPins<PinId>) -> Option<Peripheral> {
        sercom::i2c_sercom(pins.scl, pins.sda).map(sercom)
    }

    fn spi_peripheral(pins: &SpiPins<PinId>) -> Option<Peripheral> {
        sercom::spi_pinout(pins.sck, pins.mosi, pins.miso).map(|pinout| sercom(pinout.sercom))
    }

    fn uart_peripheral(pins: &UartPins<PinId>) -> Option<Peripheral> {
        sercom::usart_pinout(pins.rx, pins.tx).map(|pinout| sercom(pinout.sercom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buses_resolve_to_sercoms() {
        assert_eq!(
            Some(sercom(0)),
            Samd21::i2c_peripheral(&I2cPins {
                scl: PinId::PA09,
                sda: PinId::PA08,
            })
        );
        assert_eq!(
            Some(sercom(5)),
            Samd21::uart_peripheral(&UartPins {
                rx: PinId::PB23,
                tx: PinId::PB22,
            })
        );
        assert_eq!(
            None,
            Samd21::spi_peripheral(&SpiPins {
                sck: PinId::PA16,
                mosi: PinId::PA17,
                miso: PinId::PA19,
            })
        );
    }
}
