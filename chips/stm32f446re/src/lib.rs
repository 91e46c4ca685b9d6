// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! STM32F446RE clock tree and pin capabilities.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

use board_config::{ChipPins, I2cPins, Peripheral, Role, SpiPins, UartPins};

pub mod af;
pub mod chip_specs;
pub mod clocks;
pub mod flash;
pub mod gpio;
pub mod pwr;
pub mod rcc;

use gpio::PinId;

pub enum Stm32f446re {}

impl ChipPins for Stm32f446re {
    type Pin = PinId;

    const NAME: &'static str = "stm32f446re";
    const PINS: &'static [PinId] = &gpio::PINS;
    const FIXED_FUNCTION_PINS: &'static [PinId] = &gpio::USB_PINS;

    fn i2c_peripheral(pins: &I2cPins<PinId>) -> Option<Peripheral> {
        af::find_peripheral(&[(Role::I2cScl, pins.scl), (Role::I2cSda, pins.sda)])
    }

    fn spi_peripheral(pins: &SpiPins<PinId>) -> Option<Peripheral> {
        af::find_peripheral(&[
            (Role::SpiSck, pins.sck),
            (Role::SpiMosi, pins.mosi),
            (Role::SpiMiso, pins.miso),
        ])
    }

    fn uart_peripheral(pins: &UartPins<PinId>) -> Option<Peripheral> {
        af::find_peripheral(&[(Role::UartRx, pins.rx), (Role::UartTx, pins.tx)])
    }
}
