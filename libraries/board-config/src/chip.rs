// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Pin capabilities a chip provides to board definitions.

use core::fmt;

use crate::bus::{I2cPins, SpiPins, UartPins};

/// A peripheral instance a default bus resolves to, e.g. `SERCOM2` or `I2C1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Peripheral {
    pub name: &'static str,
    pub instance: u8,
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.instance)
    }
}

/// Pin-level description of a chip package.
///
/// Implemented by an uninhabited type in each chip crate, in the same way the
/// chip specifications are.
pub trait ChipPins {
    /// Pin identifier of the chip.
    type Pin: Copy + Eq + fmt::Debug + fmt::Display + 'static;

    /// Name of the chip, as printed on boards and in reports.
    const NAME: &'static str;

    /// Every pin bonded out on the package, in port order.
    const PINS: &'static [Self::Pin];

    /// Pins claimed by always-on fixed-function peripherals (USB). A board
    /// must ignore all of them.
    const FIXED_FUNCTION_PINS: &'static [Self::Pin];

    /// The peripheral instance able to drive the given I2C pins, if any.
    fn i2c_peripheral(pins: &I2cPins<Self::Pin>) -> Option<Peripheral>;

    /// The peripheral instance able to drive the given SPI pins as a
    /// controller, if any.
    fn spi_peripheral(pins: &SpiPins<Self::Pin>) -> Option<Peripheral>;

    /// The peripheral instance able to drive the given UART pins, if any.
    fn uart_peripheral(pins: &UartPins<Self::Pin>) -> Option<Peripheral>;
}
