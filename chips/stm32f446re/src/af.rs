// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Alternate functions of the serial peripherals on the LQFP64 package.
//!
//! Only the I2C, SPI and U(S)ART signals a board can pick as default bus pins
//! are listed. See table 11 (alternate function mapping) in the datasheet.

use board_config::{Peripheral, Role};

use crate::gpio::PinId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlternateFunction {
    pub pin: PinId,
    pub peripheral: Peripheral,
    pub role: Role,
    /// AFRL/AFRH value selecting this function
    pub af: u8,
}

const fn i2c(number: u8) -> Peripheral {
    Peripheral {
        name: "I2C",
        instance: number,
    }
}

const fn spi(number: u8) -> Peripheral {
    Peripheral {
        name: "SPI",
        instance: number,
    }
}

const fn usart(number: u8) -> Peripheral {
    Peripheral {
        name: "USART",
        instance: number,
    }
}

const fn uart(number: u8) -> Peripheral {
    Peripheral {
        name: "UART",
        instance: number,
    }
}

const fn af(pin: PinId, peripheral: Peripheral, role: Role, af: u8) -> AlternateFunction {
    AlternateFunction {
        pin,
        peripheral,
        role,
        af,
    }
}

#[rustfmt::skip]
pub const ALTERNATE_FUNCTIONS: &[AlternateFunction] = &[
    af(PinId::PB06, i2c(1), Role::I2cScl, 4),
    af(PinId::PB08, i2c(1), Role::I2cScl, 4),
    af(PinId::PB07, i2c(1), Role::I2cSda, 4),
    af(PinId::PB09, i2c(1), Role::I2cSda, 4),
    af(PinId::PB10, i2c(2), Role::I2cScl, 4),
    af(PinId::PB03, i2c(2), Role::I2cSda, 4),
    af(PinId::PC12, i2c(2), Role::I2cSda, 4),
    af(PinId::PA08, i2c(3), Role::I2cScl, 4),
    af(PinId::PC09, i2c(3), Role::I2cSda, 4),
    af(PinId::PB04, i2c(3), Role::I2cSda, 4),

    af(PinId::PA05, spi(1), Role::SpiSck, 5),
    af(PinId::PB03, spi(1), Role::SpiSck, 5),
    af(PinId::PA06, spi(1), Role::SpiMiso, 5),
    af(PinId::PB04, spi(1), Role::SpiMiso, 5),
    af(PinId::PA07, spi(1), Role::SpiMosi, 5),
    af(PinId::PB05, spi(1), Role::SpiMosi, 5),
    af(PinId::PB10, spi(2), Role::SpiSck, 5),
    af(PinId::PB13, spi(2), Role::SpiSck, 5),
    af(PinId::PB14, spi(2), Role::SpiMiso, 5),
    af(PinId::PC02, spi(2), Role::SpiMiso, 5),
    af(PinId::PB15, spi(2), Role::SpiMosi, 5),
    af(PinId::PC03, spi(2), Role::SpiMosi, 5),
    af(PinId::PC10, spi(3), Role::SpiSck, 6),
    af(PinId::PB03, spi(3), Role::SpiSck, 6),
    af(PinId::PC11, spi(3), Role::SpiMiso, 6),
    af(PinId::PB04, spi(3), Role::SpiMiso, 6),
    af(PinId::PC12, spi(3), Role::SpiMosi, 6),
    af(PinId::PB05, spi(3), Role::SpiMosi, 6),

    af(PinId::PA09, usart(1), Role::UartTx, 7),
    af(PinId::PB06, usart(1), Role::UartTx, 7),
    af(PinId::PA10, usart(1), Role::UartRx, 7),
    af(PinId::PB07, usart(1), Role::UartRx, 7),
    af(PinId::PA02, usart(2), Role::UartTx, 7),
    af(PinId::PA03, usart(2), Role::UartRx, 7),
    af(PinId::PB10, usart(3), Role::UartTx, 7),
    af(PinId::PC10, usart(3), Role::UartTx, 7),
    af(PinId::PC05, usart(3), Role::UartRx, 7),
    af(PinId::PC11, usart(3), Role::UartRx, 7),
    af(PinId::PA00, uart(4), Role::UartTx, 8),
    af(PinId::PC10, uart(4), Role::UartTx, 8),
    af(PinId::PA01, uart(4), Role::UartRx, 8),
    af(PinId::PC11, uart(4), Role::UartRx, 8),
    af(PinId::PC12, uart(5), Role::UartTx, 8),
    af(PinId::PD02, uart(5), Role::UartRx, 8),
    af(PinId::PC06, usart(6), Role::UartTx, 8),
    af(PinId::PC07, usart(6), Role::UartRx, 8),
];

/// The alternate function routing `peripheral`'s `role` signal to `pin`.
pub fn lookup(pin: PinId, peripheral: Peripheral, role: Role) -> Option<AlternateFunction> {
    ALTERNATE_FUNCTIONS
        .iter()
        .copied()
        .find(|function| {
            function.pin == pin && function.peripheral == peripheral && function.role == role
        })
}

/// The first peripheral, in table order, that has every `(role, pin)` pair
/// as one of its alternate functions.
pub fn find_peripheral(signals: &[(Role, PinId)]) -> Option<Peripheral> {
    let (first_role, first_pin) = *signals.first()?;
    ALTERNATE_FUNCTIONS
        .iter()
        .filter(|function| function.pin == first_pin && function.role == first_role)
        .map(|function| function.peripheral)
        .find(|&peripheral| {
            signals
                .iter()
                .all(|&(role, pin)| lookup(pin, peripheral, role).is_some())
        })
}
