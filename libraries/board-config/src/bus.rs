// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Default bus pin tables.

use core::fmt;

/// The kinds of default bus a board exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bus {
    I2c,
    Spi,
    Uart,
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bus::I2c => write!(f, "I2C"),
            Bus::Spi => write!(f, "SPI"),
            Bus::Uart => write!(f, "UART"),
        }
    }
}

/// A signal role on one of the default buses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    I2cScl,
    I2cSda,
    SpiSck,
    SpiMosi,
    SpiMiso,
    UartRx,
    UartTx,
}

impl Role {
    /// The bus this role belongs to.
    pub const fn bus(self) -> Bus {
        match self {
            Role::I2cScl | Role::I2cSda => Bus::I2c,
            Role::SpiSck | Role::SpiMosi | Role::SpiMiso => Bus::Spi,
            Role::UartRx | Role::UartTx => Bus::Uart,
        }
    }

    /// Conventional name of the role, as used in board definitions.
    pub const fn name(self) -> &'static str {
        match self {
            Role::I2cScl => "SCL",
            Role::I2cSda => "SDA",
            Role::SpiSck => "SCK",
            Role::SpiMosi => "MOSI",
            Role::SpiMiso => "MISO",
            Role::UartRx => "RX",
            Role::UartTx => "TX",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.bus(), self.name())
    }
}

/// Pins of the default I2C bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cPins<P> {
    pub scl: P,
    pub sda: P,
}

/// Pins of the default SPI bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpiPins<P> {
    pub sck: P,
    pub mosi: P,
    pub miso: P,
}

/// Pins of the default UART bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartPins<P> {
    pub rx: P,
    pub tx: P,
}

/// Number of signal roles across all default buses.
pub const ROLE_COUNT: usize = 7;

/// Pin map of a board: default buses and the pins hidden from enumeration.
///
/// Boards declare this as a `const`, so the whole table is fixed at compile
/// time.
#[derive(Clone, Copy, Debug)]
pub struct BoardPins<P: 'static> {
    /// Human readable board name.
    pub board_name: &'static str,
    /// Name of the microcontroller on the board.
    pub mcu_name: &'static str,
    pub i2c: I2cPins<P>,
    pub spi: SpiPins<P>,
    pub uart: UartPins<P>,
    /// Pins that generic pin enumeration must skip.
    pub ignored: &'static [P],
}

impl<P: Copy + PartialEq> BoardPins<P> {
    /// Every default bus role with its pin, I2C first, then SPI, then UART.
    pub fn roles(&self) -> [(Role, P); ROLE_COUNT] {
        [
            (Role::I2cScl, self.i2c.scl),
            (Role::I2cSda, self.i2c.sda),
            (Role::SpiSck, self.spi.sck),
            (Role::SpiMosi, self.spi.mosi),
            (Role::SpiMiso, self.spi.miso),
            (Role::UartRx, self.uart.rx),
            (Role::UartTx, self.uart.tx),
        ]
    }

    /// The first default bus role assigned to `pin`, if any.
    pub fn role_of(&self, pin: P) -> Option<Role> {
        self.roles()
            .into_iter()
            .find(|(_, assigned)| *assigned == pin)
            .map(|(role, _)| role)
    }

    pub fn is_ignored(&self, pin: P) -> bool {
        self.ignored.contains(&pin)
    }

    /// The pins of `chip_pins` that are exposed to user code, in chip order.
    pub fn user_pins<'a>(&'a self, chip_pins: &'a [P]) -> impl Iterator<Item = P> + 'a {
        chip_pins
            .iter()
            .copied()
            .filter(move |pin| !self.is_ignored(*pin))
    }
}
