// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Checks that a board pin map is consistent with its chip.

use log::debug;

use crate::bus::{BoardPins, Bus};
use crate::chip::{ChipPins, Peripheral};
use crate::error::PinError;

/// Peripheral instances the default buses resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusAssignment {
    pub i2c: Peripheral,
    pub spi: Peripheral,
    pub uart: Peripheral,
}

/// Verify a board pin map against chip `C`.
///
/// The checks run in this order and the first failure is returned:
///
/// + every bus pin and every ignored pin exists on the package
/// + every fixed-function pin of the chip is ignored
/// + no bus pin is ignored
/// + no pin is assigned to two roles
/// + each bus maps onto a single peripheral instance
pub fn verify<C: ChipPins>(board: &BoardPins<C::Pin>) -> Result<BusAssignment, PinError<C::Pin>> {
    let roles = board.roles();

    for (role, pin) in roles {
        if !C::PINS.contains(&pin) {
            return Err(PinError::UnknownBusPin { role, pin });
        }
    }
    if let Some(&pin) = board.ignored.iter().find(|pin| !C::PINS.contains(*pin)) {
        return Err(PinError::UnknownIgnoredPin(pin));
    }

    if let Some(&pin) = C::FIXED_FUNCTION_PINS
        .iter()
        .find(|pin| !board.is_ignored(**pin))
    {
        return Err(PinError::FixedFunctionNotIgnored(pin));
    }

    for (role, pin) in roles {
        if board.is_ignored(pin) {
            return Err(PinError::IgnoredBusPin { role, pin });
        }
    }

    for (index, (first, pin)) in roles.iter().enumerate() {
        if let Some((second, _)) = roles[index + 1..].iter().find(|(_, other)| other == pin) {
            return Err(PinError::DuplicatePin {
                first: *first,
                second: *second,
                pin: *pin,
            });
        }
    }

    let i2c = C::i2c_peripheral(&board.i2c).ok_or(PinError::NoPeripheral(Bus::I2c))?;
    let spi = C::spi_peripheral(&board.spi).ok_or(PinError::NoPeripheral(Bus::Spi))?;
    let uart = C::uart_peripheral(&board.uart).ok_or(PinError::NoPeripheral(Bus::Uart))?;

    debug!(
        "{} ({}): I2C on {}, SPI on {}, UART on {}",
        board.board_name,
        C::NAME,
        i2c,
        spi,
        uart
    );

    Ok(BusAssignment { i2c, spi, uart })
}
