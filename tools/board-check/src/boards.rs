// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! The boards known to the tool.

use board_config::{BoardPins, BusAssignment, ChipPins, Role};
use clap::ValueEnum;
use samd21::Samd21;
use stm32f446re::clocks::ClockConfig;
use stm32f446re::Stm32f446re;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Board {
    #[value(name = "arduino-mkrzero")]
    ArduinoMkrzero,
    #[value(name = "nucleo-f446re")]
    NucleoF446re,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::ArduinoMkrzero, Board::NucleoF446re];

    /// Name used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Board::ArduinoMkrzero => "arduino-mkrzero",
            Board::NucleoF446re => "nucleo-f446re",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Board::ArduinoMkrzero => arduino_mkrzero::BOARD_NAME,
            Board::NucleoF446re => nucleo_f446re::BOARD_NAME,
        }
    }

    pub fn mcu(self) -> &'static str {
        match self {
            Board::ArduinoMkrzero => arduino_mkrzero::MCU_NAME,
            Board::NucleoF446re => nucleo_f446re::MCU_NAME,
        }
    }

    pub fn pins(self) -> PinReport {
        match self {
            Board::ArduinoMkrzero => PinReport::new::<Samd21>(&arduino_mkrzero::BOARD),
            Board::NucleoF446re => PinReport::new::<Stm32f446re>(&nucleo_f446re::BOARD),
        }
    }

    /// The board's clock tree, for boards whose chip has one to configure.
    pub fn clocks(self) -> Option<ClockConfig> {
        match self {
            Board::ArduinoMkrzero => None,
            Board::NucleoF446re => Some(nucleo_f446re::CLOCKS),
        }
    }
}

/// A board pin map with pins rendered to text, independent of the chip type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinReport {
    pub board_name: &'static str,
    pub mcu_name: &'static str,
    pub roles: Vec<(Role, String)>,
    pub ignored: Vec<String>,
    pub user_pins: Vec<String>,
    /// Peripheral instances of the buses, or why the pin map is invalid
    pub buses: Result<BusAssignment, String>,
}

impl PinReport {
    pub fn new<C: ChipPins>(board: &BoardPins<C::Pin>) -> Self {
        PinReport {
            board_name: board.board_name,
            mcu_name: board.mcu_name,
            roles: board
                .roles()
                .iter()
                .map(|(role, pin)| (*role, pin.to_string()))
                .collect(),
            ignored: board.ignored.iter().map(ToString::to_string).collect(),
            user_pins: board
                .user_pins(C::PINS)
                .map(|pin| pin.to_string())
                .collect(),
            buses: board_config::verify::<C>(board).map_err(|error| error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_ids_match_clap_names() {
        for board in Board::ALL {
            assert_eq!(
                Some(board),
                Board::from_str(board.id(), false).ok(),
                "{}",
                board.id()
            );
        }
    }

    #[test]
    fn pin_reports() {
        let report = Board::ArduinoMkrzero.pins();
        assert_eq!("Arduino MKR Zero", report.board_name);
        assert_eq!((Role::I2cScl, "PA09".to_string()), report.roles[0]);
        assert_eq!(vec!["PA24", "PA25"], report.ignored);
        assert!(!report.user_pins.contains(&"PA24".to_string()));
        assert!(report.buses.is_ok());

        let report = Board::NucleoF446re.pins();
        assert_eq!((Role::UartTx, "PA2".to_string()), report.roles[6]);
        assert!(report.buses.is_ok());
        assert!(Board::NucleoF446re.clocks().is_some());
        assert!(Board::ArduinoMkrzero.clocks().is_none());
    }
}
