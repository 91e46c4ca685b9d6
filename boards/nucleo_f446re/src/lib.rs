// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Board definition for the Nucleo-F446RE development board
//!
//! - <https://www.st.com/en/evaluation-tools/nucleo-f446re.html>
//!
//! The HSE input is driven by the 8MHz MCO output of the on-board ST-LINK, so
//! the oscillator runs in bypass mode. Every other clock parameter keeps the
//! chip default.

#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

use board_config::{BoardPins, BusAssignment, I2cPins, PinError, SpiPins, UartPins};
use stm32f446re::clocks::ClockConfig;
use stm32f446re::gpio::{self, PinId};
use stm32f446re::rcc::HseMode;
use stm32f446re::Stm32f446re;

/// Name printed on the board.
pub const BOARD_NAME: &str = "NUCLEO-F446RE";
/// Microcontroller on the board.
pub const MCU_NAME: &str = "stm32f446re";

/// I2C1, on the Arduino D15/D14 header pins.
pub const DEFAULT_I2C_BUS: I2cPins<PinId> = I2cPins {
    scl: PinId::PB08,
    sda: PinId::PB09,
};

/// SPI1, on the Arduino D13/D11/D12 header pins.
pub const DEFAULT_SPI_BUS: SpiPins<PinId> = SpiPins {
    sck: PinId::PA05,
    mosi: PinId::PA07,
    miso: PinId::PA06,
};

/// USART2, wired to the ST-LINK virtual COM port.
pub const DEFAULT_UART_BUS: UartPins<PinId> = UartPins {
    rx: PinId::PA03,
    tx: PinId::PA02,
};

/// USB OTG FS D-/D+ are reserved for USB.
pub const IGNORED_PINS: [PinId; 2] = [PinId::PA11, PinId::PA12];

/// The complete pin map of the board.
pub const BOARD: BoardPins<PinId> = BoardPins {
    board_name: BOARD_NAME,
    mcu_name: MCU_NAME,
    i2c: DEFAULT_I2C_BUS,
    spi: DEFAULT_SPI_BUS,
    uart: DEFAULT_UART_BUS,
    ignored: &IGNORED_PINS,
};

/// Clock tree of the board.
pub const CLOCKS: ClockConfig = ClockConfig::DEFAULT.with_hse_mode(HseMode::Bypass);

const _: () = assert!(gpio::contains_all(&IGNORED_PINS, &gpio::USB_PINS));
const _: () = assert!(gpio::contains_all(&gpio::PINS, &IGNORED_PINS));
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
const _: () = assert!(CLOCKS.compute().is_ok());

/// Check the pin map against the STM32F446RE and resolve the peripheral
/// instance of each default bus.
pub fn verify() -> Result<BusAssignment, PinError<PinId>> {
    board_config::verify::<Stm32f446re>(&BOARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_config::Peripheral;

    #[test]
    fn default_buses_resolve() {
        assert_eq!(
            Ok(BusAssignment {
                i2c: Peripheral {
                    name: "I2C",
                    instance: 1,
                },
                spi: Peripheral {
                    name: "SPI",
                    instance: 1,
                },
                uart: Peripheral {
                    name: "USART",
                    instance: 2,
                },
            }),
            verify()
        );
    }

    #[test]
    fn pins_exist_on_the_package() {
        for (role, pin) in BOARD.roles() {
            assert!(gpio::contains(&gpio::PINS, pin), "{} {}", role, pin);
        }
        assert!(gpio::contains_all(&gpio::PINS, &IGNORED_PINS));
        // PC14 is an LQFP64 pin, PD03 is not
        assert!(gpio::contains(&gpio::PINS, PinId::PC14));
        assert!(!gpio::contains(&gpio::PINS, PinId::PD03));
        assert_eq!(gpio::PINS.len() - 2, BOARD.user_pins(&gpio::PINS).count());
    }

    #[test]
    fn clocks_run_at_target_from_bypassed_hse() {
        let tree = CLOCKS.validate().unwrap();
        assert_eq!(168_000_000, tree.sys_clock_hz);
        assert_eq!(48_000_000, tree.pll48_hz);
        assert!(tree.runs_at_target());
        assert_eq!(0x0105_0083, CLOCKS.register_images().rcc_cr);
        assert_eq!(0x2740_5408, CLOCKS.register_images().rcc_pllcfgr);
    }
}
