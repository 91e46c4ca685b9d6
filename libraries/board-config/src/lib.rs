// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip-independent description of a board's default buses.
//!
//! A board names one pin for every signal of its default I2C, SPI and UART
//! buses, plus the pins that generic pin enumeration must skip because an
//! always-on peripheral of the chip owns them. This crate holds that table
//! ([BoardPins]) and the checks that tie it to a chip ([verify]). The chip side
//! is described by the [ChipPins] trait, implemented in each chip crate.
//!
//! Nothing here configures a pin. The tables are consumed by the board
//! initialization code that creates the default peripheral handles.
//!
//! # Usage
//!
//! ```rust,ignore
//! use arduino_mkrzero::BOARD;
//! use samd21::Samd21;
//!
//! let buses = board_config::verify::<Samd21>(&BOARD)?;
//! debug!("default I2C bus on {}", buses.i2c);
//!
//! for pin in BOARD.user_pins(Samd21::PINS) {
//!     /* expose `pin` to user code */
//! }
//! ```

#![no_std]
#![forbid(unsafe_code)]

pub mod bus;
pub mod chip;
pub mod error;
pub mod verify;

#[doc(inline)]
pub use crate::bus::{BoardPins, Bus, I2cPins, Role, SpiPins, UartPins};
#[doc(inline)]
pub use crate::chip::{ChipPins, Peripheral};
#[doc(inline)]
pub use crate::error::PinError;
#[doc(inline)]
pub use crate::verify::{verify, BusAssignment};

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
