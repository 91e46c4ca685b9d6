// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SAMD21 pin identifiers.
//!
//! Pins are numbered `port << 5 | number`, the layout of the PORT
//! peripheral's group registers. The die has two 32 pin groups; which pins are
//! bonded out depends on the package.

use core::fmt;

/// PORT group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PortId {
    A = 0b0,
    B = 0b1,
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortId::A => write!(f, "A"),
            PortId::B => write!(f, "B"),
        }
    }
}

/// Name of a physical pin of the SAMD21 die.
#[rustfmt::skip]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PinId {
    PA00 = 0b0_00000,
    PA01,
    PA02,
    PA03,
    PA04,
    PA05,
    PA06,
    PA07,
    PA08,
    PA09,
    PA10,
    PA11,
    PA12,
    PA13,
    PA14,
    PA15,
    PA16,
    PA17,
    PA18,
    PA19,
    PA20,
    PA21,
    PA22,
    PA23,
    PA24,
    PA25,
    PA26,
    PA27,
    PA28,
    PA29,
    PA30,
    PA31,
    PB00 = 0b1_00000,
    PB01,
    PB02,
    PB03,
    PB04,
    PB05,
    PB06,
    PB07,
    PB08,
    PB09,
    PB10,
    PB11,
    PB12,
    PB13,
    PB14,
    PB15,
    PB16,
    PB17,
    PB18,
    PB19,
    PB20,
    PB21,
    PB22,
    PB23,
    PB24,
    PB25,
    PB26,
    PB27,
    PB28,
    PB29,
    PB30,
    PB31,
}

impl PinId {
    pub const fn port(self) -> PortId {
        match self as u8 >> 5 {
            0 => PortId::A,
            _ => PortId::B,
        }
    }

    /// Pin number within its port, 0 to 31.
    pub const fn number(self) -> u8 {
        self as u8 & 0b11111
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{:02}", self.port(), self.number())
    }
}

/// Pins bonded out on the 48 pin SAMD21G package.
#[rustfmt::skip]
pub const PINS: [PinId; 38] = [
    PinId::PA00, PinId::PA01, PinId::PA02, PinId::PA03, PinId::PA04, PinId::PA05,
    PinId::PA06, PinId::PA07, PinId::PA08, PinId::PA09, PinId::PA10, PinId::PA11,
    PinId::PA12, PinId::PA13, PinId::PA14, PinId::PA15, PinId::PA16, PinId::PA17,
    PinId::PA18, PinId::PA19, PinId::PA20, PinId::PA21, PinId::PA22, PinId::PA23,
    PinId::PA24, PinId::PA25, PinId::PA27, PinId::PA28, PinId::PA30, PinId::PA31,
    PinId::PB02, PinId::PB03, PinId::PB08, PinId::PB09, PinId::PB10, PinId::PB11,
    PinId::PB22, PinId::PB23,
];

/// USB D- and D+. The USB peripheral owns them whenever it is enabled.
pub const USB_PINS: [PinId; 2] = [PinId::PA24, PinId::PA25];

/// Whether `pin` is in `set`. Usable in constant expressions.
pub const fn contains(set: &[PinId], pin: PinId) -> bool {
    let mut index = 0;
    while index < set.len() {
        if set[index] as u8 == pin as u8 {
            return true;
        }
        index += 1;
    }
    false
}

/// Whether every pin of `pins` is in `set`. Usable in constant expressions.
pub const fn contains_all(set: &[PinId], pins: &[PinId]) -> bool {
    let mut index = 0;
    while index < pins.len() {
        if !contains(set, pins[index]) {
            return false;
        }
        index += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn pin_encoding() {
        assert_eq!(PortId::A, PinId::PA08.port());
        assert_eq!(8, PinId::PA08.number());
        assert_eq!(PortId::B, PinId::PB23.port());
        assert_eq!(23, PinId::PB23.number());
        assert_eq!(0b1_00000, PinId::PB00 as u8);
        assert_eq!(63, PinId::PB31 as u8);
    }

    #[test]
    fn pin_names() {
        assert_eq!("PA08", PinId::PA08.to_string());
        assert_eq!("PB22", PinId::PB22.to_string());
    }

    #[test]
    fn package_pins() {
        assert!(contains(&PINS, PinId::PA25));
        assert!(contains(&PINS, PinId::PB23));
        // Not bonded out on the G package
        assert!(!contains(&PINS, PinId::PA26));
        assert!(!contains(&PINS, PinId::PB12));
        assert!(contains_all(&PINS, &USB_PINS));
        assert!(PINS.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
