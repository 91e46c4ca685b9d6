// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! STM32F446 pin identifiers.
//!
//! Pins are numbered `port << 4 | number`, one GPIO port per 16 pins. Names
//! follow the `PA00` convention; [fmt::Display] prints the datasheet form
//! (`PA0`).

use core::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PortId {
    A = 0b0000,
    B = 0b0001,
    C = 0b0010,
    D = 0b0011,
    E = 0b0100,
    F = 0b0101,
    G = 0b0110,
    H = 0b0111,
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortId::A => write!(f, "A"),
            PortId::B => write!(f, "B"),
            PortId::C => write!(f, "C"),
            PortId::D => write!(f, "D"),
            PortId::E => write!(f, "E"),
            PortId::F => write!(f, "F"),
            PortId::G => write!(f, "G"),
            PortId::H => write!(f, "H"),
        }
    }
}

/// Name of the GPIO pins
#[rustfmt::skip]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PinId {
    PA00 = 0b0000_0000,
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
    PB00 = 0b0001_0000,
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
    PC00 = 0b0010_0000,
    PC01,
    PC02,
    PC03,
    PC04,
    PC05,
    PC06,
    PC07,
    PC08,
    PC09,
    PC10,
    PC11,
    PC12,
    PC13,
    PC14,
    PC15,
    PD00 = 0b0011_0000,
    PD01,
    PD02,
    PD03,
    PD04,
    PD05,
    PD06,
    PD07,
    PD08,
    PD09,
    PD10,
    PD11,
    PD12,
    PD13,
    PD14,
    PD15,
    PE00 = 0b0100_0000,
    PE01,
    PE02,
    PE03,
    PE04,
    PE05,
    PE06,
    PE07,
    PE08,
    PE09,
    PE10,
    PE11,
    PE12,
    PE13,
    PE14,
    PE15,
    PF00 = 0b0101_0000,
    PF01,
    PF02,
    PF03,
    PF04,
    PF05,
    PF06,
    PF07,
    PF08,
    PF09,
    PF10,
    PF11,
    PF12,
    PF13,
    PF14,
    PF15,
    PG00 = 0b0110_0000,
    PG01,
    PG02,
    PG03,
    PG04,
    PG05,
    PG06,
    PG07,
    PG08,
    PG09,
    PG10,
    PG11,
    PG12,
    PG13,
    PG14,
    PG15,
    PH00 = 0b0111_0000,
    PH01,
    PH02,
    PH03,
    PH04,
    PH05,
    PH06,
    PH07,
    PH08,
    PH09,
    PH10,
    PH11,
    PH12,
    PH13,
    PH14,
    PH15,
}

impl PinId {
    pub const fn port(self) -> PortId {
        match (self as u8) >> 4 {
            0b0000 => PortId::A,
            0b0001 => PortId::B,
            0b0010 => PortId::C,
            0b0011 => PortId::D,
            0b0100 => PortId::E,
            0b0101 => PortId::F,
            0b0110 => PortId::G,
            _ => PortId::H,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8 & 0b1111
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port(), self.number())
    }
}

/// Pins bonded out on the LQFP64 package, in port order.
pub const PINS: [PinId; 51] = [
    PinId::PA00, PinId::PA01, PinId::PA02, PinId::PA03, PinId::PA04, PinId::PA05, PinId::PA06,
    PinId::PA07, PinId::PA08, PinId::PA09, PinId::PA10, PinId::PA11, PinId::PA12, PinId::PA13,
    PinId::PA14, PinId::PA15, PinId::PB00, PinId::PB01, PinId::PB02, PinId::PB03, PinId::PB04,
    PinId::PB05, PinId::PB06, PinId::PB07, PinId::PB08, PinId::PB09, PinId::PB10, PinId::PB11,
    PinId::PB12, PinId::PB13, PinId::PB14, PinId::PB15, PinId::PC00, PinId::PC01, PinId::PC02,
    PinId::PC03, PinId::PC04, PinId::PC05, PinId::PC06, PinId::PC07, PinId::PC08, PinId::PC09,
    PinId::PC10, PinId::PC11, PinId::PC12, PinId::PC13, PinId::PC14, PinId::PC15, PinId::PD02,
    PinId::PH00, PinId::PH01,
];

/// USB OTG FS D- and D+
pub const USB_PINS: [PinId; 2] = [PinId::PA11, PinId::PA12];

pub const fn contains(set: &[PinId], pin: PinId) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] as u8 == pin as u8 {
            return true;
        }
        i += 1;
    }
    false
}

/// Whether every pin of `pins` is in `set`.
pub const fn contains_all(set: &[PinId], pins: &[PinId]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        if !contains(set, pins[i]) {
            return false;
        }
        i += 1;
    }
    true
}
