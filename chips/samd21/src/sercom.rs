// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SERCOM pad routing for the SAMD21.
//!
//! Every serial bus on the SAMD21 is a SERCOM instance with four pads. A pin
//! reaches a pad through peripheral function C (SERCOM) or D (SERCOM-ALT). The
//! role each pad plays is fixed per bus mode:
//!
//! + I2C: SDA on PAD0 and SCL on PAD1
//! + SPI controller: MOSI/SCK on one of the DOPO layouts, MISO on any other pad
//! + USART: TX on PAD0 or PAD2, RX on any other pad
//!
//! This module only answers which SERCOM instance and pad layout a set of pins
//! maps to. It does not touch the PORT or SERCOM registers. [^doc_ref]
//!
//! [^doc_ref]: See 7.1 (I/O multiplexing) and 26.6.2, 27.6.2, 28.6.2 in the
//! datasheet.

use crate::gpio::PinId;

/// Number of SERCOM instances on the SAMD21G.
pub const SERCOM_COUNT: u8 = 6;

/// Peripheral function a pin reaches a SERCOM pad through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mux {
    /// Function C, SERCOM
    C,
    /// Function D, SERCOM-ALT
    D,
}

/// One SERCOM pad reachable from a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadFunction {
    pub sercom: u8,
    pub pad: u8,
    pub mux: Mux,
}

const fn c(sercom: u8, pad: u8) -> PadFunction {
    PadFunction {
        sercom,
        pad,
        mux: Mux::C,
    }
}

const fn d(sercom: u8, pad: u8) -> PadFunction {
    PadFunction {
        sercom,
        pad,
        mux: Mux::D,
    }
}

/// SERCOM pads a pin can be routed to, function C first.
pub fn pad_functions(pin: PinId) -> &'static [PadFunction] {
    match pin {
        PinId::PA00 => const { &[d(1, 0)] },
        PinId::PA01 => const { &[d(1, 1)] },
        PinId::PA04 => const { &[d(0, 0)] },
        PinId::PA05 => const { &[d(0, 1)] },
        PinId::PA06 => const { &[d(0, 2)] },
        PinId::PA07 => const { &[d(0, 3)] },
        PinId::PA08 => const { &[c(0, 0), d(2, 0)] },
        PinId::PA09 => const { &[c(0, 1), d(2, 1)] },
        PinId::PA10 => const { &[c(0, 2), d(2, 2)] },
        PinId::PA11 => const { &[c(0, 3), d(2, 3)] },
        PinId::PA12 => const { &[c(2, 0), d(4, 0)] },
        PinId::PA13 => const { &[c(2, 1), d(4, 1)] },
        PinId::PA14 => const { &[c(2, 2), d(4, 2)] },
        PinId::PA15 => const { &[c(2, 3), d(4, 3)] },
        PinId::PA16 => const { &[c(1, 0), d(3, 0)] },
        PinId::PA17 => const { &[c(1, 1), d(3, 1)] },
        PinId::PA18 => const { &[c(1, 2), d(3, 2)] },
        PinId::PA19 => const { &[c(1, 3), d(3, 3)] },
        PinId::PA20 => const { &[c(5, 2), d(3, 2)] },
        PinId::PA21 => const { &[c(5, 3), d(3, 3)] },
        PinId::PA22 => const { &[c(3, 0), d(5, 0)] },
        PinId::PA23 => const { &[c(3, 1), d(5, 1)] },
        PinId::PA24 => const { &[c(3, 2), d(5, 2)] },
        PinId::PA25 => const { &[c(3, 3), d(5, 3)] },
        PinId::PA30 => const { &[d(1, 2)] },
        PinId::PA31 => const { &[d(1, 3)] },
        PinId::PB02 => const { &[d(5, 0)] },
        PinId::PB03 => const { &[d(5, 1)] },
        PinId::PB08 => const { &[d(4, 0)] },
        PinId::PB09 => const { &[d(4, 1)] },
        PinId::PB10 => const { &[d(4, 2)] },
        PinId::PB11 => const { &[d(4, 3)] },
        PinId::PB12 => const { &[c(4, 0)] },
        PinId::PB13 => const { &[c(4, 1)] },
        PinId::PB14 => const { &[c(4, 2)] },
        PinId::PB15 => const { &[c(4, 3)] },
        PinId::PB16 => const { &[c(5, 0)] },
        PinId::PB17 => const { &[c(5, 1)] },
        PinId::PB22 => const { &[d(5, 2)] },
        PinId::PB23 => const { &[d(5, 3)] },
        PinId::PB30 => const { &[d(5, 0)] },
        PinId::PB31 => const { &[d(5, 1)] },
        _ => &[],
    }
}

/// The pad `pin` reaches on the given SERCOM instance, if any.
pub fn pad_on(pin: PinId, sercom: u8) -> Option<PadFunction> {
    pad_functions(pin)
        .iter()
        .copied()
        .find(|function| function.sercom == sercom)
}

/// Pins with the I2C-capable pad drivers.
pub const I2C_PINS: [PinId; 14] = [
    PinId::PA08,
    PinId::PA09,
    PinId::PA12,
    PinId::PA13,
    PinId::PA16,
    PinId::PA17,
    PinId::PA22,
    PinId::PA23,
    PinId::PB12,
    PinId::PB13,
    PinId::PB16,
    PinId::PB17,
    PinId::PB30,
    PinId::PB31,
];

/// Data out and clock pads of a SPI controller, indexed by CTRLA.DOPO.
pub const SPI_DOPO: [(u8, u8); 4] = [(0, 1), (2, 3), (3, 1), (0, 3)];

/// SPI controller pad layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpiPinout {
    pub sercom: u8,
    /// CTRLA.DOPO
    pub dopo: u8,
    /// CTRLA.DIPO, the MISO pad
    pub dipo: u8,
}

/// USART pad layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsartPinout {
    pub sercom: u8,
    /// CTRLA.TXPO
    pub txpo: u8,
    /// CTRLA.RXPO, the RX pad
    pub rxpo: u8,
}

/// The first SERCOM instance that can run I2C on these pins.
pub fn i2c_sercom(scl: PinId, sda: PinId) -> Option<u8> {
    if !I2C_PINS.contains(&scl) || !I2C_PINS.contains(&sda) {
        return None;
    }
    (0..SERCOM_COUNT).find(|&sercom| match (pad_on(sda, sercom), pad_on(scl, sercom)) {
        (Some(sda), Some(scl)) => sda.pad == 0 && scl.pad == 1,
        _ => false,
    })
}

/// The first SERCOM instance and pad layout that can run a SPI controller on
/// these pins.
pub fn spi_pinout(sck: PinId, mosi: PinId, miso: PinId) -> Option<SpiPinout> {
    (0..SERCOM_COUNT).find_map(|sercom| {
        let sck = pad_on(sck, sercom)?.pad;
        let mosi = pad_on(mosi, sercom)?.pad;
        let miso = pad_on(miso, sercom)?.pad;
        if miso == mosi || miso == sck {
            return None;
        }
        let dopo = SPI_DOPO
            .iter()
            .position(|&layout| layout == (mosi, sck))?;
        Some(SpiPinout {
            sercom,
            dopo: dopo as u8,
            dipo: miso,
        })
    })
}

/// The first SERCOM instance and pad layout that can run a USART on these
/// pins.
pub fn usart_pinout(rx: PinId, tx: PinId) -> Option<UsartPinout> {
    (0..SERCOM_COUNT).find_map(|sercom| {
        let tx = pad_on(tx, sercom)?.pad;
        let rx = pad_on(rx, sercom)?.pad;
        let txpo = match tx {
            0 => 0,
            2 => 1,
            _ => return None,
        };
        if rx == tx {
            return None;
        }
        Some(UsartPinout {
            sercom,
            txpo,
            rxpo: rx,
        })
    })
}
