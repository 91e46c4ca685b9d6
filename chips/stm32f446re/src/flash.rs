// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! STM32F446 flash access latency.
//!
//! The CPU reads flash in wait states of HCLK. How many are needed depends on
//! the HCLK frequency and on the supply voltage range the board runs at.

use core::fmt;

use tock_registers::{register_bitfields, LocalRegisterCopy};

register_bitfields![u32,
    ACR [
        /// Latency
        LATENCY OFFSET(0) NUMBITS(4) [],
        /// Prefetch enable
        PRFTEN OFFSET(8) NUMBITS(1) [],
        /// Instruction cache enable
        ICEN OFFSET(9) NUMBITS(1) [],
        /// Data cache enable
        DCEN OFFSET(10) NUMBITS(1) [],
        /// Instruction cache reset
        ICRST OFFSET(11) NUMBITS(1) [],
        /// Data cache reset
        DCRST OFFSET(12) NUMBITS(1) []
    ]
];

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FlashLatency {
    Latency0,
    Latency1,
    Latency2,
    Latency3,
    Latency4,
    Latency5,
    Latency6,
    Latency7,
    Latency8,
    Latency9,
    Latency10,
    Latency11,
    Latency12,
    Latency13,
    Latency14,
    Latency15,
}

impl FlashLatency {
    pub const fn wait_states(self) -> u8 {
        self as u8
    }

    pub const fn from_wait_states(wait_states: u8) -> Option<Self> {
        match wait_states {
            0 => Some(FlashLatency::Latency0),
            1 => Some(FlashLatency::Latency1),
            2 => Some(FlashLatency::Latency2),
            3 => Some(FlashLatency::Latency3),
            4 => Some(FlashLatency::Latency4),
            5 => Some(FlashLatency::Latency5),
            6 => Some(FlashLatency::Latency6),
            7 => Some(FlashLatency::Latency7),
            8 => Some(FlashLatency::Latency8),
            9 => Some(FlashLatency::Latency9),
            10 => Some(FlashLatency::Latency10),
            11 => Some(FlashLatency::Latency11),
            12 => Some(FlashLatency::Latency12),
            13 => Some(FlashLatency::Latency13),
            14 => Some(FlashLatency::Latency14),
            15 => Some(FlashLatency::Latency15),
            _ => None,
        }
    }
}

impl TryFrom<usize> for FlashLatency {
    type Error = &'static str;

    fn try_from(item: usize) -> Result<Self, Self::Error> {
        u8::try_from(item)
            .ok()
            .and_then(FlashLatency::from_wait_states)
            .ok_or("Error value for FlashLatency::try_from")
    }
}

impl fmt::Display for FlashLatency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} WS", self.wait_states())
    }
}

/// Supply voltage range of the board. Lower voltages need more wait states
/// for the same HCLK.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SupplyRange {
    /// 2.7 V to 3.6 V
    V27To36,
    /// 2.4 V to 2.7 V
    V24To27,
    /// 2.1 V to 2.4 V
    V21To24,
    /// 1.8 V to 2.1 V
    V18To21,
}

impl SupplyRange {
    /// HCLK frequency each wait state covers.
    pub const fn hz_per_wait_state(self) -> u32 {
        match self {
            SupplyRange::V27To36 => 30_000_000,
            SupplyRange::V24To27 => 24_000_000,
            SupplyRange::V21To24 => 22_000_000,
            SupplyRange::V18To21 => 20_000_000,
        }
    }

    /// Highest HCLK supported in this range, if lower than the chip limit.
    pub const fn hclk_limit_hz(self) -> Option<u32> {
        match self {
            SupplyRange::V18To21 => Some(168_000_000),
            _ => None,
        }
    }
}

impl fmt::Display for SupplyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyRange::V27To36 => write!(f, "2.7-3.6 V"),
            SupplyRange::V24To27 => write!(f, "2.4-2.7 V"),
            SupplyRange::V21To24 => write!(f, "2.1-2.4 V"),
            SupplyRange::V18To21 => write!(f, "1.8-2.1 V"),
        }
    }
}

/// Fewest wait states that allow reading flash at `hclk_hz` in the given
/// supply range.
pub const fn minimum_latency(hclk_hz: u32, supply: SupplyRange) -> FlashLatency {
    let wait_states = hclk_hz.saturating_sub(1) / supply.hz_per_wait_state();
    match FlashLatency::from_wait_states(wait_states as u8) {
        Some(latency) if wait_states <= 15 => latency,
        _ => FlashLatency::Latency15,
    }
}

/// FLASH_ACR value with `latency`, prefetch and both caches enabled.
pub fn acr_image(latency: FlashLatency) -> u32 {
    let mut acr: LocalRegisterCopy<u32, ACR::Register> = LocalRegisterCopy::new(0);
    acr.modify(
        ACR::LATENCY.val(latency.wait_states() as u32)
            + ACR::PRFTEN::SET
            + ACR::ICEN::SET
            + ACR::DCEN::SET,
    );
    acr.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HSI_FREQUENCY_MHZ: u32 = 16;

    fn wait_states_at(frequency_mhz: u32) -> FlashLatency {
        minimum_latency(frequency_mhz * 1_000_000, SupplyRange::V27To36)
    }

    #[test]
    fn wait_states_based_on_frequency() {
        // HSI frequency
        assert_eq!(FlashLatency::Latency0, wait_states_at(HSI_FREQUENCY_MHZ));

        // AHB Ethernet minimal frequency
        assert_eq!(FlashLatency::Latency0, wait_states_at(25));
        assert_eq!(FlashLatency::Latency0, wait_states_at(30));

        // Maximum APB1 frequency
        assert_eq!(FlashLatency::Latency1, wait_states_at(42));
        assert_eq!(FlashLatency::Latency1, wait_states_at(45));
        assert_eq!(FlashLatency::Latency1, wait_states_at(50));

        // Maximum APB2 frequency
        assert_eq!(FlashLatency::Latency2, wait_states_at(84));
        assert_eq!(FlashLatency::Latency2, wait_states_at(90));
        assert_eq!(FlashLatency::Latency3, wait_states_at(96));
        assert_eq!(FlashLatency::Latency3, wait_states_at(100));

        // Maximum CPU frequency without and with over-drive
        assert_eq!(FlashLatency::Latency5, wait_states_at(168));
        assert_eq!(FlashLatency::Latency5, wait_states_at(180));
    }

    #[test]
    fn wait_states_based_on_supply() {
        assert_eq!(
            FlashLatency::Latency7,
            minimum_latency(180_000_000, SupplyRange::V24To27)
        );
        assert_eq!(
            FlashLatency::Latency8,
            minimum_latency(180_000_000, SupplyRange::V21To24)
        );
        assert_eq!(
            FlashLatency::Latency8,
            minimum_latency(168_000_000, SupplyRange::V18To21)
        );
        assert_eq!(Some(168_000_000), SupplyRange::V18To21.hclk_limit_hz());
        assert_eq!(None, SupplyRange::V27To36.hclk_limit_hz());
    }

    #[test]
    fn latency_conversions() {
        assert_eq!(Ok(FlashLatency::Latency15), FlashLatency::try_from(15));
        assert!(FlashLatency::try_from(16).is_err());
        assert_eq!(5, FlashLatency::Latency5.wait_states());
    }

    #[test]
    fn acr_encoding() {
        assert_eq!(0x705, acr_image(FlashLatency::Latency5));
        assert_eq!(0x70F, acr_image(FlashLatency::Latency15));
    }
}
