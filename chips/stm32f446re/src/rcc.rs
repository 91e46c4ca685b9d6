// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset and clock control: divider encodings and register images.
//!
//! Values here are the register encodings of the clock tree settings. The
//! `*_image` functions compute what the clock initialization code writes into
//! each register, starting from the reset value.

use core::fmt;

use tock_registers::{register_bitfields, LocalRegisterCopy};

register_bitfields![u32,
    CR [
        /// Main PLL (PLL) clock ready flag
        PLLRDY OFFSET(25) NUMBITS(1) [],
        /// Main PLL (PLL) enable
        PLLON OFFSET(24) NUMBITS(1) [],
        /// Clock security system enable
        CSSON OFFSET(19) NUMBITS(1) [],
        /// HSE clock bypass
        HSEBYP OFFSET(18) NUMBITS(1) [],
        /// HSE clock ready flag
        HSERDY OFFSET(17) NUMBITS(1) [],
        /// HSE clock enable
        HSEON OFFSET(16) NUMBITS(1) [],
        /// Internal high-speed clock trimming
        HSITRIM OFFSET(3) NUMBITS(5) [],
        /// Internal high-speed clock ready flag
        HSIRDY OFFSET(1) NUMBITS(1) [],
        /// Internal high-speed clock enable
        HSION OFFSET(0) NUMBITS(1) []
    ],
    PLLCFGR [
        /// Main PLL division factor for I2Ss, SAIs, SYSTEM and SPDIF-Rx clocks
        PLLR OFFSET(28) NUMBITS(3) [],
        /// Main PLL (PLL) division factor for USB OTG FS, SDIO and random num
        PLLQ OFFSET(24) NUMBITS(4) [],
        /// Main PLL(PLL) and audio PLL (PLLI2S) entry clock source
        PLLSRC OFFSET(22) NUMBITS(1) [
            HSI = 0,
            HSE = 1,
        ],
        /// Main PLL (PLL) division factor for main system clock
        PLLP OFFSET(16) NUMBITS(2) [
            DivideBy2 = 0b00,
            DivideBy4 = 0b01,
            DivideBy6 = 0b10,
            DivideBy8 = 0b11,
        ],
        /// Main PLL (PLL) multiplication factor for VCO
        PLLN OFFSET(6) NUMBITS(9) [],
        /// Division factor for the main PLL (PLL) and audio PLL (PLLI2S) input
        PLLM OFFSET(0) NUMBITS(6) []
    ],
    CFGR [
        /// APB high-speed prescaler (APB2)
        PPRE2 OFFSET(13) NUMBITS(3) [],
        /// APB Low speed prescaler (APB1)
        PPRE1 OFFSET(10) NUMBITS(3) [],
        /// AHB prescaler
        HPRE OFFSET(4) NUMBITS(4) [],
        /// System clock switch status
        SWS OFFSET(2) NUMBITS(2) [],
        /// System clock switch
        SW OFFSET(0) NUMBITS(2) [
            HSI = 0b00,
            HSE = 0b01,
            PLL = 0b10,
        ]
    ],
    DCKCFGR2 [
        /// SDIO clock selection
        SDIOSEL OFFSET(28) NUMBITS(1) [],
        /// SDIO/USBFS/HS clock selection
        CK48MSEL OFFSET(27) NUMBITS(1) [
            PLLQ = 0,
            PLLSAIP = 1,
        ]
    ]
];

/// RCC_CR after reset, without the factory HSICAL bits
pub const CR_RESET_VALUE: u32 = 0x0000_0083;
/// RCC_PLLCFGR after reset
pub const PLLCFGR_RESET_VALUE: u32 = 0x2400_3010;
/// RCC_CFGR after reset
pub const CFGR_RESET_VALUE: u32 = 0x0000_0000;
/// RCC_DCKCFGR2 after reset
pub const DCKCFGR2_RESET_VALUE: u32 = 0x0000_0000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PLLP {
    DivideBy2 = 0b00,
    DivideBy4 = 0b01,
    DivideBy6 = 0b10,
    DivideBy8 = 0b11,
}

impl PLLP {
    // (variant_value + 1) * 2 = X for X in DivideByX
    pub const fn divisor(self) -> u32 {
        (self as u32 + 1) << 1
    }
}

impl TryFrom<u32> for PLLP {
    type Error = &'static str;

    fn try_from(item: u32) -> Result<Self, Self::Error> {
        match item {
            2 => Ok(PLLP::DivideBy2),
            4 => Ok(PLLP::DivideBy4),
            6 => Ok(PLLP::DivideBy6),
            8 => Ok(PLLP::DivideBy8),
            _ => Err("Error value for PLLP::try_from"),
        }
    }
}

/// Input of the main PLL.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PllSource {
    HSI = 0b0,
    HSE = 0b1,
}

impl fmt::Display for PllSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PllSource::HSI => write!(f, "HSI"),
            PllSource::HSE => write!(f, "HSE"),
        }
    }
}

/// HSE Mode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HseMode {
    /// HSE disabled, the PLL runs from HSI
    Off,
    /// HSE enabled with an external crystal
    Crystal,
    /// HSE enabled and bypassed by an external clock signal
    Bypass,
}

impl fmt::Display for HseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HseMode::Off => write!(f, "off"),
            HseMode::Crystal => write!(f, "crystal"),
            HseMode::Bypass => write!(f, "bypass"),
        }
    }
}

/// Source of the 48MHz clock for USB OTG FS, SDIO and RNG.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Clock48Source {
    /// Main PLL Q output
    MainPll,
    /// PLLSAI P output (audio PLL)
    AudioPll,
}

impl fmt::Display for Clock48Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clock48Source::MainPll => write!(f, "main PLL"),
            Clock48Source::AudioPll => write!(f, "audio PLL"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AHBPrescaler {
    DivideBy1 = 0b0000,
    DivideBy2 = 0b1000,
    DivideBy4 = 0b1001,
    DivideBy8 = 0b1010,
    DivideBy16 = 0b1011,
    DivideBy64 = 0b1100,
    DivideBy128 = 0b1101,
    DivideBy256 = 0b1110,
    DivideBy512 = 0b1111,
}

impl AHBPrescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            AHBPrescaler::DivideBy1 => 1,
            AHBPrescaler::DivideBy2 => 2,
            AHBPrescaler::DivideBy4 => 4,
            AHBPrescaler::DivideBy8 => 8,
            AHBPrescaler::DivideBy16 => 16,
            AHBPrescaler::DivideBy64 => 64,
            AHBPrescaler::DivideBy128 => 128,
            AHBPrescaler::DivideBy256 => 256,
            AHBPrescaler::DivideBy512 => 512,
        }
    }
}

impl TryFrom<u32> for AHBPrescaler {
    type Error = &'static str;

    fn try_from(item: u32) -> Result<Self, Self::Error> {
        match item {
            1 => Ok(AHBPrescaler::DivideBy1),
            2 => Ok(AHBPrescaler::DivideBy2),
            4 => Ok(AHBPrescaler::DivideBy4),
            8 => Ok(AHBPrescaler::DivideBy8),
            16 => Ok(AHBPrescaler::DivideBy16),
            64 => Ok(AHBPrescaler::DivideBy64),
            128 => Ok(AHBPrescaler::DivideBy128),
            256 => Ok(AHBPrescaler::DivideBy256),
            512 => Ok(AHBPrescaler::DivideBy512),
            _ => Err("Error value for AHBPrescaler::try_from"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum APBPrescaler {
    DivideBy1 = 0b000, // No division
    DivideBy2 = 0b100,
    DivideBy4 = 0b101,
    DivideBy8 = 0b110,
    DivideBy16 = 0b111,
}

impl APBPrescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            APBPrescaler::DivideBy1 => 1,
            APBPrescaler::DivideBy2 => 2,
            APBPrescaler::DivideBy4 => 4,
            APBPrescaler::DivideBy8 => 8,
            APBPrescaler::DivideBy16 => 16,
        }
    }
}

impl TryFrom<u32> for APBPrescaler {
    type Error = &'static str;

    fn try_from(item: u32) -> Result<Self, Self::Error> {
        match item {
            1 => Ok(APBPrescaler::DivideBy1),
            2 => Ok(APBPrescaler::DivideBy2),
            4 => Ok(APBPrescaler::DivideBy4),
            8 => Ok(APBPrescaler::DivideBy8),
            16 => Ok(APBPrescaler::DivideBy16),
            _ => Err("Error value for APBPrescaler::try_from"),
        }
    }
}

/// RCC_CR with the HSE set up for `hse_mode` and the main PLL on.
pub fn cr_image(hse_mode: HseMode) -> u32 {
    let mut cr: LocalRegisterCopy<u32, CR::Register> = LocalRegisterCopy::new(CR_RESET_VALUE);
    match hse_mode {
        HseMode::Off => {}
        HseMode::Crystal => cr.modify(CR::HSEON::SET),
        HseMode::Bypass => cr.modify(CR::HSEON::SET + CR::HSEBYP::SET),
    }
    cr.modify(CR::PLLON::SET);
    cr.get()
}

/// RCC_PLLCFGR for the main PLL. PLLR keeps its reset value.
pub fn pllcfgr_image(source: PllSource, pllm: u8, plln: u16, pllp: PLLP, pllq: u8) -> u32 {
    let mut pllcfgr: LocalRegisterCopy<u32, PLLCFGR::Register> =
        LocalRegisterCopy::new(PLLCFGR_RESET_VALUE);
    let pllsrc = match source {
        PllSource::HSI => PLLCFGR::PLLSRC::HSI,
        PllSource::HSE => PLLCFGR::PLLSRC::HSE,
    };
    pllcfgr.modify(
        PLLCFGR::PLLM.val(pllm as u32)
            + PLLCFGR::PLLN.val(plln as u32)
            + PLLCFGR::PLLP.val(pllp as u32)
            + PLLCFGR::PLLQ.val(pllq as u32)
            + pllsrc,
    );
    pllcfgr.get()
}

/// RCC_CFGR with the bus prescalers set and the PLL as system clock.
pub fn cfgr_image(ahb: AHBPrescaler, apb1: APBPrescaler, apb2: APBPrescaler) -> u32 {
    let mut cfgr: LocalRegisterCopy<u32, CFGR::Register> = LocalRegisterCopy::new(CFGR_RESET_VALUE);
    cfgr.modify(
        CFGR::HPRE.val(ahb as u32)
            + CFGR::PPRE1.val(apb1 as u32)
            + CFGR::PPRE2.val(apb2 as u32)
            + CFGR::SW::PLL,
    );
    cfgr.get()
}

/// RCC_DCKCFGR2 selecting the 48MHz clock source.
pub fn dckcfgr2_image(source: Clock48Source) -> u32 {
    let mut dckcfgr2: LocalRegisterCopy<u32, DCKCFGR2::Register> =
        LocalRegisterCopy::new(DCKCFGR2_RESET_VALUE);
    match source {
        Clock48Source::MainPll => dckcfgr2.modify(DCKCFGR2::CK48MSEL::PLLQ),
        Clock48Source::AudioPll => dckcfgr2.modify(DCKCFGR2::CK48MSEL::PLLSAIP),
    }
    dckcfgr2.get()
}
