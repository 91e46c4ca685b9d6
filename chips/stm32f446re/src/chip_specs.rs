// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! STM32F446 specifications
//!
//! The limits the clock tree is checked against. Frequencies are in Hz.

/// Main PLL limits.
pub trait PllConstants {
    const PLLM_MIN: u8;
    const PLLM_MAX: u8;
    const PLLN_MIN: u16;
    const PLLN_MAX: u16;
    const PLLQ_MIN: u8;
    const PLLQ_MAX: u8;

    /// VCO input frequency range (PLL source / PLLM)
    const VCO_INPUT_MIN_HZ: u32;
    const VCO_INPUT_MAX_HZ: u32;

    /// VCO output frequency range (VCO input * PLLN)
    const VCO_OUTPUT_MIN_HZ: u32;
    const VCO_OUTPUT_MAX_HZ: u32;

    /// Frequency USB OTG FS, SDIO and the RNG need from the 48MHz clock
    const PLL48_FREQUENCY_HZ: u32;
}

/// System and bus clock limits.
pub trait SystemClockConstants {
    const HSI_FREQUENCY_HZ: u32;

    /// Absolute SYSCLK ceiling, regardless of voltage scale
    const SYS_CLOCK_MAX_HZ: u32;
    /// HCLK ceilings per voltage scale and over-drive setting
    const SCALE1_HCLK_LIMIT_HZ: u32;
    const SCALE1_OVERDRIVE_HCLK_LIMIT_HZ: u32;
    const SCALE2_HCLK_LIMIT_HZ: u32;
    const SCALE2_OVERDRIVE_HCLK_LIMIT_HZ: u32;
    const SCALE3_HCLK_LIMIT_HZ: u32;

    const APB1_FREQUENCY_LIMIT_HZ: u32;
    const APB1_OVERDRIVE_FREQUENCY_LIMIT_HZ: u32;
    const APB2_FREQUENCY_LIMIT_HZ: u32;
    const APB2_OVERDRIVE_FREQUENCY_LIMIT_HZ: u32;
}

/// External high-speed oscillator limits.
pub trait HseConstants {
    const CRYSTAL_MIN_HZ: u32;
    const CRYSTAL_MAX_HZ: u32;
    const BYPASS_MIN_HZ: u32;
    const BYPASS_MAX_HZ: u32;
}

pub enum Stm32f446Specs {}

impl PllConstants for Stm32f446Specs {
    const PLLM_MIN: u8 = 2;
    const PLLM_MAX: u8 = 63;
    const PLLN_MIN: u16 = 50;
    const PLLN_MAX: u16 = 432;
    const PLLQ_MIN: u8 = 2;
    const PLLQ_MAX: u8 = 15;

    const VCO_INPUT_MIN_HZ: u32 = 950_000;
    const VCO_INPUT_MAX_HZ: u32 = 2_100_000;

    const VCO_OUTPUT_MIN_HZ: u32 = 100_000_000;
    const VCO_OUTPUT_MAX_HZ: u32 = 432_000_000;

    const PLL48_FREQUENCY_HZ: u32 = 48_000_000;
}

impl SystemClockConstants for Stm32f446Specs {
    const HSI_FREQUENCY_HZ: u32 = 16_000_000;

    const SYS_CLOCK_MAX_HZ: u32 = 180_000_000;
    const SCALE1_HCLK_LIMIT_HZ: u32 = 168_000_000;
    const SCALE1_OVERDRIVE_HCLK_LIMIT_HZ: u32 = 180_000_000;
    const SCALE2_HCLK_LIMIT_HZ: u32 = 144_000_000;
    const SCALE2_OVERDRIVE_HCLK_LIMIT_HZ: u32 = 168_000_000;
    const SCALE3_HCLK_LIMIT_HZ: u32 = 120_000_000;

    const APB1_FREQUENCY_LIMIT_HZ: u32 = 42_000_000;
    const APB1_OVERDRIVE_FREQUENCY_LIMIT_HZ: u32 = 45_000_000;
    const APB2_FREQUENCY_LIMIT_HZ: u32 = 84_000_000;
    const APB2_OVERDRIVE_FREQUENCY_LIMIT_HZ: u32 = 90_000_000;
}

impl HseConstants for Stm32f446Specs {
    const CRYSTAL_MIN_HZ: u32 = 4_000_000;
    const CRYSTAL_MAX_HZ: u32 = 26_000_000;
    const BYPASS_MIN_HZ: u32 = 1_000_000;
    const BYPASS_MAX_HZ: u32 = 50_000_000;
}
