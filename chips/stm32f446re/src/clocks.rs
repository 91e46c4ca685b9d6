// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! STM32F446 clock tree configuration.
//!
//! [ClockConfig] holds every parameter the clock initialization code needs.
//! [ClockConfig::DEFAULT] runs the core at 168MHz from an 8MHz HSE crystal:
//!
//! ```text
//! HSE 8MHz / PLLM 8 = 1MHz * PLLN 336 = 336MHz VCO
//!                                      |-> / PLLP 2 = 168MHz SYSCLK
//!                                      |-> / PLLQ 7 = 48MHz PLL48CLK
//! SYSCLK / 1 = 168MHz HCLK -> / 4 = 42MHz PCLK1
//!                          -> / 2 = 84MHz PCLK2
//! ```
//!
//! A board changes only the parameters it cares about, the rest keep their
//! defaults:
//!
//! ```rust,ignore
//! const CLOCKS: ClockConfig = ClockConfig::DEFAULT.with_hse_mode(HseMode::Bypass);
//! const _: () = assert!(CLOCKS.compute().is_ok());
//! ```
//!
//! The same layering is available at runtime through [ClockOverrides], where
//! any parameter set to `Some` wins over the configuration it is applied to.
//!
//! [ClockConfig::compute] checks the whole set of parameters against the
//! chip limits and resolves the frequency of every clock. It is a `const fn`
//! so that a board configuration can be rejected at compile time.

use core::fmt;

use log::{debug, warn};

use crate::chip_specs::{HseConstants, PllConstants, Stm32f446Specs, SystemClockConstants};
use crate::flash::{self, FlashLatency, SupplyRange};
use crate::pwr::{self, VoltageScale};
use crate::rcc::{self, AHBPrescaler, APBPrescaler, Clock48Source, HseMode, PllSource, PLLP};

/// System clock frequency the default configuration is designed for
pub const TARGET_SYS_CLOCK_FREQUENCY_HZ: u32 = 168_000_000;

/// Clock tree parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    pub voltage_scale: VoltageScale,
    pub pllm: u8,
    pub plln: u16,
    pub pllp: PLLP,
    pub pllq: u8,
    pub ahb_prescaler: AHBPrescaler,
    pub apb1_prescaler: APBPrescaler,
    pub apb2_prescaler: APBPrescaler,
    pub flash_latency: FlashLatency,
    /// Clock USB from the audio PLL instead of the main PLL Q output
    pub usb_uses_audio_pll: bool,
    pub hse_mode: HseMode,
    /// Frequency of the crystal or external clock on OSC_IN. Unused when the
    /// HSE is off.
    pub hse_frequency_hz: u32,
    pub overdrive: bool,
    pub supply_range: SupplyRange,
}

impl ClockConfig {
    pub const DEFAULT: ClockConfig = ClockConfig {
        voltage_scale: VoltageScale::Scale1,
        pllm: 8,
        plln: 336,
        pllp: PLLP::DivideBy2,
        pllq: 7,
        ahb_prescaler: AHBPrescaler::DivideBy1,
        apb1_prescaler: APBPrescaler::DivideBy4,
        apb2_prescaler: APBPrescaler::DivideBy2,
        flash_latency: FlashLatency::Latency5,
        usb_uses_audio_pll: false,
        hse_mode: HseMode::Crystal,
        hse_frequency_hz: 8_000_000,
        overdrive: false,
        supply_range: SupplyRange::V27To36,
    };

    pub const fn with_voltage_scale(mut self, voltage_scale: VoltageScale) -> Self {
        self.voltage_scale = voltage_scale;
        self
    }

    pub const fn with_pllm(mut self, pllm: u8) -> Self {
        self.pllm = pllm;
        self
    }

    pub const fn with_plln(mut self, plln: u16) -> Self {
        self.plln = plln;
        self
    }

    pub const fn with_pllp(mut self, pllp: PLLP) -> Self {
        self.pllp = pllp;
        self
    }

    pub const fn with_pllq(mut self, pllq: u8) -> Self {
        self.pllq = pllq;
        self
    }

    pub const fn with_ahb_prescaler(mut self, prescaler: AHBPrescaler) -> Self {
        self.ahb_prescaler = prescaler;
        self
    }

    pub const fn with_apb1_prescaler(mut self, prescaler: APBPrescaler) -> Self {
        self.apb1_prescaler = prescaler;
        self
    }

    pub const fn with_apb2_prescaler(mut self, prescaler: APBPrescaler) -> Self {
        self.apb2_prescaler = prescaler;
        self
    }

    pub const fn with_flash_latency(mut self, flash_latency: FlashLatency) -> Self {
        self.flash_latency = flash_latency;
        self
    }

    pub const fn with_usb_uses_audio_pll(mut self, usb_uses_audio_pll: bool) -> Self {
        self.usb_uses_audio_pll = usb_uses_audio_pll;
        self
    }

    pub const fn with_hse_mode(mut self, hse_mode: HseMode) -> Self {
        self.hse_mode = hse_mode;
        self
    }

    pub const fn with_hse_frequency_hz(mut self, hse_frequency_hz: u32) -> Self {
        self.hse_frequency_hz = hse_frequency_hz;
        self
    }

    pub const fn with_overdrive(mut self, overdrive: bool) -> Self {
        self.overdrive = overdrive;
        self
    }

    pub const fn with_supply_range(mut self, supply_range: SupplyRange) -> Self {
        self.supply_range = supply_range;
        self
    }

    pub const fn pll_source(&self) -> PllSource {
        match self.hse_mode {
            HseMode::Off => PllSource::HSI,
            HseMode::Crystal | HseMode::Bypass => PllSource::HSE,
        }
    }

    pub const fn clock48_source(&self) -> Clock48Source {
        if self.usb_uses_audio_pll {
            Clock48Source::AudioPll
        } else {
            Clock48Source::MainPll
        }
    }

    /// Highest HCLK allowed by the voltage scale and over-drive setting.
    pub const fn hclk_limit_hz(&self) -> u32 {
        match (self.voltage_scale, self.overdrive) {
            (VoltageScale::Scale1, false) => Stm32f446Specs::SCALE1_HCLK_LIMIT_HZ,
            (VoltageScale::Scale1, true) => Stm32f446Specs::SCALE1_OVERDRIVE_HCLK_LIMIT_HZ,
            (VoltageScale::Scale2, false) => Stm32f446Specs::SCALE2_HCLK_LIMIT_HZ,
            (VoltageScale::Scale2, true) => Stm32f446Specs::SCALE2_OVERDRIVE_HCLK_LIMIT_HZ,
            (VoltageScale::Scale3, _) => Stm32f446Specs::SCALE3_HCLK_LIMIT_HZ,
        }
    }

    const fn apb1_limit_hz(&self) -> u32 {
        if self.overdrive {
            Stm32f446Specs::APB1_OVERDRIVE_FREQUENCY_LIMIT_HZ
        } else {
            Stm32f446Specs::APB1_FREQUENCY_LIMIT_HZ
        }
    }

    const fn apb2_limit_hz(&self) -> u32 {
        if self.overdrive {
            Stm32f446Specs::APB2_OVERDRIVE_FREQUENCY_LIMIT_HZ
        } else {
            Stm32f446Specs::APB2_FREQUENCY_LIMIT_HZ
        }
    }

    /// Check the configuration against the chip limits and resolve every
    /// clock frequency.
    ///
    /// The checks run in this order and the first failure is returned: HSE
    /// frequency, PLL divider ranges, VCO input, VCO output, over-drive
    /// availability, SYSCLK, voltage scale HCLK limit, supply range HCLK
    /// limit, APB1, APB2, flash latency, PLL48 frequency.
    pub const fn compute(&self) -> Result<ClockTree, ClockError> {
        let source = self.pll_source();
        let source_hz = match self.hse_mode {
            HseMode::Off => Stm32f446Specs::HSI_FREQUENCY_HZ,
            HseMode::Crystal => {
                if self.hse_frequency_hz < Stm32f446Specs::CRYSTAL_MIN_HZ
                    || self.hse_frequency_hz > Stm32f446Specs::CRYSTAL_MAX_HZ
                {
                    return Err(ClockError::HseFrequencyOutOfRange {
                        mode: self.hse_mode,
                        hz: self.hse_frequency_hz,
                    });
                }
                self.hse_frequency_hz
            }
            HseMode::Bypass => {
                if self.hse_frequency_hz < Stm32f446Specs::BYPASS_MIN_HZ
                    || self.hse_frequency_hz > Stm32f446Specs::BYPASS_MAX_HZ
                {
                    return Err(ClockError::HseFrequencyOutOfRange {
                        mode: self.hse_mode,
                        hz: self.hse_frequency_hz,
                    });
                }
                self.hse_frequency_hz
            }
        };

        if self.pllm < Stm32f446Specs::PLLM_MIN || self.pllm > Stm32f446Specs::PLLM_MAX {
            return Err(ClockError::PllmOutOfRange(self.pllm));
        }
        if self.plln < Stm32f446Specs::PLLN_MIN || self.plln > Stm32f446Specs::PLLN_MAX {
            return Err(ClockError::PllnOutOfRange(self.plln));
        }
        if self.pllq < Stm32f446Specs::PLLQ_MIN || self.pllq > Stm32f446Specs::PLLQ_MAX {
            return Err(ClockError::PllqOutOfRange(self.pllq));
        }

        // Compare against the source frequency so that a fractional VCO input
        // is not rounded into range.
        let pllm = self.pllm as u64;
        let vco_input_hz = source_hz / self.pllm as u32;
        if (source_hz as u64) < Stm32f446Specs::VCO_INPUT_MIN_HZ as u64 * pllm
            || (source_hz as u64) > Stm32f446Specs::VCO_INPUT_MAX_HZ as u64 * pllm
        {
            return Err(ClockError::VcoInputOutOfRange(vco_input_hz));
        }

        let vco_output = source_hz as u64 * self.plln as u64 / pllm;
        if vco_output < Stm32f446Specs::VCO_OUTPUT_MIN_HZ as u64
            || vco_output > Stm32f446Specs::VCO_OUTPUT_MAX_HZ as u64
        {
            return Err(ClockError::VcoOutputOutOfRange(vco_output as u32));
        }
        let vco_output_hz = vco_output as u32;

        if self.overdrive && !self.voltage_scale.supports_overdrive() {
            return Err(ClockError::OverdriveUnavailable(self.voltage_scale));
        }

        let sys_clock_hz = vco_output_hz / self.pllp.divisor();
        if sys_clock_hz > Stm32f446Specs::SYS_CLOCK_MAX_HZ {
            return Err(ClockError::SysClockTooHigh {
                hz: sys_clock_hz,
                limit_hz: Stm32f446Specs::SYS_CLOCK_MAX_HZ,
            });
        }

        let hclk_hz = sys_clock_hz / self.ahb_prescaler.divisor();
        let hclk_limit_hz = self.hclk_limit_hz();
        if hclk_hz > hclk_limit_hz {
            return Err(ClockError::HclkAboveScaleLimit {
                hz: hclk_hz,
                limit_hz: hclk_limit_hz,
                scale: self.voltage_scale,
                overdrive: self.overdrive,
            });
        }
        if let Some(limit_hz) = self.supply_range.hclk_limit_hz() {
            if hclk_hz > limit_hz {
                return Err(ClockError::HclkAboveSupplyLimit {
                    hz: hclk_hz,
                    limit_hz,
                    supply: self.supply_range,
                });
            }
        }

        let pclk1_hz = hclk_hz / self.apb1_prescaler.divisor();
        if pclk1_hz > self.apb1_limit_hz() {
            return Err(ClockError::Apb1TooHigh {
                hz: pclk1_hz,
                limit_hz: self.apb1_limit_hz(),
            });
        }
        let pclk2_hz = hclk_hz / self.apb2_prescaler.divisor();
        if pclk2_hz > self.apb2_limit_hz() {
            return Err(ClockError::Apb2TooHigh {
                hz: pclk2_hz,
                limit_hz: self.apb2_limit_hz(),
            });
        }

        let min_flash_latency = flash::minimum_latency(hclk_hz, self.supply_range);
        if self.flash_latency.wait_states() < min_flash_latency.wait_states() {
            return Err(ClockError::FlashLatencyTooLow {
                configured: self.flash_latency,
                required: min_flash_latency,
            });
        }

        // Exact PLL48CLK = source_hz * PLLN / (PLLM * PLLQ), compared without
        // the truncation of the VCO output.
        let pll48_hz = vco_output_hz / self.pllq as u32;
        if !self.usb_uses_audio_pll
            && source_hz as u64 * self.plln as u64
                != Stm32f446Specs::PLL48_FREQUENCY_HZ as u64 * self.pllq as u64 * pllm
        {
            return Err(ClockError::Pll48NotExact(pll48_hz));
        }

        Ok(ClockTree {
            source,
            source_hz,
            vco_input_hz,
            vco_output_hz,
            sys_clock_hz,
            hclk_hz,
            pclk1_hz,
            pclk2_hz,
            apb1_timer_hz: timer_clock(pclk1_hz, self.apb1_prescaler),
            apb2_timer_hz: timer_clock(pclk2_hz, self.apb2_prescaler),
            pll48_hz,
            clock48_source: self.clock48_source(),
            min_flash_latency,
        })
    }

    /// [ClockConfig::compute], logging the resolved tree. A system clock other
    /// than [TARGET_SYS_CLOCK_FREQUENCY_HZ] is valid but reported as a warning.
    pub fn validate(&self) -> Result<ClockTree, ClockError> {
        let tree = self.compute()?;
        debug!(
            "clock tree: {} {}Hz -> VCO {}Hz, SYSCLK {}Hz, HCLK {}Hz, PCLK1 {}Hz, PCLK2 {}Hz, 48MHz clock from {}",
            tree.source,
            tree.source_hz,
            tree.vco_output_hz,
            tree.sys_clock_hz,
            tree.hclk_hz,
            tree.pclk1_hz,
            tree.pclk2_hz,
            tree.clock48_source
        );
        if !tree.runs_at_target() {
            warn!(
                "SYSCLK is {}Hz, the configuration targets {}Hz",
                tree.sys_clock_hz, TARGET_SYS_CLOCK_FREQUENCY_HZ
            );
        }
        if self.flash_latency.wait_states() > tree.min_flash_latency.wait_states() {
            debug!(
                "flash latency {} is above the {} needed at {}Hz",
                self.flash_latency, tree.min_flash_latency, tree.hclk_hz
            );
        }
        Ok(tree)
    }

    /// Values the clock initialization code writes to each register.
    pub fn register_images(&self) -> RegisterImages {
        RegisterImages {
            rcc_cr: rcc::cr_image(self.hse_mode),
            rcc_pllcfgr: rcc::pllcfgr_image(
                self.pll_source(),
                self.pllm,
                self.plln,
                self.pllp,
                self.pllq,
            ),
            rcc_cfgr: rcc::cfgr_image(
                self.ahb_prescaler,
                self.apb1_prescaler,
                self.apb2_prescaler,
            ),
            rcc_dckcfgr2: rcc::dckcfgr2_image(self.clock48_source()),
            flash_acr: flash::acr_image(self.flash_latency),
            pwr_cr: pwr::cr_image(self.voltage_scale, self.overdrive),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Timers on an APB bus run at twice the bus clock unless the bus is undivided
const fn timer_clock(pclk_hz: u32, prescaler: APBPrescaler) -> u32 {
    match prescaler {
        APBPrescaler::DivideBy1 => pclk_hz,
        _ => pclk_hz * 2,
    }
}

/// Parameters set ahead of a [ClockConfig]. Every `Some` value replaces the
/// corresponding parameter of the configuration it is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockOverrides {
    pub voltage_scale: Option<VoltageScale>,
    pub pllm: Option<u8>,
    pub plln: Option<u16>,
    pub pllp: Option<PLLP>,
    pub pllq: Option<u8>,
    pub ahb_prescaler: Option<AHBPrescaler>,
    pub apb1_prescaler: Option<APBPrescaler>,
    pub apb2_prescaler: Option<APBPrescaler>,
    pub flash_latency: Option<FlashLatency>,
    pub usb_uses_audio_pll: Option<bool>,
    pub hse_mode: Option<HseMode>,
    pub hse_frequency_hz: Option<u32>,
    pub overdrive: Option<bool>,
    pub supply_range: Option<SupplyRange>,
}

impl ClockOverrides {
    pub const NONE: ClockOverrides = ClockOverrides {
        voltage_scale: None,
        pllm: None,
        plln: None,
        pllp: None,
        pllq: None,
        ahb_prescaler: None,
        apb1_prescaler: None,
        apb2_prescaler: None,
        flash_latency: None,
        usb_uses_audio_pll: None,
        hse_mode: None,
        hse_frequency_hz: None,
        overdrive: None,
        supply_range: None,
    };

    /// `base`, with every parameter set here taking precedence.
    pub const fn apply(&self, base: ClockConfig) -> ClockConfig {
        ClockConfig {
            voltage_scale: pick(self.voltage_scale, base.voltage_scale),
            pllm: pick(self.pllm, base.pllm),
            plln: pick(self.plln, base.plln),
            pllp: pick(self.pllp, base.pllp),
            pllq: pick(self.pllq, base.pllq),
            ahb_prescaler: pick(self.ahb_prescaler, base.ahb_prescaler),
            apb1_prescaler: pick(self.apb1_prescaler, base.apb1_prescaler),
            apb2_prescaler: pick(self.apb2_prescaler, base.apb2_prescaler),
            flash_latency: pick(self.flash_latency, base.flash_latency),
            usb_uses_audio_pll: pick(self.usb_uses_audio_pll, base.usb_uses_audio_pll),
            hse_mode: pick(self.hse_mode, base.hse_mode),
            hse_frequency_hz: pick(self.hse_frequency_hz, base.hse_frequency_hz),
            overdrive: pick(self.overdrive, base.overdrive),
            supply_range: pick(self.supply_range, base.supply_range),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.voltage_scale.is_none()
            && self.pllm.is_none()
            && self.plln.is_none()
            && self.pllp.is_none()
            && self.pllq.is_none()
            && self.ahb_prescaler.is_none()
            && self.apb1_prescaler.is_none()
            && self.apb2_prescaler.is_none()
            && self.flash_latency.is_none()
            && self.usb_uses_audio_pll.is_none()
            && self.hse_mode.is_none()
            && self.hse_frequency_hz.is_none()
            && self.overdrive.is_none()
            && self.supply_range.is_none()
    }
}

const fn pick<T: Copy>(value: Option<T>, default: T) -> T {
    match value {
        Some(value) => value,
        None => default,
    }
}

/// Resolved frequencies of a valid [ClockConfig].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTree {
    pub source: PllSource,
    pub source_hz: u32,
    pub vco_input_hz: u32,
    pub vco_output_hz: u32,
    pub sys_clock_hz: u32,
    pub hclk_hz: u32,
    pub pclk1_hz: u32,
    pub pclk2_hz: u32,
    pub apb1_timer_hz: u32,
    pub apb2_timer_hz: u32,
    /// Main PLL Q output
    pub pll48_hz: u32,
    pub clock48_source: Clock48Source,
    /// Fewest flash wait states HCLK needs
    pub min_flash_latency: FlashLatency,
}

impl ClockTree {
    pub const fn runs_at_target(&self) -> bool {
        self.sys_clock_hz == TARGET_SYS_CLOCK_FREQUENCY_HZ
    }
}

/// Register values for a [ClockConfig], before any hardware-specific bits
/// (HSICAL) are merged in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterImages {
    pub rcc_cr: u32,
    pub rcc_pllcfgr: u32,
    pub rcc_cfgr: u32,
    pub rcc_dckcfgr2: u32,
    pub flash_acr: u32,
    pub pwr_cr: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockError {
    HseFrequencyOutOfRange { mode: HseMode, hz: u32 },
    PllmOutOfRange(u8),
    PllnOutOfRange(u16),
    PllqOutOfRange(u8),
    VcoInputOutOfRange(u32),
    VcoOutputOutOfRange(u32),
    OverdriveUnavailable(VoltageScale),
    SysClockTooHigh { hz: u32, limit_hz: u32 },
    HclkAboveScaleLimit {
        hz: u32,
        limit_hz: u32,
        scale: VoltageScale,
        overdrive: bool,
    },
    HclkAboveSupplyLimit {
        hz: u32,
        limit_hz: u32,
        supply: SupplyRange,
    },
    Apb1TooHigh { hz: u32, limit_hz: u32 },
    Apb2TooHigh { hz: u32, limit_hz: u32 },
    FlashLatencyTooLow {
        configured: FlashLatency,
        required: FlashLatency,
    },
    /// The main PLL Q output clocks USB but is not exactly 48MHz
    Pll48NotExact(u32),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::HseFrequencyOutOfRange { mode, hz } => {
                write!(f, "HSE frequency {}Hz is out of range in {} mode", hz, mode)
            }
            ClockError::PllmOutOfRange(pllm) => write!(
                f,
                "PLLM {} is outside {}..={}",
                pllm,
                Stm32f446Specs::PLLM_MIN,
                Stm32f446Specs::PLLM_MAX
            ),
            ClockError::PllnOutOfRange(plln) => write!(
                f,
                "PLLN {} is outside {}..={}",
                plln,
                Stm32f446Specs::PLLN_MIN,
                Stm32f446Specs::PLLN_MAX
            ),
            ClockError::PllqOutOfRange(pllq) => write!(
                f,
                "PLLQ {} is outside {}..={}",
                pllq,
                Stm32f446Specs::PLLQ_MIN,
                Stm32f446Specs::PLLQ_MAX
            ),
            ClockError::VcoInputOutOfRange(hz) => write!(
                f,
                "VCO input {}Hz is outside {}Hz..={}Hz",
                hz,
                Stm32f446Specs::VCO_INPUT_MIN_HZ,
                Stm32f446Specs::VCO_INPUT_MAX_HZ
            ),
            ClockError::VcoOutputOutOfRange(hz) => write!(
                f,
                "VCO output {}Hz is outside {}Hz..={}Hz",
                hz,
                Stm32f446Specs::VCO_OUTPUT_MIN_HZ,
                Stm32f446Specs::VCO_OUTPUT_MAX_HZ
            ),
            ClockError::OverdriveUnavailable(scale) => {
                write!(f, "over-drive is not available in voltage {}", scale)
            }
            ClockError::SysClockTooHigh { hz, limit_hz } => {
                write!(f, "SYSCLK {}Hz exceeds the {}Hz limit", hz, limit_hz)
            }
            ClockError::HclkAboveScaleLimit {
                hz,
                limit_hz,
                scale,
                overdrive,
            } => write!(
                f,
                "HCLK {}Hz exceeds the {}Hz limit of voltage {}{}",
                hz,
                limit_hz,
                scale,
                if *overdrive { " with over-drive" } else { "" }
            ),
            ClockError::HclkAboveSupplyLimit {
                hz,
                limit_hz,
                supply,
            } => write!(
                f,
                "HCLK {}Hz exceeds the {}Hz limit of the {} supply range",
                hz, limit_hz, supply
            ),
            ClockError::Apb1TooHigh { hz, limit_hz } => {
                write!(f, "PCLK1 {}Hz exceeds the {}Hz APB1 limit", hz, limit_hz)
            }
            ClockError::Apb2TooHigh { hz, limit_hz } => {
                write!(f, "PCLK2 {}Hz exceeds the {}Hz APB2 limit", hz, limit_hz)
            }
            ClockError::FlashLatencyTooLow {
                configured,
                required,
            } => write!(
                f,
                "flash latency {} is below the {} required",
                configured, required
            ),
            ClockError::Pll48NotExact(hz) if *hz == Stm32f446Specs::PLL48_FREQUENCY_HZ => write!(
                f,
                "PLL48CLK is a fraction above {}Hz, USB needs it exact",
                hz
            ),
            ClockError::Pll48NotExact(hz) => write!(
                f,
                "PLL48CLK is {}Hz, USB needs exactly {}Hz",
                hz,
                Stm32f446Specs::PLL48_FREQUENCY_HZ
            ),
        }
    }
}

impl core::error::Error for ClockError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn default_runs_at_168mhz() {
        let tree = ClockConfig::DEFAULT.compute().unwrap();
        assert_eq!(PllSource::HSE, tree.source);
        assert_eq!(1_000_000, tree.vco_input_hz);
        assert_eq!(336_000_000, tree.vco_output_hz);
        assert_eq!(168_000_000, tree.sys_clock_hz);
        assert_eq!(168_000_000, tree.hclk_hz);
        assert_eq!(42_000_000, tree.pclk1_hz);
        assert_eq!(84_000_000, tree.pclk2_hz);
        assert_eq!(84_000_000, tree.apb1_timer_hz);
        assert_eq!(168_000_000, tree.apb2_timer_hz);
        assert_eq!(48_000_000, tree.pll48_hz);
        assert_eq!(FlashLatency::Latency5, tree.min_flash_latency);
        assert!(tree.runs_at_target());
    }

    #[test]
    fn default_register_images() {
        assert_eq!(
            RegisterImages {
                rcc_cr: 0x0101_0083,
                rcc_pllcfgr: 0x2740_5408,
                rcc_cfgr: 0x9402,
                rcc_dckcfgr2: 0,
                flash_acr: 0x705,
                pwr_cr: 0xC000,
            },
            ClockConfig::DEFAULT.register_images()
        );
    }

    #[test]
    fn builders_change_one_parameter() {
        let config = ClockConfig::DEFAULT.with_hse_mode(HseMode::Bypass);
        assert_eq!(HseMode::Bypass, config.hse_mode);
        assert_eq!(
            ClockConfig {
                hse_mode: HseMode::Crystal,
                ..config
            },
            ClockConfig::DEFAULT
        );
        assert_eq!(0x0105_0083, config.register_images().rcc_cr);
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = ClockOverrides {
            plln: Some(360),
            overdrive: Some(true),
            ..ClockOverrides::NONE
        };
        let config = overrides.apply(ClockConfig::DEFAULT.with_pllq(9));
        assert_eq!(360, config.plln);
        assert!(config.overdrive);
        // Not overridden, so the base value survives
        assert_eq!(9, config.pllq);
        assert_eq!(8, config.pllm);

        assert!(ClockOverrides::NONE.is_empty());
        assert!(!overrides.is_empty());
        assert_eq!(ClockConfig::DEFAULT, ClockOverrides::NONE.apply(ClockConfig::DEFAULT));
    }

    #[test]
    fn overdrive_reaches_180mhz() {
        // 360MHz VCO: SYSCLK 180MHz, but no PLLQ gives 48MHz so USB runs
        // from the audio PLL
        let config = ClockConfig::DEFAULT
            .with_plln(360)
            .with_overdrive(true)
            .with_usb_uses_audio_pll(true);
        let tree = config.compute().unwrap();
        assert_eq!(180_000_000, tree.sys_clock_hz);
        assert_eq!(45_000_000, tree.pclk1_hz);
        assert_eq!(90_000_000, tree.pclk2_hz);
        assert_eq!(Clock48Source::AudioPll, tree.clock48_source);
        assert!(!tree.runs_at_target());
        assert_eq!(1 << 27, config.register_images().rcc_dckcfgr2);
        assert_eq!(0x3_C000, config.register_images().pwr_cr);

        assert_eq!(
            Err(ClockError::HclkAboveScaleLimit {
                hz: 180_000_000,
                limit_hz: 168_000_000,
                scale: VoltageScale::Scale1,
                overdrive: false,
            }),
            config.with_overdrive(false).compute()
        );
    }

    #[test]
    fn pll48_must_be_exact() {
        assert_eq!(
            Err(ClockError::Pll48NotExact(42_000_000)),
            ClockConfig::DEFAULT.with_pllq(8).compute()
        );
    }

    #[test]
    fn pll48_fraction_is_not_exact() {
        // 4460177Hz * 226 / 3 = 336000000.67Hz, which truncates to 7 * 48MHz
        let config = ClockConfig::DEFAULT
            .with_hse_mode(HseMode::Bypass)
            .with_hse_frequency_hz(4_460_177)
            .with_pllm(3)
            .with_plln(226);
        assert_eq!(
            Err(ClockError::Pll48NotExact(48_000_000)),
            config.compute()
        );
        assert_eq!(
            "PLL48CLK is a fraction above 48000000Hz, USB needs it exact",
            ClockError::Pll48NotExact(48_000_000).to_string()
        );
        // Clocking USB from the audio PLL accepts the same main PLL
        let tree = config.with_usb_uses_audio_pll(true).compute().unwrap();
        assert_eq!(336_000_000, tree.vco_output_hz);
        assert_eq!(168_000_000, tree.sys_clock_hz);
    }

    #[test]
    fn config_for_72mhz() {
        // 288MHz VCO: SYSCLK = 288 / 4 = 72MHz, PLL48 = 288 / 6 = 48MHz
        let tree = ClockConfig::DEFAULT
            .with_plln(288)
            .with_pllp(PLLP::DivideBy4)
            .with_pllq(6)
            .with_flash_latency(FlashLatency::Latency2)
            .compute()
            .unwrap();
        assert_eq!(72_000_000, tree.sys_clock_hz);
        assert_eq!(48_000_000, tree.pll48_hz);
        assert_eq!(FlashLatency::Latency2, tree.min_flash_latency);
    }

    #[test]
    fn hsi_source() {
        let tree = ClockConfig::DEFAULT
            .with_hse_mode(HseMode::Off)
            .with_pllm(16)
            .compute()
            .unwrap();
        assert_eq!(PllSource::HSI, tree.source);
        assert_eq!(168_000_000, tree.sys_clock_hz);
    }

    #[test]
    fn hse_frequency_limits() {
        let config = ClockConfig::DEFAULT.with_hse_frequency_hz(40_000_000);
        assert_eq!(
            Err(ClockError::HseFrequencyOutOfRange {
                mode: HseMode::Crystal,
                hz: 40_000_000,
            }),
            config.compute()
        );
        // An external clock may be faster than a crystal, the VCO input then
        // decides
        assert_eq!(
            Err(ClockError::VcoInputOutOfRange(5_000_000)),
            config.with_hse_mode(HseMode::Bypass).compute()
        );
    }

    #[test]
    fn pll_divider_ranges() {
        assert_eq!(
            Err(ClockError::PllmOutOfRange(1)),
            ClockConfig::DEFAULT.with_pllm(1).compute()
        );
        assert_eq!(
            Err(ClockError::PllnOutOfRange(433)),
            ClockConfig::DEFAULT.with_plln(433).compute()
        );
        assert_eq!(
            Err(ClockError::PllqOutOfRange(16)),
            ClockConfig::DEFAULT.with_pllq(16).compute()
        );
    }

    #[test]
    fn vco_limits() {
        // 8MHz / 9 = 0.89MHz
        assert_eq!(
            Err(ClockError::VcoInputOutOfRange(888_888)),
            ClockConfig::DEFAULT.with_pllm(9).compute()
        );
        assert_eq!(
            Err(ClockError::VcoOutputOutOfRange(96_000_000)),
            ClockConfig::DEFAULT.with_plln(96).compute()
        );
    }

    #[test]
    fn voltage_scale_limits() {
        assert_eq!(
            Err(ClockError::OverdriveUnavailable(VoltageScale::Scale3)),
            ClockConfig::DEFAULT
                .with_voltage_scale(VoltageScale::Scale3)
                .with_overdrive(true)
                .compute()
        );
        assert_eq!(
            Err(ClockError::HclkAboveScaleLimit {
                hz: 168_000_000,
                limit_hz: 144_000_000,
                scale: VoltageScale::Scale2,
                overdrive: false,
            }),
            ClockConfig::DEFAULT
                .with_voltage_scale(VoltageScale::Scale2)
                .compute()
        );
        assert!(ClockConfig::DEFAULT
            .with_voltage_scale(VoltageScale::Scale2)
            .with_overdrive(true)
            .compute()
            .is_ok());
    }

    #[test]
    fn voltage_scale_limits_hclk() {
        // SYSCLK stays at 168MHz, the AHB prescaler brings HCLK within the
        // 120MHz of Scale 3
        let tree = ClockConfig::DEFAULT
            .with_voltage_scale(VoltageScale::Scale3)
            .with_ahb_prescaler(AHBPrescaler::DivideBy2)
            .compute()
            .unwrap();
        assert_eq!(168_000_000, tree.sys_clock_hz);
        assert_eq!(84_000_000, tree.hclk_hz);
        assert_eq!(21_000_000, tree.pclk1_hz);

        assert_eq!(
            Err(ClockError::HclkAboveScaleLimit {
                hz: 168_000_000,
                limit_hz: 120_000_000,
                scale: VoltageScale::Scale3,
                overdrive: false,
            }),
            ClockConfig::DEFAULT
                .with_voltage_scale(VoltageScale::Scale3)
                .compute()
        );
    }

    #[test]
    fn sys_clock_ceiling() {
        // 384MHz VCO / 2 = 192MHz, too fast even with HCLK divided down
        assert_eq!(
            Err(ClockError::SysClockTooHigh {
                hz: 192_000_000,
                limit_hz: 180_000_000,
            }),
            ClockConfig::DEFAULT
                .with_plln(384)
                .with_pllq(8)
                .with_overdrive(true)
                .with_ahb_prescaler(AHBPrescaler::DivideBy2)
                .compute()
        );
    }

    #[test]
    fn bus_limits() {
        assert_eq!(
            Err(ClockError::Apb1TooHigh {
                hz: 84_000_000,
                limit_hz: 42_000_000,
            }),
            ClockConfig::DEFAULT
                .with_apb1_prescaler(APBPrescaler::DivideBy2)
                .compute()
        );
        assert_eq!(
            Err(ClockError::Apb2TooHigh {
                hz: 168_000_000,
                limit_hz: 84_000_000,
            }),
            ClockConfig::DEFAULT
                .with_apb2_prescaler(APBPrescaler::DivideBy1)
                .compute()
        );
    }

    #[test]
    fn flash_latency_limits() {
        assert_eq!(
            Err(ClockError::FlashLatencyTooLow {
                configured: FlashLatency::Latency4,
                required: FlashLatency::Latency5,
            }),
            ClockConfig::DEFAULT
                .with_flash_latency(FlashLatency::Latency4)
                .compute()
        );
        // Lower supply voltage needs more wait states
        assert_eq!(
            Err(ClockError::FlashLatencyTooLow {
                configured: FlashLatency::Latency5,
                required: FlashLatency::Latency6,
            }),
            ClockConfig::DEFAULT
                .with_supply_range(SupplyRange::V24To27)
                .compute()
        );
        // Halving HCLK makes the default latency more than enough
        let tree = ClockConfig::DEFAULT
            .with_ahb_prescaler(AHBPrescaler::DivideBy2)
            .compute()
            .unwrap();
        assert_eq!(FlashLatency::Latency2, tree.min_flash_latency);
    }

    #[test]
    fn low_supply_caps_hclk() {
        let config = ClockConfig::DEFAULT
            .with_plln(360)
            .with_overdrive(true)
            .with_usb_uses_audio_pll(true)
            .with_supply_range(SupplyRange::V18To21);
        assert_eq!(
            Err(ClockError::HclkAboveSupplyLimit {
                hz: 180_000_000,
                limit_hz: 168_000_000,
                supply: SupplyRange::V18To21,
            }),
            config.compute()
        );
    }

    #[test]
    fn errors_read_well() {
        use std::string::ToString;

        assert_eq!(
            "PLLQ 16 is outside 2..=15",
            ClockError::PllqOutOfRange(16).to_string()
        );
        assert_eq!(
            "PLL48CLK is 42000000Hz, USB needs exactly 48000000Hz",
            ClockError::Pll48NotExact(42_000_000).to_string()
        );
    }
}
