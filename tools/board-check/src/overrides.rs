// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Clock parameter overrides read from a JSON file or the command line.
//!
//! A file sets any subset of the parameters, for example:
//!
//! ```json
//! {
//!     "plln": 360,
//!     "overdrive": true,
//!     "usb_uses_audio_pll": true,
//!     "hse_mode": "bypass"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use stm32f446re::clocks::ClockOverrides;
use stm32f446re::flash::{FlashLatency, SupplyRange};
use stm32f446re::pwr::VoltageScale;
use stm32f446re::rcc::{AHBPrescaler, APBPrescaler, HseMode, PLLP};

use crate::error::Error;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HseModeName {
    Off,
    Crystal,
    Bypass,
}

impl From<HseModeName> for HseMode {
    fn from(item: HseModeName) -> Self {
        match item {
            HseModeName::Off => HseMode::Off,
            HseModeName::Crystal => HseMode::Crystal,
            HseModeName::Bypass => HseMode::Bypass,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyRangeName {
    #[serde(rename = "2.7-3.6")]
    V27To36,
    #[serde(rename = "2.4-2.7")]
    V24To27,
    #[serde(rename = "2.1-2.4")]
    V21To24,
    #[serde(rename = "1.8-2.1")]
    V18To21,
}

impl From<SupplyRangeName> for SupplyRange {
    fn from(item: SupplyRangeName) -> Self {
        match item {
            SupplyRangeName::V27To36 => SupplyRange::V27To36,
            SupplyRangeName::V24To27 => SupplyRange::V24To27,
            SupplyRangeName::V21To24 => SupplyRange::V21To24,
            SupplyRangeName::V18To21 => SupplyRange::V18To21,
        }
    }
}

/// Contents of an overrides file. Dividers are given as the division factor
/// (`"apb1_divider": 4`), not as the register encoding.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideFile {
    pub voltage_scale: Option<u8>,
    pub pllm: Option<u8>,
    pub plln: Option<u16>,
    pub pllp: Option<u32>,
    pub pllq: Option<u8>,
    pub ahb_divider: Option<u32>,
    pub apb1_divider: Option<u32>,
    pub apb2_divider: Option<u32>,
    pub flash_latency: Option<usize>,
    pub usb_uses_audio_pll: Option<bool>,
    pub hse_mode: Option<HseModeName>,
    pub hse_frequency_hz: Option<u32>,
    pub overdrive: Option<bool>,
    pub supply_range: Option<SupplyRangeName>,
}

impl OverrideFile {
    pub fn into_overrides(self) -> Result<ClockOverrides, Error> {
        Ok(ClockOverrides {
            voltage_scale: convert("voltage_scale", self.voltage_scale, VoltageScale::try_from)?,
            pllm: self.pllm,
            plln: self.plln,
            pllp: convert("pllp", self.pllp, PLLP::try_from)?,
            pllq: self.pllq,
            ahb_prescaler: convert("ahb_divider", self.ahb_divider, AHBPrescaler::try_from)?,
            apb1_prescaler: convert("apb1_divider", self.apb1_divider, APBPrescaler::try_from)?,
            apb2_prescaler: convert("apb2_divider", self.apb2_divider, APBPrescaler::try_from)?,
            flash_latency: convert("flash_latency", self.flash_latency, FlashLatency::try_from)?,
            usb_uses_audio_pll: self.usb_uses_audio_pll,
            hse_mode: self.hse_mode.map(HseMode::from),
            hse_frequency_hz: self.hse_frequency_hz,
            overdrive: self.overdrive,
            supply_range: self.supply_range.map(SupplyRange::from),
        })
    }
}

/// Clock overrides given as command line flags.
#[derive(clap::Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ClockFlags {
    /// HSE frequency in MHz
    #[arg(long)]
    pub hse_mhz: Option<u32>,
    /// PLL input divider
    #[arg(long)]
    pub pllm: Option<u8>,
    /// PLL multiplier
    #[arg(long)]
    pub plln: Option<u16>,
    /// PLL system clock divider (2, 4, 6 or 8)
    #[arg(long)]
    pub pllp: Option<u32>,
    /// PLL 48MHz clock divider
    #[arg(long)]
    pub pllq: Option<u8>,
    /// Flash wait states
    #[arg(long)]
    pub flash_latency: Option<usize>,
}

impl ClockFlags {
    pub fn to_overrides(&self) -> Result<ClockOverrides, Error> {
        Ok(ClockOverrides {
            hse_frequency_hz: self.hse_mhz.map(|mhz| mhz.saturating_mul(1_000_000)),
            pllm: self.pllm,
            plln: self.plln,
            pllp: convert("pllp", self.pllp, PLLP::try_from)?,
            pllq: self.pllq,
            flash_latency: convert("flash_latency", self.flash_latency, FlashLatency::try_from)?,
            ..ClockOverrides::NONE
        })
    }
}

fn convert<T: ToString + Copy, U>(
    name: &'static str,
    value: Option<T>,
    try_from: impl Fn(T) -> Result<U, &'static str>,
) -> Result<Option<U>, Error> {
    value
        .map(|raw| {
            try_from(raw).map_err(|_| Error::InvalidValue {
                name,
                value: raw.to_string(),
            })
        })
        .transpose()
}

pub fn parse(path: &Path, text: &str) -> Result<ClockOverrides, Error> {
    let file: OverrideFile = serde_json::from_str(text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_overrides()
}

pub fn load(path: &Path) -> Result<ClockOverrides, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(text: &str) -> Result<ClockOverrides, Error> {
        parse(Path::new("overrides.json"), text)
    }

    #[test]
    fn file_sets_only_named_parameters() {
        let overrides = parse_str(
            r#"{ "plln": 360, "overdrive": true, "hse_mode": "bypass", "apb1_divider": 8,
                 "supply_range": "2.4-2.7" }"#,
        )
        .unwrap();
        assert_eq!(
            ClockOverrides {
                plln: Some(360),
                overdrive: Some(true),
                hse_mode: Some(HseMode::Bypass),
                apb1_prescaler: Some(APBPrescaler::DivideBy8),
                supply_range: Some(SupplyRange::V24To27),
                ..ClockOverrides::NONE
            },
            overrides
        );
        assert!(parse_str("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = parse_str(r#"{ "pllp": 3 }"#).unwrap_err();
        assert_eq!("Invalid pllp: 3", error.to_string());
        assert!(matches!(
            parse_str(r#"{ "flash_latency": 16 }"#),
            Err(Error::InvalidValue {
                name: "flash_latency",
                ..
            })
        ));
        // Misspelled parameters must not be silently ignored
        assert!(matches!(
            parse_str(r#"{ "plm": 4 }"#),
            Err(Error::Json { .. })
        ));
        assert!(matches!(
            parse_str(r#"{ "hse_mode": "on" }"#),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn missing_file() {
        let error = load(Path::new("/nonexistent/overrides.json")).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }

    #[test]
    fn flags_convert_units() {
        let flags = ClockFlags {
            hse_mhz: Some(25),
            pllp: Some(4),
            ..ClockFlags::default()
        };
        let overrides = flags.to_overrides().unwrap();
        assert_eq!(Some(25_000_000), overrides.hse_frequency_hz);
        assert_eq!(Some(PLLP::DivideBy4), overrides.pllp);
        assert_eq!(None, overrides.pllm);

        let flags = ClockFlags {
            flash_latency: Some(20),
            ..ClockFlags::default()
        };
        assert!(flags.to_overrides().is_err());
    }
}
