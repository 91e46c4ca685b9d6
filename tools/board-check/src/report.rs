// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Text rendering of pin maps and clock trees.

use std::fmt::Write;

use colored::Colorize;
use stm32f446re::clocks::{ClockConfig, ClockError, ClockTree, TARGET_SYS_CLOCK_FREQUENCY_HZ};

use crate::boards::{Board, PinReport};

fn mhz(hz: u32) -> String {
    if hz % 1_000_000 == 0 {
        format!("{} MHz", hz / 1_000_000)
    } else {
        format!("{:.3} MHz", f64::from(hz) / 1_000_000.0)
    }
}

pub fn board_list() -> String {
    let mut out = String::new();
    for board in Board::ALL {
        let _ = writeln!(out, "{:<18} {} ({})", board.id(), board.name(), board.mcu());
    }
    out
}

pub fn pins(report: &PinReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})",
        report.board_name.bold(),
        report.mcu_name
    );
    for (role, pin) in &report.roles {
        let _ = writeln!(out, "  {:<10} {}", role.to_string(), pin);
    }
    match &report.buses {
        Ok(buses) => {
            let _ = writeln!(
                out,
                "  I2C on {}, SPI on {}, UART on {}",
                buses.i2c, buses.spi, buses.uart
            );
        }
        Err(error) => {
            let _ = writeln!(out, "  {} {}", "error:".red().bold(), error);
        }
    }
    let _ = writeln!(out, "  ignored:   {}", report.ignored.join(" "));
    let _ = writeln!(
        out,
        "  user pins: {} ({})",
        report.user_pins.join(" "),
        report.user_pins.len()
    );
    out
}

pub fn clocks(config: &ClockConfig, result: &Result<ClockTree, ClockError>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  HSE {} ({}), PLLM {}, PLLN {}, PLLP {}, PLLQ {}",
        config.hse_mode,
        mhz(config.hse_frequency_hz),
        config.pllm,
        config.plln,
        config.pllp.divisor(),
        config.pllq
    );
    let _ = writeln!(
        out,
        "  AHB /{}, APB1 /{}, APB2 /{}, voltage {}, over-drive {}, flash {}, supply {}",
        config.ahb_prescaler.divisor(),
        config.apb1_prescaler.divisor(),
        config.apb2_prescaler.divisor(),
        config.voltage_scale,
        if config.overdrive { "on" } else { "off" },
        config.flash_latency,
        config.supply_range
    );

    let tree = match result {
        Ok(tree) => tree,
        Err(error) => {
            let _ = writeln!(out, "  {} {}", "error:".red().bold(), error);
            return out;
        }
    };

    let _ = writeln!(out, "  PLL source  {} {}", tree.source, mhz(tree.source_hz));
    let _ = writeln!(out, "  VCO in/out  {} / {}", mhz(tree.vco_input_hz), mhz(tree.vco_output_hz));
    let sys_clock = mhz(tree.sys_clock_hz);
    if tree.runs_at_target() {
        let _ = writeln!(out, "  SYSCLK      {}", sys_clock.green());
    } else {
        let _ = writeln!(
            out,
            "  SYSCLK      {} {} target is {}",
            sys_clock.yellow(),
            "warning:".yellow().bold(),
            mhz(TARGET_SYS_CLOCK_FREQUENCY_HZ)
        );
    }
    let _ = writeln!(out, "  HCLK        {}", mhz(tree.hclk_hz));
    let _ = writeln!(
        out,
        "  PCLK1       {} (timers {})",
        mhz(tree.pclk1_hz),
        mhz(tree.apb1_timer_hz)
    );
    let _ = writeln!(
        out,
        "  PCLK2       {} (timers {})",
        mhz(tree.pclk2_hz),
        mhz(tree.apb2_timer_hz)
    );
    let _ = writeln!(
        out,
        "  48MHz clock {} ({}), PLLQ output {}",
        tree.clock48_source,
        if tree.clock48_source == stm32f446re::rcc::Clock48Source::MainPll {
            "checked"
        } else {
            "not checked"
        },
        mhz(tree.pll48_hz)
    );
    let _ = writeln!(out, "  min. flash  {}", tree.min_flash_latency);

    let images = config.register_images();
    let _ = writeln!(out, "  RCC_CR       0x{:08X}", images.rcc_cr);
    let _ = writeln!(out, "  RCC_PLLCFGR  0x{:08X}", images.rcc_pllcfgr);
    let _ = writeln!(out, "  RCC_CFGR     0x{:08X}", images.rcc_cfgr);
    let _ = writeln!(out, "  RCC_DCKCFGR2 0x{:08X}", images.rcc_dckcfgr2);
    let _ = writeln!(out, "  FLASH_ACR    0x{:08X}", images.flash_acr);
    let _ = writeln!(out, "  PWR_CR       0x{:08X}", images.pwr_cr);
    out
}

/// One line of `check` output.
pub fn check_line(board: Board, what: &str, failure: Option<&str>) -> String {
    match failure {
        None => format!("{} {} {}", "ok".green().bold(), board.id(), what),
        Some(error) => format!("{} {} {}: {}", "FAIL".red().bold(), board.id(), what, error),
    }
}
