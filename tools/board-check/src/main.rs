// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Checks board pin maps and clock trees against their chip.
//!
//! ```text
//! board-check list
//! board-check pins arduino-mkrzero
//! board-check clocks nucleo-f446re --plln 360 --overrides fast.json
//! board-check check
//! ```
//!
//! Clock parameters are resolved with the command line flags first, then the
//! overrides file, then the board's own configuration.

mod boards;
mod error;
mod overrides;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stm32f446re::clocks::ClockConfig;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use crate::boards::Board;
use crate::error::Error;
use crate::overrides::ClockFlags;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log more details, repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the known boards
    List,
    /// Print the default bus pins, ignored pins and user pins of a board
    Pins { board: Board },
    /// Print the resolved clock tree and register values of a board
    Clocks {
        board: Board,
        /// JSON file with clock parameters that replace the board's
        #[arg(long)]
        overrides: Option<PathBuf>,
        #[command(flatten)]
        flags: ClockFlags,
    },
    /// Verify every board, or only the given one
    Check { board: Option<Board> },
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// The board's clock tree with the overrides file and then the flags applied
/// on top.
fn resolve_clocks(
    board: Board,
    overrides: Option<&PathBuf>,
    flags: &ClockFlags,
) -> Result<ClockConfig, Error> {
    let mut config = board.clocks().ok_or(Error::NoClockTree(board.id()))?;
    if let Some(path) = overrides {
        let file = overrides::load(path)?;
        debug!("{}: {:?}", path.display(), file);
        config = file.apply(config);
    }
    let flags = flags.to_overrides()?;
    if !flags.is_empty() {
        debug!("command line: {:?}", flags);
    }
    Ok(flags.apply(config))
}

/// Run every verification of `board`, printing one line per check. Returns
/// whether they all passed.
fn check(board: Board) -> bool {
    let pins = board.pins();
    let pins_ok = pins.buses.is_ok();
    println!(
        "{}",
        report::check_line(board, "pins", pins.buses.as_ref().err().map(String::as_str))
    );

    let clocks_ok = match board.clocks() {
        None => true,
        Some(config) => {
            let result = config.validate();
            let failure = result.as_ref().err().map(ToString::to_string);
            println!(
                "{}",
                report::check_line(board, "clocks", failure.as_deref())
            );
            result.is_ok()
        }
    };
    pins_ok && clocks_ok
}

fn run(cli: Cli) -> Result<bool, Error> {
    match cli.command {
        Command::List => {
            print!("{}", report::board_list());
            Ok(true)
        }
        Command::Pins { board } => {
            let pins = board.pins();
            print!("{}", report::pins(&pins));
            Ok(pins.buses.is_ok())
        }
        Command::Clocks {
            board,
            overrides,
            flags,
        } => {
            let config = resolve_clocks(board, overrides.as_ref(), &flags)?;
            let result = config.validate();
            println!("{} ({})", board.name(), board.mcu());
            print!("{}", report::clocks(&config, &result));
            Ok(result.is_ok())
        }
        Command::Check { board } => {
            let boards = match board {
                Some(board) => vec![board],
                None => Board::ALL.to_vec(),
            };
            let failed = boards.iter().filter(|board| !check(**board)).count();
            info!("{} of {} boards passed", boards.len() - failed, boards.len());
            Ok(failed == 0)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stm32f446re::rcc::{HseMode, PLLP};

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from([
            "board-check",
            "-vv",
            "clocks",
            "nucleo-f446re",
            "--plln",
            "360",
            "--pllp",
            "4",
        ])
        .unwrap();
        assert_eq!(2, cli.verbose);
        match cli.command {
            Command::Clocks { board, flags, .. } => {
                assert_eq!(Board::NucleoF446re, board);
                assert_eq!(Some(360), flags.plln);
                assert_eq!(Some(4), flags.pllp);
            }
            command => panic!("unexpected command {:?}", command),
        }

        assert!(Cli::try_parse_from(["board-check", "pins", "uno"]).is_err());
    }

    #[test]
    fn flags_win_over_file_and_board() {
        let path = std::env::temp_dir().join("board-check-flags-win.json");
        std::fs::write(&path, r#"{ "plln": 288, "pllp": 4, "pllq": 6 }"#).unwrap();
        let flags = ClockFlags {
            pllp: Some(2),
            ..ClockFlags::default()
        };
        let config = resolve_clocks(Board::NucleoF446re, Some(&path), &flags).unwrap();
        std::fs::remove_file(&path).unwrap();

        // From the flags
        assert_eq!(PLLP::DivideBy2, config.pllp);
        // From the file
        assert_eq!(288, config.plln);
        assert_eq!(6, config.pllq);
        // From the board
        assert_eq!(HseMode::Bypass, config.hse_mode);
    }

    #[test]
    fn board_without_clock_tree() {
        assert!(matches!(
            resolve_clocks(Board::ArduinoMkrzero, None, &ClockFlags::default()),
            Err(Error::NoClockTree("arduino-mkrzero"))
        ));
    }

    #[test]
    fn every_board_passes() {
        for board in Board::ALL {
            assert!(check(board), "{}", board.id());
        }
    }

    #[test]
    fn verbosity() {
        assert_eq!(LevelFilter::WARN, level(0));
        assert_eq!(LevelFilter::DEBUG, level(2));
        assert_eq!(LevelFilter::TRACE, level(9));
    }
}
