// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Errors reported when a board pin map does not fit its chip.

use core::fmt;

use crate::bus::{Bus, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinError<P> {
    /// A default bus pin does not exist on the chip package.
    UnknownBusPin { role: Role, pin: P },
    /// An ignored pin does not exist on the chip package.
    UnknownIgnoredPin(P),
    /// A pin owned by a fixed-function peripheral is not ignored, so user
    /// code could claim it.
    FixedFunctionNotIgnored(P),
    /// A default bus pin is also in the ignored set.
    IgnoredBusPin { role: Role, pin: P },
    /// The same pin is assigned to two roles.
    DuplicatePin { first: Role, second: Role, pin: P },
    /// No peripheral instance of the chip can serve the bus on these pins.
    NoPeripheral(Bus),
}

impl<P: fmt::Display> fmt::Display for PinError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::UnknownBusPin { role, pin } => {
                write!(f, "{} pin {} does not exist on this chip", role, pin)
            }
            PinError::UnknownIgnoredPin(pin) => {
                write!(f, "ignored pin {} does not exist on this chip", pin)
            }
            PinError::FixedFunctionNotIgnored(pin) => write!(
                f,
                "pin {} is used internally by the chip but is not ignored",
                pin
            ),
            PinError::IgnoredBusPin { role, pin } => {
                write!(f, "{} pin {} is in the ignored set", role, pin)
            }
            PinError::DuplicatePin { first, second, pin } => {
                write!(f, "pin {} is assigned to both {} and {}", pin, first, second)
            }
            PinError::NoPeripheral(bus) => {
                write!(f, "no peripheral can drive the default {} bus pins", bus)
            }
        }
    }
}

impl<P: fmt::Debug + fmt::Display> core::error::Error for PinError<P> {}
