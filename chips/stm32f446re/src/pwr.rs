// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Power controller: regulator voltage scaling and over-drive.

use core::fmt;

use tock_registers::{register_bitfields, LocalRegisterCopy};

register_bitfields![u32,
    CR [
        /// Over-drive switching enabled
        ODSWEN OFFSET(17) NUMBITS(1) [],
        /// Over-drive enable
        ODEN OFFSET(16) NUMBITS(1) [],
        /// Regulator voltage scaling output selection
        VOS OFFSET(14) NUMBITS(2) [
            Scale3 = 0b01,
            Scale2 = 0b10,
            Scale1 = 0b11,
        ],
        /// Flash power-down in Stop mode
        FPDS OFFSET(9) NUMBITS(1) [],
        /// Disable backup domain write protection
        DBP OFFSET(8) NUMBITS(1) [],
        /// Power-down deepsleep
        PDDS OFFSET(1) NUMBITS(1) [],
        /// Low-power deepsleep
        LPDS OFFSET(0) NUMBITS(1) []
    ]
];

/// PWR_CR after reset
pub const CR_RESET_VALUE: u32 = 0x0000_C000;

/// Main regulator output voltage scaling. Scale 1 is the highest voltage and
/// allows the highest system clock frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoltageScale {
    Scale1 = 0b11,
    Scale2 = 0b10,
    Scale3 = 0b01,
}

impl VoltageScale {
    /// Scale number as used in the reference manual (1, 2 or 3).
    pub const fn number(self) -> u8 {
        match self {
            VoltageScale::Scale1 => 1,
            VoltageScale::Scale2 => 2,
            VoltageScale::Scale3 => 3,
        }
    }

    /// Over-drive can only be enabled in scale 1 and scale 2.
    pub const fn supports_overdrive(self) -> bool {
        match self {
            VoltageScale::Scale1 | VoltageScale::Scale2 => true,
            VoltageScale::Scale3 => false,
        }
    }
}

impl TryFrom<u8> for VoltageScale {
    type Error = &'static str;

    fn try_from(item: u8) -> Result<Self, Self::Error> {
        match item {
            1 => Ok(VoltageScale::Scale1),
            2 => Ok(VoltageScale::Scale2),
            3 => Ok(VoltageScale::Scale3),
            _ => Err("Error value for VoltageScale::try_from"),
        }
    }
}

impl fmt::Display for VoltageScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale {}", self.number())
    }
}

/// PWR_CR value selecting `scale`, with over-drive enabled and switched in if
/// requested.
pub fn cr_image(scale: VoltageScale, overdrive: bool) -> u32 {
    let mut cr: LocalRegisterCopy<u32, CR::Register> = LocalRegisterCopy::new(CR_RESET_VALUE);
    cr.modify(CR::VOS.val(scale as u32));
    if overdrive {
        cr.modify(CR::ODEN::SET + CR::ODSWEN::SET);
    }
    cr.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vos_encoding() {
        assert_eq!(0xC000, cr_image(VoltageScale::Scale1, false));
        assert_eq!(0x8000, cr_image(VoltageScale::Scale2, false));
        assert_eq!(0x4000, cr_image(VoltageScale::Scale3, false));
        assert_eq!(0x3_C000, cr_image(VoltageScale::Scale1, true));
    }

    #[test]
    fn scale_numbers() {
        assert_eq!(Ok(VoltageScale::Scale2), VoltageScale::try_from(2));
        assert!(VoltageScale::try_from(0).is_err());
        assert!(VoltageScale::try_from(4).is_err());
        assert!(!VoltageScale::Scale3.supports_overdrive());
    }
}
