// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Canonical FCR/FSR layouts
//!
//! The canonical words follow the Plan 9 386 convention. Exception bits in
//! the FCR enable traps; the same bits in the FSR record that an exception
//! occurred. Rounding and precision control are two-bit fields in the FCR.

use bitflags::bitflags;

use crate::Ulong;

bitflags! {
    /// Floating-point control word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fcr: Ulong {
        /// Trap on inexact result
        const INEX = 1 << 5;
        /// Trap on underflow (covers the denormal operand bit)
        const UNFL = (1 << 4) | (1 << 1);
        /// Trap on overflow
        const OVFL = 1 << 3;
        /// Trap on divide by zero
        const ZDIV = 1 << 2;
        /// Trap on invalid operation
        const INVAL = 1 << 0;

        const _ = !0;
    }
}

bitflags! {
    /// Floating-point status word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fsr: Ulong {
        /// Inexact result occurred
        const INEX = 1 << 5;
        /// Underflow or denormal operand occurred
        const UNFL = (1 << 4) | (1 << 1);
        /// Overflow occurred
        const OVFL = 1 << 3;
        /// Divide by zero occurred
        const ZDIV = 1 << 2;
        /// Invalid operation occurred
        const INVAL = 1 << 0;

        const _ = !0;
    }
}

/// Rounding control (FCR bits 10-11)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round to nearest even
    Nearest = 0,
    /// Round toward negative infinity
    Down = 1,
    /// Round toward positive infinity
    Up = 2,
    /// Round toward zero
    Zero = 3,
}

/// Precision control (FCR bits 8-9)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 24-bit significand
    Single = 0,
    /// 53-bit significand
    Double = 2,
    /// 64-bit significand
    Extended = 3,
}

impl Fcr {
    /// Rounding control field
    pub const ROUNDING_MASK: Ulong = 3 << 10;
    pub const ROUNDING_SHIFT: u32 = 10;

    /// Precision control field
    pub const PRECISION_MASK: Ulong = 3 << 8;
    pub const PRECISION_SHIFT: u32 = 8;

    /// All trap enables.
    pub const EXCEPTIONS: Fcr = Fcr::INEX
        .union(Fcr::UNFL)
        .union(Fcr::OVFL)
        .union(Fcr::ZDIV)
        .union(Fcr::INVAL);

    /// Read the current control word.
    pub fn load() -> Self {
        Self::from_bits_retain(crate::getfcr())
    }

    /// Install this control word.
    pub fn store(self) {
        crate::setfcr(self.bits())
    }

    pub fn rounding(self) -> Rounding {
        match (self.bits() & Self::ROUNDING_MASK) >> Self::ROUNDING_SHIFT {
            0 => Rounding::Nearest,
            1 => Rounding::Down,
            2 => Rounding::Up,
            _ => Rounding::Zero,
        }
    }

    pub fn with_rounding(self, rounding: Rounding) -> Self {
        let bits = (self.bits() & !Self::ROUNDING_MASK)
            | ((rounding as Ulong) << Self::ROUNDING_SHIFT);
        Self::from_bits_retain(bits)
    }

    /// Precision control field, or `None` for the reserved encoding.
    pub fn precision(self) -> Option<Precision> {
        match (self.bits() & Self::PRECISION_MASK) >> Self::PRECISION_SHIFT {
            0 => Some(Precision::Single),
            2 => Some(Precision::Double),
            3 => Some(Precision::Extended),
            _ => None,
        }
    }

    pub fn with_precision(self, precision: Precision) -> Self {
        let bits = (self.bits() & !Self::PRECISION_MASK)
            | ((precision as Ulong) << Self::PRECISION_SHIFT);
        Self::from_bits_retain(bits)
    }
}

impl Fsr {
    /// All exception-occurred flags.
    pub const EXCEPTIONS: Fsr = Fsr::INEX
        .union(Fsr::UNFL)
        .union(Fsr::OVFL)
        .union(Fsr::ZDIV)
        .union(Fsr::INVAL);

    /// Read the current status word.
    pub fn load() -> Self {
        Self::from_bits_retain(crate::getfsr())
    }

    /// Write this status word. Register-backed variants only clear.
    pub fn store(self) {
        crate::setfsr(self.bits())
    }

    /// Exception flags that are set, without the other status bits.
    pub fn exceptions(self) -> Self {
        self.intersection(Self::EXCEPTIONS)
    }
}
