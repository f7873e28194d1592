// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Rustux Floating-Point Control (libfpu)
//!
//! Plan 9 style access to the floating-point control register (FCR) and
//! floating-point status register (FSR):
//! - `setfcr` / `getfcr` install and read rounding and exception-enable state
//! - `setfsr` / `getfsr` clear and read sticky exception flags
//!
//! Words are exchanged in the canonical Plan 9 encoding (see [`Fcr`] and
//! [`Fsr`]). Each architecture translates that encoding to whatever its
//! hardware provides; the implementation is picked at build time and exported
//! as [`NativeFpu`].
//!
//! # Examples
//!
//! ```no_run
//! use fpu::{Fcr, Fsr, Rounding};
//!
//! let saved = fpu::getfcr();
//! Fcr::load().with_rounding(Rounding::Zero).store();
//!
//! // ... computation ...
//!
//! if Fsr::load().contains(Fsr::ZDIV) {
//!     fpu::setfsr(0);
//! }
//! fpu::setfcr(saved);
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod trace;

pub mod arch;
pub mod flags;
pub mod x87;

pub use arch::arch_traits::ArchFpu;
pub use arch::NativeFpu;
pub use flags::{Fcr, Fsr, Precision, Rounding};

/// Machine word used for control and status values.
///
/// Wider than any native register so nothing is truncated at this boundary.
pub type Ulong = u64;

/// Install a new floating-point control word.
#[inline]
pub fn setfcr(fcr: Ulong) {
    NativeFpu::set_fcr(fcr)
}

/// Read the current floating-point control word.
#[inline]
pub fn getfcr() -> Ulong {
    NativeFpu::get_fcr()
}

/// Write the floating-point status word.
///
/// On register-backed variants this may only be able to clear flags; see
/// [`ArchFpu::set_fsr`].
#[inline]
pub fn setfsr(fsr: Ulong) {
    NativeFpu::set_fsr(fsr)
}

/// Read the current floating-point status word.
#[inline]
pub fn getfsr() -> Ulong {
    NativeFpu::get_fsr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::shadow::SHADOW_TEST_LOCK;

    #[test]
    fn test_native_fcr_round_trip() {
        let _guard = SHADOW_TEST_LOCK.lock();
        let saved = getfcr();
        setfsr(0);
        let value = (Fcr::ZDIV | Fcr::INVAL).with_rounding(Rounding::Up).bits();

        setfcr(value);
        let observed = getfcr();
        setfcr(saved);

        let mask = if NativeFpu::HARDWARE {
            x87::DEFINED_CONTROL_BITS
        } else {
            Ulong::MAX
        };
        assert_eq!(observed & mask, value);
    }

    #[test]
    fn test_free_functions_match_native() {
        let _guard = SHADOW_TEST_LOCK.lock();
        assert_eq!(getfcr(), NativeFpu::get_fcr());
        if NativeFpu::HARDWARE {
            setfsr(0);
            assert_eq!(getfsr() & Fsr::EXCEPTIONS.bits(), 0);
        }
    }
}
