// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! x87 word encoding
//!
//! Pure conversions between the canonical FCR/FSR words and the x87 control
//! and status words. These carry no instructions, so they build on every
//! target; the register-backed accessor lives in `arch::x86`.
//!
//! The x87 control word is a 16-bit register:
//!
//! | 12-15 | 10-11 | 8-9 | 6-7 |  5 |  4 |  3 |  2 |  1 |  0 |
//! |------:|------:|----:|----:|---:|---:|---:|---:|---:|---:|
//! |       | RC    | PC  |     | PM | UM | OM | ZM | DM | IM |
//!
//! The canonical word uses the same layout with the six exception bits
//! inverted: canonical 1 means the trap is enabled, native 1 means masked.

use crate::Ulong;

/// Exception bits whose sense differs between canonical and native words.
pub const EXCEPTION_INVERT_MASK: Ulong = 0x3f;

/// Width of the native control and status words.
pub const NATIVE_WORD_MASK: Ulong = 0xffff;

/// Control bits the x87 implements: exception masks, PC and RC.
///
/// Bit 6 is reserved and bit 12 (infinity control) is ignored by every
/// FPU since the 387, so neither is guaranteed to read back as written.
pub const DEFINED_CONTROL_BITS: Ulong = 0x0f3f;

/// Control word loaded by `fninit`.
pub const DEFAULT_CONTROL_WORD: u16 = 0x037f;

/// Canonical control word to native control word.
#[inline]
pub const fn fcr_to_native(fcr: Ulong) -> u16 {
    ((fcr ^ EXCEPTION_INVERT_MASK) & NATIVE_WORD_MASK) as u16
}

/// Native control word to canonical control word.
#[inline]
pub const fn native_to_fcr(cw: u16) -> Ulong {
    (cw as Ulong ^ EXCEPTION_INVERT_MASK) & NATIVE_WORD_MASK
}

/// Native status word to canonical status word. The sense already matches.
#[inline]
pub const fn status_to_fsr(sw: u16) -> Ulong {
    sw as Ulong & NATIVE_WORD_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(v: Ulong) -> Ulong {
        (v ^ EXCEPTION_INVERT_MASK) & NATIVE_WORD_MASK
    }

    #[test]
    fn test_transform_is_involution() {
        for v in 0..=0x3_ffff {
            assert_eq!(transform(transform(v)), v & NATIVE_WORD_MASK);
        }
        for v in [Ulong::MAX, 0xdead_beef_0000_003f, 1 << 63, 0x1_0000] {
            assert_eq!(transform(transform(v)), v & NATIVE_WORD_MASK);
        }
    }

    #[test]
    fn test_conversions_agree_with_transform() {
        for v in 0..=0xffff {
            assert_eq!(fcr_to_native(v) as Ulong, transform(v));
            assert_eq!(native_to_fcr(v as u16), transform(v));
            assert_eq!(native_to_fcr(fcr_to_native(v)), v);
        }
    }

    #[test]
    fn test_fcr_to_native_truncates() {
        assert_eq!(fcr_to_native(0xffff_0000), 0x3f);
        assert_eq!(fcr_to_native(0x1_0f3f), 0x0f00);
    }

    #[test]
    fn test_scenario_zero_and_all_enabled() {
        assert_eq!(fcr_to_native(0x0), 0x3f);
        assert_eq!(fcr_to_native(0x3f), 0x0);
        assert_eq!(native_to_fcr(0x3f), 0x0);
        assert_eq!(native_to_fcr(0x0), 0x3f);
    }

    #[test]
    fn test_default_control_word() {
        // Everything masked, extended precision, round to nearest.
        assert_eq!(native_to_fcr(DEFAULT_CONTROL_WORD) & DEFINED_CONTROL_BITS, 0x0300);
    }

    #[test]
    fn test_status_passthrough() {
        assert_eq!(status_to_fsr(0x0000), 0);
        assert_eq!(status_to_fsr(0x3804), 0x3804);
        assert_eq!(status_to_fsr(0xffff), 0xffff);
    }
}
