// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! x87 low-level assembly operations
//!
//! The only code in the crate that issues FPU instructions. The non-waiting
//! forms are used throughout so a pending unmasked exception is never
//! delivered from inside an accessor.

use core::arch::asm;

/// Load the x87 control word (`fldcw`).
#[inline]
pub fn load_control_word(cw: u16) {
    // SAFETY: fldcw reads two bytes from a live local and accepts any u16.
    unsafe {
        asm!(
            "fldcw word ptr [{}]",
            in(reg) &cw,
            options(nostack, readonly, preserves_flags),
        );
    }
}

/// Store the x87 control word (`fnstcw`).
#[inline]
pub fn store_control_word() -> u16 {
    let mut cw: u16 = 0;
    // SAFETY: fnstcw writes two bytes into a live local.
    unsafe {
        asm!(
            "fnstcw word ptr [{}]",
            in(reg) &mut cw,
            options(nostack, preserves_flags),
        );
    }
    cw
}

/// Store the x87 status word (`fnstsw`).
#[inline]
pub fn store_status_word() -> u16 {
    let sw: u16;
    // SAFETY: fnstsw only writes ax.
    unsafe {
        asm!(
            "fnstsw ax",
            out("ax") sw,
            options(nomem, nostack, preserves_flags),
        );
    }
    sw
}

/// Clear every pending x87 exception (`fnclex`).
///
/// Resets the exception flags, the error summary and the busy bit.
#[inline]
pub fn clear_exceptions() {
    // SAFETY: fnclex only modifies the x87 status word.
    unsafe {
        asm!("fnclex", options(nomem, nostack, preserves_flags));
    }
}
