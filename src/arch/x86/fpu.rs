// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! x87 control/status word accessor
//!
//! The x87 state belongs to the calling thread; the kernel saves and restores
//! it on context switch, so no locking is needed here.
//!
//! Only the x87 unit is affected. SSE arithmetic is governed by MXCSR, which
//! these accessors leave alone.

use super::asm;
use crate::arch::arch_traits::ArchFpu;
use crate::x87;
use crate::Ulong;

const LOCAL_TRACE: bool = false;

/// Accessor backed by the x87 control and status words.
pub struct X87Fpu;

impl ArchFpu for X87Fpu {
    const HARDWARE: bool = true;

    fn set_fcr(fcr: Ulong) {
        let cw = x87::fcr_to_native(fcr);
        LTRACEF!("fcr {:#x} -> cw {:#06x}", fcr, cw);
        asm::load_control_word(cw);
    }

    fn get_fcr() -> Ulong {
        LTRACEF_RET!(x87::native_to_fcr(asm::store_control_word()))
    }

    /// The x87 has no way to load the status word, so `fsr` is ignored and
    /// all pending exceptions are cleared.
    fn set_fsr(fsr: Ulong) {
        LTRACEF!("fsr {:#x} ignored, clearing exceptions", fsr);
        let _ = fsr;
        asm::clear_exceptions();
    }

    fn get_fsr() -> Ulong {
        LTRACEF_RET!(x87::status_to_fsr(asm::store_status_word()))
    }
}
