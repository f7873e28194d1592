// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Shadow FPU registers
//!
//! Stand-in for targets where the control and status registers cannot be
//! reached. Values are stored and returned verbatim and never influence
//! actual floating-point behavior.
//!
//! The state is process-wide, not per thread: a `setfcr` on one thread is
//! visible to `getfcr` on every other thread. Accesses are relaxed, so there
//! is no ordering between threads either. Callers that relied on this
//! placeholder sharing its state keep working; do not make it thread-local.

use core::sync::atomic::{AtomicU64, Ordering};

use super::arch_traits::ArchFpu;
use crate::Ulong;

const LOCAL_TRACE: bool = false;

/// A software control/status register pair.
pub struct ShadowRegisters {
    fcr: AtomicU64,
    fsr: AtomicU64,
}

impl ShadowRegisters {
    /// Both words start at 0.
    pub const fn new() -> Self {
        Self {
            fcr: AtomicU64::new(0),
            fsr: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn fcr(&self) -> Ulong {
        self.fcr.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_fcr(&self, fcr: Ulong) {
        self.fcr.store(fcr, Ordering::Relaxed)
    }

    #[inline]
    pub fn fsr(&self) -> Ulong {
        self.fsr.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_fsr(&self, fsr: Ulong) {
        self.fsr.store(fsr, Ordering::Relaxed)
    }
}

impl Default for ShadowRegisters {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide shadow registers behind [`ShadowFpu`].
pub static SHADOW: ShadowRegisters = ShadowRegisters::new();

/// Accessor backed by [`SHADOW`].
pub struct ShadowFpu;

impl ArchFpu for ShadowFpu {
    const HARDWARE: bool = false;

    fn set_fcr(fcr: Ulong) {
        LTRACEF!("shadow fcr {:#x}", fcr);
        SHADOW.set_fcr(fcr);
    }

    fn get_fcr() -> Ulong {
        SHADOW.fcr()
    }

    fn set_fsr(fsr: Ulong) {
        LTRACEF!("shadow fsr {:#x}", fsr);
        SHADOW.set_fsr(fsr);
    }

    fn get_fsr() -> Ulong {
        SHADOW.fsr()
    }
}

/// Held by tests that read or write [`SHADOW`].
#[cfg(test)]
pub(crate) static SHADOW_TEST_LOCK: spin::Mutex<()> = spin::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [Ulong; 8] = [
        0,
        1,
        0x3f,
        0xffff,
        0x1_0000,
        0x0000_0001_0000_0000,
        0xdead_beef_cafe_f00d,
        Ulong::MAX,
    ];

    #[test]
    fn test_default_state() {
        let regs = ShadowRegisters::new();
        assert_eq!(regs.fcr(), 0);
        assert_eq!(regs.fsr(), 0);
        assert_eq!(ShadowRegisters::default().fcr(), 0);
    }

    #[test]
    fn test_exact_round_trip() {
        let regs = ShadowRegisters::new();
        for &v in WORDS.iter() {
            regs.set_fcr(v);
            assert_eq!(regs.fcr(), v);
            regs.set_fsr(!v);
            assert_eq!(regs.fsr(), !v);
            assert_eq!(regs.fcr(), v);
        }
    }

    #[test]
    fn test_accessor_round_trip() {
        let _guard = SHADOW_TEST_LOCK.lock();
        for &v in WORDS.iter() {
            ShadowFpu::set_fcr(v);
            assert_eq!(ShadowFpu::get_fcr(), v);
            ShadowFpu::set_fsr(v);
            assert_eq!(ShadowFpu::get_fsr(), v);
        }
        ShadowFpu::set_fcr(0);
        ShadowFpu::set_fsr(0);
    }

    #[test]
    fn test_set_fsr_is_not_a_clear() {
        let _guard = SHADOW_TEST_LOCK.lock();
        ShadowFpu::set_fsr(0x04);
        assert_eq!(ShadowFpu::get_fsr(), 0x04);
        ShadowFpu::set_fsr(0x21);
        assert_eq!(ShadowFpu::get_fsr(), 0x21);
        ShadowFpu::set_fsr(0);
    }

    #[test]
    fn test_state_is_shared_across_threads() {
        let _guard = SHADOW_TEST_LOCK.lock();
        std::thread::spawn(|| {
            ShadowFpu::set_fcr(0x0c3f);
            ShadowFpu::set_fsr(0x05);
        })
        .join()
        .unwrap();
        assert_eq!(ShadowFpu::get_fcr(), 0x0c3f);
        assert_eq!(ShadowFpu::get_fsr(), 0x05);
        ShadowFpu::set_fcr(0);
        ShadowFpu::set_fsr(0);
    }
}
