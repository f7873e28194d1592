// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Architecture Abstraction Layer (AAL) for the FPU
//!
//! Every architecture provides one implementation of [`ArchFpu`]. The crate
//! root dispatches to the one selected for the build target, so there is no
//! runtime dispatch.

use crate::Ulong;

/// Floating-point control/status register access
///
/// Words are always in the canonical encoding; implementations translate to
/// and from the native registers. None of the operations can fail, block or
/// allocate.
pub trait ArchFpu {
    /// Whether the accessor reaches real hardware registers.
    ///
    /// `false` means the words are kept in shadow state and have no effect
    /// on floating-point computation.
    const HARDWARE: bool;

    /// Install a control word
    ///
    /// Reserved bits are not validated.
    fn set_fcr(fcr: Ulong);

    /// Read back the control word
    fn get_fcr() -> Ulong;

    /// Write the status word
    ///
    /// Implementations that cannot set individual flags ignore `fsr` and
    /// clear every pending exception instead.
    fn set_fsr(fsr: Ulong);

    /// Read the status word
    fn get_fsr() -> Ulong;
}
