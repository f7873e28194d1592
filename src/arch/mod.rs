// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Architecture-specific FPU accessors
//!
//! - x86 / x86-64: the x87 control and status words, per thread
//! - aarch64 and every other target: process-wide shadow registers
//!
//! FPCR/FPSR on aarch64 are not touched yet; callers there get
//! read-your-writes behavior but no effect on computation.

// Architecture traits (interface)
pub mod arch_traits;

// Software registers, usable on every target
pub mod shadow;

// Architecture-specific implementations
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

/// Accessor selected for the build target.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub type NativeFpu = x86::X87Fpu;

/// Accessor selected for the build target.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub type NativeFpu = shadow::ShadowFpu;
