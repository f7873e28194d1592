// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! x86 / x86-64 FPU support

pub mod asm;
pub mod fpu;

pub use fpu::X87Fpu;
