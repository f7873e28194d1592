// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Trace Support
//!
//! Local trace macros routed to the `log` crate. Each calling module defines
//! its own `LOCAL_TRACE` constant; records are only emitted when it is set
//! and the `log` feature is enabled.

/// Local trace macro
macro_rules! LTRACEF {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        {
            if LOCAL_TRACE {
                log::trace!($($arg)*);
            }
        }
        #[cfg(not(feature = "log"))]
        {
            let _ = LOCAL_TRACE;
        }
    };
}

/// Local trace with return value
#[allow(unused_macros)]
macro_rules! LTRACEF_RET {
    ($ret:expr) => {{
        let ret = $ret;
        LTRACEF!("ret {:#x}", ret);
        ret
    }};
}
