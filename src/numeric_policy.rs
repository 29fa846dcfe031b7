//! Process-wide floating-point trap policy.
//!
//! With traps enabled, invalid operations, division by zero, overflow and
//! underflow raise `SIGFPE` and terminate the process instead of producing
//! NaN or infinities. The engine never enables this itself; the entry point
//! calls [`enable_float_traps`] once at startup, on the main thread. The mask
//! is per thread and inherited by threads spawned afterwards.
//!
//! Supported on glibc Linux for `x86_64` and `aarch64` (where the CPU allows
//! trapping). Elsewhere [`enable_float_traps`] returns
//! [`FloatTrapError::Unsupported`].

use std::sync::OnceLock;

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FloatTrapError {
    #[error("floating-point traps are not supported on this target")]
    Unsupported,

    #[error("the floating-point environment rejected trap mask {mask:#x}")]
    Rejected { mask: i32 },
}

static TRAPS: OnceLock<Result<(), FloatTrapError>> = OnceLock::new();

/// Enables the traps for the rest of the process lifetime.
///
/// Only the first call touches the floating-point environment; later calls
/// return its outcome.
pub fn enable_float_traps() -> Result<(), FloatTrapError> {
    *TRAPS.get_or_init(|| {
        let outcome = fenv::enable();
        match outcome {
            Ok(())  => info!("floating-point traps enabled"),
            Err(e)  => warn!("floating-point traps unavailable: {e}"),
        }
        outcome
    })
}

/// Whether a previous [`enable_float_traps`] succeeded.
pub fn float_traps_enabled() -> bool {
    matches!(TRAPS.get(), Some(Ok(())))
}


#[cfg(all(target_os = "linux", target_env = "gnu", any(target_arch = "x86_64", target_arch = "aarch64")))]
mod fenv {
    use std::ffi::c_int;

    use super::FloatTrapError;

    #[cfg(target_arch = "x86_64")]
    mod flags {
        pub const FE_INVALID: i32   = 0x01;
        pub const FE_DIVBYZERO: i32 = 0x04;
        pub const FE_OVERFLOW: i32  = 0x08;
        pub const FE_UNDERFLOW: i32 = 0x10;
    }

    #[cfg(target_arch = "aarch64")]
    mod flags {
        pub const FE_INVALID: i32   = 0x01;
        pub const FE_DIVBYZERO: i32 = 0x02;
        pub const FE_OVERFLOW: i32  = 0x04;
        pub const FE_UNDERFLOW: i32 = 0x08;
    }

    #[link(name = "m")]
    extern "C" {
        fn feenableexcept(excepts: c_int) -> c_int;
    }

    pub(super) fn enable() -> Result<(), FloatTrapError> {
        let mask = flags::FE_INVALID | flags::FE_DIVBYZERO | flags::FE_OVERFLOW | flags::FE_UNDERFLOW;

        // SAFETY: glibc extension taking a plain bit mask; it only rewrites the
        // calling thread's floating-point control word.
        let previous = unsafe { feenableexcept(mask) };
        if previous == -1 {
            return Err(FloatTrapError::Rejected { mask });
        }
        Ok(())
    }
}

#[cfg(not(all(target_os = "linux", target_env = "gnu", any(target_arch = "x86_64", target_arch = "aarch64"))))]
mod fenv {
    use super::FloatTrapError;

    pub(super) fn enable() -> Result<(), FloatTrapError> {
        Err(FloatTrapError::Unsupported)
    }
}
