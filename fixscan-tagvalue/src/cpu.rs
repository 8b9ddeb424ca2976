/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! CPU capability detection.
//!
//! The vectorized scanner needs AVX-512F and AVX-512BW, plus an OS that
//! saves the opmask and ZMM register state on context switch. The standard
//! library's feature detection checks both the CPUID bits and XCR0, so a
//! `true` answer here means the instructions are safe to execute.

use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

static AVX512_ENABLED: OnceLock<bool> = OnceLock::new();

/// Checks whether the current CPU and OS support the AVX-512 scanner.
///
/// Always returns `false` on targets other than `x86_64`. Never panics;
/// any missing feature yields `false`, which selects the scalar path.
#[must_use]
pub fn has_avx512_support() -> bool {
    detect_avx512()
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn detect_avx512() -> bool {
    is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw")
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn detect_avx512() -> bool {
    false
}

/// Returns the process-wide AVX-512 capability flag.
///
/// Detection runs once; every later call reads the cached answer.
#[inline]
pub fn avx512_enabled() -> bool {
    *AVX512_ENABLED.get_or_init(|| {
        let enabled = has_avx512_support();
        debug!(avx512 = enabled, "cpu capability detection");
        enabled
    })
}

/// The 64-byte lane kernel used by the vectorized scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKernel {
    /// AVX-512BW compare-to-mask instructions.
    Avx512,
    /// Portable byte comparison that builds the same 64-bit mask.
    Portable,
}

impl fmt::Display for LaneKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avx512 => write!(f, "AVX-512"),
            Self::Portable => write!(f, "portable"),
        }
    }
}

/// Returns the lane kernel [`find_delimiters_simd`](crate::find_delimiters_simd) runs on this host.
#[inline]
#[must_use]
pub fn scan_kernel() -> LaneKernel {
    if avx512_enabled() {
        LaneKernel::Avx512
    } else {
        LaneKernel::Portable
    }
}
