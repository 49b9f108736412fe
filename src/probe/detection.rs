//! Runtime CPU capability detection
//!
//! Detects the capabilities the hot loop depends on and caches them for the
//! lifetime of the process. Hardware capability cannot change mid-run, so
//! every caller sees the same snapshot.

use std::fmt;
use std::thread;

use once_cell::sync::Lazy;

/// Hardware capabilities of the current host, detected once at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Whether 256-bit wide SIMD integer arithmetic (AVX2) is available.
    /// Always `false` on non-x86_64 architectures; the hot loop is written
    /// against 256-bit x86 vectors.
    pub has_avx2: bool,
    /// Number of logical execution contexts the scheduler can place work on,
    /// at least 1 on any host
    pub logical_cores: usize,
}

static HOST_CAPABILITIES: Lazy<HostCapabilities> = Lazy::new(HostCapabilities::detect);

impl HostCapabilities {
    /// Detect capabilities of the current host.
    ///
    /// Library code should prefer [`host_capabilities`]; detection is cheap,
    /// but the cached snapshot guarantees a stable answer across the run.
    pub fn detect() -> Self {
        let logical_cores = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        HostCapabilities {
            has_avx2: detect_avx2(),
            logical_cores,
        }
    }

    /// Returns a human-readable summary of the detected capabilities.
    pub fn summary(&self) -> String {
        format!(
            "AVX2: {} | logical cores: {}",
            if self.has_avx2 { "yes" } else { "no" },
            self.logical_cores
        )
    }
}

impl fmt::Display for HostCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(target_arch = "x86_64")]
fn detect_avx2() -> bool {
    is_x86_feature_detected!("avx2")
}

#[cfg(not(target_arch = "x86_64"))]
fn detect_avx2() -> bool {
    false
}

/// Cached capability snapshot for this process.
pub fn host_capabilities() -> &'static HostCapabilities {
    &HOST_CAPABILITIES
}

/// Whether the wide SIMD extension used by the hot loop is available.
///
/// Must be consulted before any burst runs; issuing AVX2 instructions on
/// unsupported hardware is an illegal-instruction fault.
pub fn probe_wide_simd_support() -> bool {
    host_capabilities().has_avx2
}

/// Number of logical cores on this host, used as the default worker fan-out.
pub fn probe_logical_core_count() -> usize {
    host_capabilities().logical_cores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_count_is_positive() {
        assert!(probe_logical_core_count() >= 1);
    }

    #[test]
    fn test_probes_are_stable_across_calls() {
        assert_eq!(probe_logical_core_count(), probe_logical_core_count());
        assert_eq!(probe_wide_simd_support(), probe_wide_simd_support());
    }

    #[test]
    fn test_cached_snapshot_matches_fresh_detection() {
        assert_eq!(*host_capabilities(), HostCapabilities::detect());
    }

    #[test]
    fn test_summary_not_empty() {
        let caps = host_capabilities();
        assert!(caps.summary().contains(&caps.logical_cores.to_string()));
        assert!(!format!("{caps}").is_empty());
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_x86_64_probe_agrees_with_std_detection() {
        assert_eq!(probe_wide_simd_support(), is_x86_feature_detected!("avx2"));
    }

    #[cfg(not(target_arch = "x86_64"))]
    #[test]
    fn test_wide_simd_absent_off_x86_64() {
        assert!(!probe_wide_simd_support());
    }
}
