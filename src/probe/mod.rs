//! Host CPU capability probing
//!
//! Answers the two hardware questions the heat generator depends on: whether
//! the 256-bit wide SIMD extension (AVX2) is present, and how many logical
//! cores the scheduler can place work on.

pub mod detection;

pub use detection::{
    host_capabilities, probe_logical_core_count, probe_wide_simd_support, HostCapabilities,
};
