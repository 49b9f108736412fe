//! heatwave: deliberate CPU heat generation through wide SIMD arithmetic
//!
//! The crate does exactly two things: probe the host CPU for the
//! capabilities the workload depends on (AVX2 support and the logical core
//! count), and run fixed-length "bursts" of 256-bit lane additions across
//! independent worker threads, one per logical core. A burst returns only
//! after every worker has been joined, so a caller can drive a wall-clock
//! heating loop by invoking bursts back to back.
//!
//! Workers never communicate and share no state; the only observable effect
//! of a burst is CPU utilization.
//!
//! ```no_run
//! # fn main() -> heatwave::Result<()> {
//! use heatwave::prelude::*;
//!
//! if probe_wide_simd_support() {
//!     run_hot_burst(probe_logical_core_count())?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod burst;
pub mod error;
pub mod probe;

pub use error::{HeatwaveError, Result};

/// Commonly used items, re-exported for convenience.
pub mod prelude {
    pub use crate::burst::{run_burst, run_hot_burst, BurstConfig};
    pub use crate::error::{HeatwaveError, Result};
    pub use crate::probe::{
        host_capabilities, probe_logical_core_count, probe_wide_simd_support, HostCapabilities,
    };
}
