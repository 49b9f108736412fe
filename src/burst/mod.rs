//! Heat bursts: fixed fan-out parallel lane arithmetic
//!
//! A burst spawns `n` independent worker threads, each running the hot loop
//! on private stack-local accumulators, and returns once every worker has
//! been joined. Workers never communicate and share no state; the join loop
//! at the end of a burst is the only synchronization point, so a caller's
//! timing loop measures real elapsed wall-clock time.

pub mod hot_loop;

use std::thread;

use log::{debug, warn};

use crate::probe::probe_wide_simd_support;
use crate::{burst_error, worker_error, Result};

pub use hot_loop::{hot_lanes, DEFAULT_ROUNDS, LANES_PER_REG};

/// Parameters for one burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstConfig {
    /// Number of worker threads to spawn
    pub workers: usize,
    /// Hot-loop rounds each worker runs before terminating
    pub rounds: u64,
}

impl BurstConfig {
    /// Burst across `workers` threads with the default bounded round count.
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            rounds: DEFAULT_ROUNDS,
        }
    }

    /// Override the per-worker round count. Tests use this to keep bursts
    /// short.
    pub fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }
}

/// Run one burst across `workers` threads with the default round count.
///
/// Blocks until every worker has terminated. See [`run_burst`] for the
/// error contract.
pub fn run_hot_burst(workers: usize) -> Result<()> {
    run_burst(&BurstConfig::new(workers))
}

/// Run one burst described by `config`.
///
/// Returns an error instead of violating preconditions:
/// - `workers == 0`
/// - wide SIMD support absent (the hot loop would fault on such hardware)
/// - a worker thread that failed to spawn or panicked
///
/// A spawn failure aborts the burst, but every worker that did start is
/// still joined before the error is returned, so a failed burst never
/// leaves stray workers running.
pub fn run_burst(config: &BurstConfig) -> Result<()> {
    if config.workers == 0 {
        return Err(burst_error!("burst requires at least one worker"));
    }
    if !probe_wide_simd_support() {
        return Err(burst_error!(
            "wide SIMD (AVX2) support is required for the hot loop"
        ));
    }

    debug!(
        "burst start: {} workers x {} rounds of {}-lane adds",
        config.workers, config.rounds, LANES_PER_REG
    );

    let rounds = config.rounds;
    let mut handles = Vec::with_capacity(config.workers);
    let mut spawn_failure = None;

    for worker in 0..config.workers {
        let builder = thread::Builder::new().name(format!("hot-worker-{worker}"));
        match builder.spawn(move || hot_loop::hot_lanes(rounds)) {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                warn!("failed to spawn worker {worker}: {e}");
                spawn_failure = Some(worker_error!("failed to spawn worker {worker}: {e}"));
                break;
            }
        }
    }

    let mut joined = 0usize;
    let mut join_failure = None;
    for handle in handles {
        match handle.join() {
            Ok(lane) => {
                joined += 1;
                debug!("worker joined, residual lane byte {lane}");
            }
            Err(_) => {
                join_failure = Some(worker_error!("a worker panicked mid-burst"));
            }
        }
    }

    if let Some(err) = spawn_failure.or(join_failure) {
        return Err(err);
    }

    debug!("burst complete: {joined} workers joined");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_workers_is_an_error() {
        let err = run_hot_burst(0).unwrap_err();
        assert!(matches!(err, crate::HeatwaveError::BurstError(_)));
    }

    #[test]
    fn test_config_builder() {
        let config = BurstConfig::new(4);
        assert_eq!(config.workers, 4);
        assert_eq!(config.rounds, DEFAULT_ROUNDS);

        let config = config.with_rounds(128);
        assert_eq!(config.rounds, 128);
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_every_worker_writes_its_own_slot() {
        // Replicates the burst fan-out by hand: each worker returns its
        // result through its own join handle, so after the joins all slots
        // are filled with the same deterministic lane value and no worker is
        // still running.
        let rounds = 1_000;
        let expected = hot_lanes(rounds);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                thread::Builder::new()
                    .name(format!("slot-worker-{i}"))
                    .spawn(move || hot_lanes(rounds))
                    .expect("spawn should succeed in tests")
            })
            .collect();

        let slots: Vec<u8> = handles
            .into_iter()
            .map(|h| h.join().expect("worker should not panic"))
            .collect();

        assert_eq!(slots.len(), 4);
        assert!(slots.iter().all(|&lane| lane == expected));
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_short_burst_completes() {
        if !probe_wide_simd_support() {
            return;
        }
        let config = BurstConfig::new(2).with_rounds(1 << 12);
        assert!(run_burst(&config).is_ok());
    }

    #[test]
    fn test_burst_without_wide_simd_is_an_error() {
        if probe_wide_simd_support() {
            return; // only meaningful on hosts without AVX2
        }
        let err = run_hot_burst(1).unwrap_err();
        assert!(matches!(err, crate::HeatwaveError::BurstError(_)));
    }
}
