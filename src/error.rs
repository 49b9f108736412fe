//! Error types for the heatwave crate

use thiserror::Error;

/// Errors surfaced by the heat generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeatwaveError {
    /// Burst precondition violation
    #[error("Burst error: {0}")]
    BurstError(String),

    /// A worker thread could not be spawned, or died mid-burst
    #[error("Worker error: {0}")]
    WorkerError(String),
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, HeatwaveError>;

/// Construct a [`HeatwaveError::BurstError`] from format arguments.
#[macro_export]
macro_rules! burst_error {
    ($($arg:tt)*) => {
        $crate::error::HeatwaveError::BurstError(format!($($arg)*))
    };
}

/// Construct a [`HeatwaveError::WorkerError`] from format arguments.
#[macro_export]
macro_rules! worker_error {
    ($($arg:tt)*) => {
        $crate::error::HeatwaveError::WorkerError(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeatwaveError::BurstError("zero workers".to_string());
        assert_eq!(err.to_string(), "Burst error: zero workers");

        let err = HeatwaveError::WorkerError("spawn refused".to_string());
        assert_eq!(err.to_string(), "Worker error: spawn refused");
    }

    #[test]
    fn test_error_macros_format_arguments() {
        let err = worker_error!("failed to spawn worker {}", 3);
        assert_eq!(
            err,
            HeatwaveError::WorkerError("failed to spawn worker 3".to_string())
        );
    }
}
