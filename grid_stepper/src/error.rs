// error.rs - Error types for the stepper and its collaborators

use std::path::PathBuf;

/// Raised by [`GridStepper::initialize`](crate::GridStepper::initialize).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StepperError {
    #[error("invalid grid dimension {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("row task {row} failed: {source}")]
    RowTask {
        row: usize,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("buffer size mismatch: current is {current:?}, next is {next:?}")]
    DimensionMismatch {
        current: (usize, usize),
        next: (usize, usize),
    },

    #[error("compute runtime unavailable: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),

    /// For render targets outside this crate (window surfaces, GPU
    /// contexts) that can be lost or not yet created.
    #[error("render target unavailable: {0}")]
    Unavailable(String),
}

/// Failure of one driver frame, carrying whichever collaborator failed.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("compute step failed: {0}")]
    Compute(#[from] ComputeError),

    #[error("render step failed: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
