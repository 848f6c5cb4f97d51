// File: crates/trendline-core/src/error.rs
// Summary: Error type for series construction and lookups.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A line needs at least two samples to have a step between them.
    #[error("series needs at least 2 samples, got {len}")]
    TooFewSamples { len: usize },
    #[error("range low ({low}) is above high ({high})")]
    InvertedRange { low: i32, high: i32 },
    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
