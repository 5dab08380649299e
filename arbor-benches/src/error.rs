//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use arbor_core::{GraphError, HeapError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Graph construction or an algorithm rejected its input.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// Heap construction failed.
    #[error("heap construction failed: {0}")]
    Heap(#[from] HeapError),
}
