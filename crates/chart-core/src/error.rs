// File: crates/chart-core/src/error.rs
// Summary: Error types for alignment, dataset loading, and rendering.

use thiserror::Error;

/// Failure while aligning device series into a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A reading carried a date-time string that could not be parsed.
    /// The whole transform is rejected; no partial table is produced.
    #[error("malformed date {value:?} in reading {index} of device {device:?}")]
    MalformedDate {
        device: String,
        index: usize,
        value: String,
    },
}

/// Failure while loading a consumption dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not a valid consumption document")]
    Json(#[from] serde_json::Error),
}

/// Failure while rendering a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("failed to write {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
