//! Flat-file exporters for generated tables.
//!
//! Two formats, one contract: header-aware, null-as-empty, missing parent
//! directories created, every filesystem failure surfaced with the
//! attempted path.

pub mod csv;
pub mod error;
pub mod jsonl;

pub use csv::export_csv;
pub use error::ExportError;
pub use jsonl::export_jsonl;

/// Buffer size for file writers.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of data rows written (excluding the header).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}
