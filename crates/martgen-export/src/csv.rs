//! CSV exporter.

use crate::error::ExportError;
use crate::{ExportMetrics, DEFAULT_BUFFER_SIZE};
use ::csv::Writer;
use martgen_core::Table;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Write a table as a comma-delimited UTF-8 file with a header row.
///
/// Missing destination directories are created. Values are quoted and
/// escaped by the writer, so embedded delimiters, quotes, and newlines
/// round-trip exactly; null cells become empty fields. An existing file at
/// `path` is overwritten.
pub fn export_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<ExportMetrics, ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::io(path, e))?;
        }
    }

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer
        .write_record(&table.columns)
        .map_err(|e| csv_error(path, e))?;

    let mut metrics = ExportMetrics::default();
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.get(column).map(|v| v.to_csv_field()).unwrap_or_default())
            .collect();
        writer.write_record(&record).map_err(|e| csv_error(path, e))?;
        metrics.rows_written += 1;
    }

    writer.flush().map_err(|e| ExportError::io(path, e))?;
    drop(writer);

    metrics.file_size_bytes = std::fs::metadata(path)
        .map_err(|e| ExportError::io(path, e))?
        .len();

    info!(
        "wrote {} rows ({} bytes) to '{}'",
        metrics.rows_written,
        metrics.file_size_bytes,
        path.display()
    );

    Ok(metrics)
}

fn csv_error(path: &Path, source: ::csv::Error) -> ExportError {
    ExportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
