//! JSONL exporter: one JSON object per row, one row per line.

use crate::error::ExportError;
use crate::{ExportMetrics, DEFAULT_BUFFER_SIZE};
use martgen_core::{CellValue, Table};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write a table as newline-delimited JSON.
///
/// Same contract as the CSV exporter: parent directories are created,
/// existing files are overwritten, and filesystem failures carry the
/// attempted path.
pub fn export_jsonl<P: AsRef<Path>>(table: &Table, path: P) -> Result<ExportMetrics, ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::io(path, e))?;
        }
    }

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    let mut metrics = ExportMetrics::default();
    for row in &table.rows {
        let mut object = Map::with_capacity(table.columns.len());
        for column in &table.columns {
            let value = row.get(column).map(cell_to_json).unwrap_or(Value::Null);
            object.insert(column.clone(), value);
        }
        serde_json::to_writer(&mut writer, &Value::Object(object)).map_err(|e| {
            ExportError::Json {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        writeln!(writer).map_err(|e| ExportError::io(path, e))?;
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

/// Convert a cell to its JSON representation.
fn cell_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Int(i) => Value::from(*i),
        CellValue::Decimal { value, .. } => value
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Uuid(u) => Value::String(u.to_string()),
        CellValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        CellValue::DateTime(dt) => Value::String(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        CellValue::Null => Value::Null,
    }
}
