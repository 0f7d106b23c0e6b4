// RegPlot - app/pipeline.rs
//
// End-to-end orchestration: read a log, resolve the active variables,
// extract the table, and optionally write it to disk.

use crate::core::export::{self, ExportFormat};
use crate::core::extract::{self, ExtractResult};
use crate::core::model::{SampleTable, VariableSpec};
use crate::core::variables;
use crate::platform::fs;
use crate::util::error::{ExportError, ParseError};
use std::path::Path;

/// Read `path` and extract its samples.
///
/// `extras` are appended to the built-in (and, if reported, inlet) variables.
pub fn load_table(path: &Path, extras: &[VariableSpec]) -> Result<ExtractResult, ParseError> {
    let content = fs::read_log_file(path)?;
    let specs = variables::active_variables(&content, extras);

    tracing::info!(
        file = %path.display(),
        variables = ?specs.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        "Extracting samples"
    );

    let result = extract::extract_samples(&content, path, &specs)?;

    tracing::info!(
        rows = result.table.row_count(),
        columns = result.table.columns().len(),
        lines = result.lines_processed,
        dropped = result.dropped_samples,
        "Sample table built"
    );
    log_table_summary(&result.table);

    Ok(result)
}

/// Log per-column counts, and warn when columns ended up ragged.
pub fn log_table_summary(table: &SampleTable) {
    for stats in table.column_stats() {
        tracing::debug!(
            column = %stats.name,
            samples = stats.samples,
            missing = stats.missing,
            min = ?stats.min,
            max = ?stats.max,
            "Column summary"
        );
    }
    if table.is_ragged() {
        let short: Vec<String> = table
            .column_stats()
            .into_iter()
            .filter(|s| s.missing > 0)
            .map(|s| format!("{} ({} missing)", s.name, s.missing))
            .collect();
        tracing::warn!(
            rows = table.row_count(),
            columns = ?short,
            "Some variables did not report on every tick; their samples are not aligned to time"
        );
    }
}

/// Write `table` to `path`, choosing CSV or JSON from the file extension.
///
/// Returns the number of data rows written. A failed export leaves no
/// partial file behind.
pub fn export_table_to_file(
    table: &SampleTable,
    path: &Path,
    precision: usize,
) -> Result<usize, ExportError> {
    let format = ExportFormat::from_path(path);

    let rows = fs::write_export_file(path, |writer| match format {
        ExportFormat::Csv => export::export_csv(table, writer, precision, path),
        ExportFormat::Json => export::export_json(table, writer, path),
    })?;

    tracing::info!(
        path = %path.display(),
        format = ?format,
        rows,
        "Table exported"
    );
    Ok(rows)
}
