// RegPlot - core/export.rs
//
// CSV and JSON export of a sample table.
// Core layer: writes to any Write trait object.

use crate::core::model::{Column, SampleTable};
use crate::util::constants;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Output format, chosen from the destination file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; anything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(constants::JSON_EXTENSION) => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Export the table as CSV.
///
/// Header is the column names; there is no index column. Each value is
/// written with `precision` decimal places. Cells past the end of a ragged
/// column and NaN samples are left empty. Returns the number of data rows written.
pub fn export_csv<W: Write>(
    table: &SampleTable,
    writer: W,
    precision: usize,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: export_path.to_path_buf(),
        source,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(table.column_names())
        .map_err(csv_err)?;

    let width = table.columns().len();
    let rows = table.row_count();
    let mut record: Vec<String> = Vec::with_capacity(width);
    for row in 0..rows {
        record.clear();
        record.extend((0..width).map(|col| {
            table
                .cell(row, col)
                .filter(|v| !v.is_nan())
                .map(|v| format!("{v:.precision$}"))
                .unwrap_or_default()
        }));
        csv_writer.write_record(&record).map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(rows)
}

/// Serialised shape of a JSON export.
#[derive(Serialize)]
struct JsonTable<'a> {
    rows: usize,
    columns: &'a [Column],
}

/// Export the table as a pretty-printed JSON object with full-precision values.
pub fn export_json<W: Write>(
    table: &SampleTable,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let doc = JsonTable {
        rows: table.row_count(),
        columns: table.columns(),
    };
    serde_json::to_writer_pretty(writer, &doc).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(doc.rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table() -> SampleTable {
        SampleTable::from_columns(vec![
            Column {
                name: "time".to_string(),
                values: vec![0.0, 0.1, 0.2],
            },
            Column {
                name: "sensorValue".to_string(),
                values: vec![291.456, 292.004, 293.5],
            },
            Column {
                name: "outputSignal".to_string(),
                values: vec![0.126],
            },
        ])
    }

    #[test]
    fn test_csv_export() {
        let mut buf = Vec::new();
        let count = export_csv(&make_table(), &mut buf, 2, Path::new("out.csv")).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "time,sensorValue,outputSignal");
        assert_eq!(lines[1], "0.00,291.46,0.13");
        assert_eq!(lines[2], "0.10,292.00,");
        assert_eq!(lines[3], "0.20,293.50,");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_precision() {
        let mut buf = Vec::new();
        export_csv(&make_table(), &mut buf, 0, Path::new("out.csv")).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().nth(1), Some("0,291,0"));
    }

    #[test]
    fn test_csv_empty_table_writes_header_only() {
        let table = SampleTable::from_columns(vec![Column {
            name: "time".to_string(),
            values: vec![],
        }]);
        let mut buf = Vec::new();
        let count = export_csv(&table, &mut buf, 2, Path::new("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "time\n");
    }

    #[test]
    fn test_csv_nan_is_empty_cell() {
        let table = SampleTable::from_columns(vec![
            Column {
                name: "time".to_string(),
                values: vec![0.0, 1.0],
            },
            Column {
                name: "error".to_string(),
                values: vec![f64::NAN, -0.5],
            },
            Column {
                name: "outputSignal".to_string(),
                values: vec![f64::INFINITY, 0.25],
            },
        ]);
        let mut buf = Vec::new();
        export_csv(&table, &mut buf, 2, Path::new("out.csv")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "time,error,outputSignal\n0.00,,inf\n1.00,-0.50,0.25\n"
        );
    }

    #[test]
    fn test_json_export() {
        let mut buf = Vec::new();
        let count = export_json(&make_table(), &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 3);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["rows"], 3);
        assert_eq!(value["columns"][1]["name"], "sensorValue");
        assert_eq!(value["columns"][1]["values"][0], 291.456);
        assert_eq!(value["columns"][2]["values"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("a.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("a")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), ExportFormat::Csv);
    }
}
