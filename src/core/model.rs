// RegPlot - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::Serialize;
use std::num::ParseFloatError;

// =============================================================================
// Variable specification
// =============================================================================

/// Converts the trimmed remainder of a matching line into a sample value.
pub type ParseFn = fn(&str) -> Result<f64, ParseFloatError>;

/// Default sample conversion: decimal floating point.
pub fn parse_decimal(raw: &str) -> Result<f64, ParseFloatError> {
    raw.parse::<f64>()
}

/// One named quantity reported by the regulator.
///
/// A log line belongs to this variable when it starts with `prefix`
/// (exact, case-sensitive). The rest of the line is handed to `parse`.
#[derive(Clone)]
pub struct VariableSpec {
    /// Column name in the resulting table. Unique within an active set.
    pub name: String,

    /// Literal line prefix. Unique within an active set.
    pub prefix: String,

    /// Converter for the text following the prefix.
    pub parse: ParseFn,
}

impl VariableSpec {
    /// Create a spec using the default decimal converter.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            parse: parse_decimal,
        }
    }

    /// Whether this spec is the tick-defining `time` variable.
    pub fn is_time(&self) -> bool {
        self.name == constants::TIME
    }
}

impl std::fmt::Debug for VariableSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableSpec")
            .field("name", &self.name)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Sample table
// =============================================================================

/// A single named column of samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Column-oriented table of extracted samples.
///
/// The row index is implied by the `time` column. Other columns are never
/// longer than `time` but may be shorter when a variable skipped ticks;
/// such ragged columns are kept as extracted, not padded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleTable {
    columns: Vec<Column>,
}

impl SampleTable {
    /// Build a table from columns already in display order.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// All columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Samples of the named column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Number of rows, i.e. the number of `time` samples.
    pub fn row_count(&self) -> usize {
        self.column(constants::TIME).map_or(0, <[f64]>::len)
    }

    /// Value at (`row`, column index `col`). `None` past the end of a ragged column.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.columns.get(col)?.values.get(row).copied()
    }

    /// True if any column has a different length from `time`.
    pub fn is_ragged(&self) -> bool {
        let rows = self.row_count();
        self.columns.iter().any(|c| c.values.len() != rows)
    }

    /// Per-column sample counts and value ranges.
    pub fn column_stats(&self) -> Vec<ColumnStats> {
        let rows = self.row_count();
        self.columns
            .iter()
            .map(|c| ColumnStats::from_column(c, rows))
            .collect()
    }
}

// =============================================================================
// Column statistics
// =============================================================================

/// Summary of one column, shown in the viewer and logged after extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub name: String,
    /// Number of samples captured.
    pub samples: usize,
    /// Ticks without a sample (`row_count - samples`).
    pub missing: usize,
    /// Smallest non-NaN value.
    pub min: Option<f64>,
    /// Largest non-NaN value.
    pub max: Option<f64>,
    /// Most recent sample.
    pub last: Option<f64>,
}

impl ColumnStats {
    fn from_column(column: &Column, rows: usize) -> Self {
        let mut min: Option<f64> = None;
        let mut max: Option<f64> = None;
        for &v in column.values.iter().filter(|v| !v.is_nan()) {
            min = Some(min.map_or(v, |m| m.min(v)));
            max = Some(max.map_or(v, |m| m.max(v)));
        }
        Self {
            name: column.name.clone(),
            samples: column.values.len(),
            missing: rows.saturating_sub(column.values.len()),
            min,
            max,
            last: column.values.last().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, values: &[f64]) -> Column {
        Column {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }

    fn sample_table() -> SampleTable {
        SampleTable::from_columns(vec![
            column("time", &[0.0, 0.1, 0.2]),
            column("sensorValue", &[1.0, 3.0, 2.0]),
            column("outputSignal", &[0.5]),
        ])
    }

    #[test]
    fn test_row_count_follows_time_column() {
        assert_eq!(sample_table().row_count(), 3);
        assert_eq!(SampleTable::from_columns(vec![]).row_count(), 0);
    }

    #[test]
    fn test_cell_returns_none_for_ragged_gap() {
        let table = sample_table();
        assert_eq!(table.cell(0, 2), Some(0.5));
        assert_eq!(table.cell(1, 2), None);
        assert_eq!(table.cell(0, 9), None);
        assert!(table.is_ragged());
    }

    #[test]
    fn test_column_lookup_by_name() {
        let table = sample_table();
        assert_eq!(table.column("sensorValue"), Some(&[1.0, 3.0, 2.0][..]));
        assert!(table.column("inletValue").is_none());
        assert!(!table.has_column("inletValue"));
        assert_eq!(table.column_names(), vec!["time", "sensorValue", "outputSignal"]);
    }

    #[test]
    fn test_column_stats() {
        let stats = sample_table().column_stats();
        let sensor = &stats[1];
        assert_eq!(sensor.samples, 3);
        assert_eq!(sensor.missing, 0);
        assert_eq!(sensor.min, Some(1.0));
        assert_eq!(sensor.max, Some(3.0));
        assert_eq!(sensor.last, Some(2.0));

        let output = &stats[2];
        assert_eq!(output.samples, 1);
        assert_eq!(output.missing, 2);
    }

    #[test]
    fn test_column_stats_ignore_nan() {
        let table = SampleTable::from_columns(vec![
            column("time", &[0.0, 1.0]),
            column("error", &[f64::NAN, -2.0]),
        ]);
        let stats = table.column_stats();
        assert_eq!(stats[1].min, Some(-2.0));
        assert_eq!(stats[1].max, Some(-2.0));
    }

    #[test]
    fn test_parse_decimal_accepts_exponent_and_sign() {
        assert_eq!(parse_decimal("1e-3").unwrap(), 0.001);
        assert_eq!(parse_decimal("-4.5").unwrap(), -4.5);
        assert!(parse_decimal("warm").is_err());
    }
}
