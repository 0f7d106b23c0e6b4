// RegPlot - core/extract.rs
//
// Prefix-dispatch sample extraction.
// Core layer: works on text already read by the caller, never touches the
// filesystem directly.
//
// Alignment: `time` starts a new tick. Any other variable accepts a sample
// only while it has fewer samples than `time`, so each variable reports at
// most once per tick. Ticks a variable skips are not padded, which can leave
// ragged columns.

use crate::core::model::{Column, SampleTable, VariableSpec};
use crate::util::error::ParseError;
use crate::util::logging;
use std::path::Path;

/// Outcome of scanning one log.
#[derive(Debug)]
pub struct ExtractResult {
    /// Extracted samples, columns in the order of the specs passed in.
    pub table: SampleTable,
    /// Total lines scanned.
    pub lines_processed: u64,
    /// Prefix matches discarded by the alignment rule.
    pub dropped_samples: u64,
}

/// Split on `\n`, `\r\n` or a bare `\r`. A trailing terminator does not
/// start an extra empty line.
fn lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Extract every sample described by `specs` from `content`.
///
/// `file_path` is only used for error context. Each line is tested against
/// every spec in order. A value that fails conversion aborts the whole
/// extraction; there is no partial result.
pub fn extract_samples(
    content: &str,
    file_path: &Path,
    specs: &[VariableSpec],
) -> Result<ExtractResult, ParseError> {
    let time_idx = specs.iter().position(VariableSpec::is_time);
    let mut samples: Vec<Vec<f64>> = vec![Vec::new(); specs.len()];
    let mut lines_processed: u64 = 0;
    let mut dropped_samples: u64 = 0;

    for (line_idx, line) in lines(content).enumerate() {
        lines_processed += 1;
        let line_number = (line_idx as u64) + 1;

        for (spec_idx, spec) in specs.iter().enumerate() {
            let Some(rest) = line.strip_prefix(spec.prefix.as_str()) else {
                continue;
            };

            if Some(spec_idx) != time_idx {
                let ticks = time_idx.map_or(0, |t| samples[t].len());
                if samples[spec_idx].len() >= ticks {
                    dropped_samples += 1;
                    tracing::debug!(
                        file = %file_path.display(),
                        line = line_number,
                        variable = %spec.name,
                        text = logging::preview(line),
                        "Sample dropped: variable already reported for this tick"
                    );
                    continue;
                }
            }

            let raw_value = rest.trim();
            let value = (spec.parse)(raw_value).map_err(|source| ParseError::Conversion {
                file: file_path.to_path_buf(),
                line_number,
                variable: spec.name.clone(),
                raw_value: raw_value.to_string(),
                source,
            })?;
            samples[spec_idx].push(value);
        }
    }

    let columns = specs
        .iter()
        .zip(samples)
        .map(|(spec, values)| Column {
            name: spec.name.clone(),
            values,
        })
        .collect();
    let table = SampleTable::from_columns(columns);

    tracing::debug!(
        file = %file_path.display(),
        lines = lines_processed,
        rows = table.row_count(),
        dropped = dropped_samples,
        "Extraction finished"
    );

    Ok(ExtractResult {
        table,
        lines_processed,
        dropped_samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::variables::{active_variables, builtin_variables};

    fn extract(content: &str) -> ExtractResult {
        let specs = active_variables(content, &[]);
        extract_samples(content, Path::new("test.log"), &specs).unwrap()
    }

    #[test]
    fn test_single_tick_yields_one_row() {
        let content = "Time = 0\n\
                       Regulator: sensorValue = 1.5\n\
                       Regulator: targetValue = 2.0\n\
                       Regulator: error = 0.5\n\
                       Regulator: outputSignal = 0.3\n";
        let result = extract(content);
        let table = &result.table;

        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.column_names(),
            vec!["time", "sensorValue", "targetValue", "error", "outputSignal"]
        );
        assert_eq!(table.column("time"), Some(&[0.0][..]));
        assert_eq!(table.column("sensorValue"), Some(&[1.5][..]));
        assert_eq!(table.column("targetValue"), Some(&[2.0][..]));
        assert_eq!(table.column("error"), Some(&[0.5][..]));
        assert_eq!(table.column("outputSignal"), Some(&[0.3][..]));
        assert!(!table.is_ragged());
        assert_eq!(result.lines_processed, 5);
        assert_eq!(result.dropped_samples, 0);
    }

    #[test]
    fn test_full_ticks_fill_every_column() {
        let mut content = String::new();
        for tick in 0..10 {
            content.push_str(&format!("Time = {tick}\n"));
            content.push_str("Courant Number mean: 0.1 max: 0.4\n");
            content.push_str(&format!("Regulator: targetValue = {}\n", 300 + tick));
            content.push_str(&format!("Regulator: sensorValue = {}\n", 290 + tick));
            content.push_str("Regulator: error = 10\n");
            content.push_str("Regulator: outputSignal = 0.75\n");
            content.push_str("ExecutionTime = 1.2 s\n\n");
        }
        let table = extract(&content).table;
        assert_eq!(table.row_count(), 10);
        assert!(!table.is_ragged());
        assert_eq!(table.column("targetValue").unwrap()[9], 309.0);
    }

    #[test]
    fn test_second_report_in_same_tick_is_dropped() {
        let content = "Time = 1\n\
                       Regulator: error = 0.5\n\
                       Regulator: error = 0.9\n\
                       Time = 2\n\
                       Regulator: error = 0.7\n";
        let result = extract(content);
        assert_eq!(result.table.column("error"), Some(&[0.5, 0.7][..]));
        assert_eq!(result.dropped_samples, 1);
    }

    #[test]
    fn test_samples_before_first_tick_are_dropped() {
        let content = "Regulator: sensorValue = 4\nTime = 0\nRegulator: sensorValue = 5\n";
        let table = extract(content).table;
        assert_eq!(table.column("sensorValue"), Some(&[5.0][..]));
    }

    #[test]
    fn test_skipped_ticks_produce_ragged_columns() {
        let content = "Time = 0\n\
                       Regulator: outputSignal = 0.1\n\
                       Time = 1\n\
                       Time = 2\n\
                       Regulator: outputSignal = 0.3\n";
        let table = extract(content).table;
        assert_eq!(table.row_count(), 3);
        // Not padded: the second sample belongs to tick 2 but sits in row 1.
        assert_eq!(table.column("outputSignal"), Some(&[0.1, 0.3][..]));
        assert!(table.is_ragged());
    }

    #[test]
    fn test_late_samples_catch_up_after_skipped_ticks() {
        let content = "Time = 0\nTime = 1\n\
                       Regulator: error = 1\n\
                       Regulator: error = 2\n\
                       Regulator: error = 3\n";
        let result = extract(content);
        assert_eq!(result.table.column("error"), Some(&[1.0, 2.0][..]));
        assert_eq!(result.dropped_samples, 1);
    }

    #[test]
    fn test_inlet_column_present_only_when_reported() {
        let without = extract("Time = 0\nRegulator: error = 1\n").table;
        assert!(!without.has_column("inletValue"));

        let with = extract("Time = 0\nTime = 1\nRegulator: value at inlet = 293.15\n").table;
        assert_eq!(with.column_names().last(), Some(&"inletValue"));
        assert_eq!(with.column("inletValue"), Some(&[293.15][..]));
    }

    #[test]
    fn test_prefix_match_is_case_sensitive_and_anchored() {
        let content = "Time = 0\n\
                       regulator: error = 1\n\
                       \tRegulator: error = 2\n\
                       Info Regulator: error = 3\n";
        let table = extract(content).table;
        assert_eq!(table.column("error"), Some(&[] as &[f64]));
    }

    #[test]
    fn test_values_are_trimmed_and_crlf_tolerated() {
        let content = "Time = 0.5   \r\nRegulator: targetValue =    -1.25e1\t\r\n";
        let table = extract(content).table;
        assert_eq!(table.column("time"), Some(&[0.5][..]));
        assert_eq!(table.column("targetValue"), Some(&[-12.5][..]));
    }

    #[test]
    fn test_bare_carriage_return_ends_a_line() {
        let content = "Time = 0\rRegulator: error = 1\rTime = 1\rRegulator: error = 2\r";
        let result = extract(content);
        assert_eq!(result.table.column("time"), Some(&[0.0, 1.0][..]));
        assert_eq!(result.table.column("error"), Some(&[1.0, 2.0][..]));
        assert_eq!(result.lines_processed, 4);
    }

    #[test]
    fn test_line_splitting() {
        let split: Vec<&str> = lines("a\r\nb\rc\n\nd").collect();
        assert_eq!(split, vec!["a", "b", "c", "", "d"]);
        assert_eq!(lines("x\n").count(), 1);
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn test_non_numeric_value_is_fatal() {
        let content = "Time = 0\nRegulator: sensorValue = hot\n";
        let specs = builtin_variables();
        let err = extract_samples(content, Path::new("bad.log"), &specs).unwrap_err();
        match err {
            ParseError::Conversion {
                line_number,
                variable,
                raw_value,
                ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(variable, "sensorValue");
                assert_eq!(raw_value, "hot");
            }
            other => panic!("expected Conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_time_is_fatal() {
        let specs = builtin_variables();
        let result = extract_samples("Time = later\n", Path::new("bad.log"), &specs);
        assert!(matches!(result, Err(ParseError::Conversion { .. })));
    }

    #[test]
    fn test_dropped_line_is_not_converted() {
        // The duplicate is discarded before conversion, so junk there is harmless.
        let content = "Time = 0\nRegulator: error = 1\nRegulator: error = n/a\n";
        let table = extract(content).table;
        assert_eq!(table.column("error"), Some(&[1.0][..]));
    }

    #[test]
    fn test_empty_content() {
        let result = extract("");
        assert_eq!(result.table.row_count(), 0);
        assert_eq!(result.table.columns().len(), 5);
        assert_eq!(result.lines_processed, 0);
    }
}
