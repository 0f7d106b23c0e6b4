// RegPlot - app/state.rs
//
// Viewer state. Owns the chart built from the extracted table plus the
// small amount of interactive state the chart window needs.
// Owned by the eframe::App implementation.

use crate::core::chart::{self, Chart, Readout};
use crate::core::model::{ColumnStats, SampleTable};
use std::path::PathBuf;

/// Top-level viewer state.
#[derive(Debug)]
pub struct ViewerState {
    /// Log the chart was built from.
    pub source: PathBuf,

    /// Panels, series and axes to draw.
    pub chart: Chart,

    /// Per-column summary for the summary window.
    pub stats: Vec<ColumnStats>,

    /// Number of ticks in the table.
    pub rows: usize,

    /// Whether any column skipped ticks.
    pub ragged: bool,

    /// Time under the pointer, if the pointer is over a panel.
    pub hover_time: Option<f64>,

    /// Whether to show the summary window.
    pub show_summary: bool,

    pub dark_mode: bool,

    /// Status message for the status bar.
    pub status_message: String,
}

impl ViewerState {
    /// Build the viewer state, consuming the table.
    pub fn new(source: PathBuf, table: SampleTable, dark_mode: bool) -> Self {
        let chart = chart::build_chart(&table);
        let rows = table.row_count();
        let ragged = table.is_ragged();
        let status_message = if ragged {
            format!("{rows} ticks; some variables skipped ticks")
        } else {
            format!("{rows} ticks")
        };
        Self {
            source,
            chart,
            stats: table.column_stats(),
            rows,
            ragged,
            hover_time: None,
            show_summary: false,
            dark_mode,
            status_message,
        }
    }

    /// Values under the pointer, empty when nothing is hovered.
    pub fn hover_readouts(&self) -> Vec<Readout> {
        self.hover_time
            .map(|t| self.chart.values_at(t))
            .unwrap_or_default()
    }

    /// File name shown in the window title and status bar.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Column;

    fn table(ragged: bool) -> SampleTable {
        let output = if ragged { vec![0.1] } else { vec![0.1, 0.2] };
        SampleTable::from_columns(vec![
            Column {
                name: "time".to_string(),
                values: vec![0.0, 1.0],
            },
            Column {
                name: "outputSignal".to_string(),
                values: output,
            },
        ])
    }

    #[test]
    fn test_new_summarises_table() {
        let state = ViewerState::new(PathBuf::from("/runs/case1/log.solver"), table(false), true);
        assert_eq!(state.rows, 2);
        assert!(!state.ragged);
        assert_eq!(state.stats.len(), 2);
        assert_eq!(state.status_message, "2 ticks");
        assert_eq!(state.source_name(), "log.solver");
    }

    #[test]
    fn test_ragged_status() {
        let state = ViewerState::new(PathBuf::from("log"), table(true), false);
        assert!(state.ragged);
        assert!(state.status_message.contains("skipped"));
    }

    #[test]
    fn test_hover_readouts() {
        let mut state = ViewerState::new(PathBuf::from("log"), table(false), true);
        assert!(state.hover_readouts().is_empty());
        state.hover_time = Some(0.9);
        let readouts = state.hover_readouts();
        assert_eq!(readouts.len(), 1);
        assert_eq!(readouts[0].value, 0.2);
    }
}
