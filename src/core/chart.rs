// RegPlot - core/chart.rs
//
// Chart layout model: which panels exist, what each one plots, and the
// axis ranges. Pure data computed from a sample table; ui::panels::chart
// hands it to egui_plot.

use crate::core::model::SampleTable;
use crate::util::constants as c;

/// Closed numeric interval used for an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Smallest range covering every finite value, or `None` if there are none.
    fn covering(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(Self::new(v, v)),
                Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
            })
    }

    /// Widen a zero-width range so it can be drawn.
    fn widened(self) -> Self {
        if self.span() > 0.0 {
            self
        } else {
            Self::new(
                self.min - c::DEGENERATE_RANGE_HALF_WIDTH,
                self.max + c::DEGENERATE_RANGE_HALF_WIDTH,
            )
        }
    }

    fn padded(self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        Self::new(self.min - pad, self.max + pad)
    }
}

/// Which quantity a panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Inlet value, only when the log reported it.
    Inlet,
    /// Target value overlaid with the measured sensor value.
    Setpoint,
    /// Controller output, on a fixed range.
    Output,
}

impl PanelKind {
    pub fn y_label(&self) -> &'static str {
        match self {
            PanelKind::Inlet => "inlet value",
            PanelKind::Setpoint => "value",
            PanelKind::Output => "output signal",
        }
    }
}

/// One plotted line: `(time, value)` pairs in sample order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub kind: PanelKind,
    pub series: Vec<Series>,
    pub y_range: AxisRange,
}

/// Stacked panels sharing the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub x_label: &'static str,
    pub x_range: AxisRange,
    pub panels: Vec<ChartPanel>,
}

/// Value of one series at the sample nearest a requested time.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub panel: usize,
    pub series: String,
    pub time: f64,
    pub value: f64,
}

/// Pair each time sample with the matching value of `name`.
///
/// A ragged column yields only as many points as it has samples.
fn series_for(table: &SampleTable, name: &str) -> Option<Series> {
    let time = table.column(c::TIME)?;
    let values = table.column(name)?;
    Some(Series {
        name: name.to_string(),
        points: time.iter().zip(values).map(|(&t, &v)| [t, v]).collect(),
    })
}

fn panel(kind: PanelKind, series: Vec<Series>) -> ChartPanel {
    let y_range = match kind {
        PanelKind::Output => AxisRange::new(c::OUTPUT_SIGNAL_Y_MIN, c::OUTPUT_SIGNAL_Y_MAX),
        _ => AxisRange::covering(series.iter().flat_map(|s| s.points.iter().map(|p| p[1])))
            .map(|r| r.widened().padded(c::AUTO_RANGE_PADDING))
            .unwrap_or(AxisRange::new(0.0, 1.0)),
    };
    ChartPanel {
        kind,
        series,
        y_range,
    }
}

/// Lay out the chart for `table`.
///
/// Panels top to bottom: inlet value (if the column exists), target value
/// with sensor value, output signal.
pub fn build_chart(table: &SampleTable) -> Chart {
    let mut panels = Vec::with_capacity(3);

    if let Some(inlet) = series_for(table, c::INLET_VALUE) {
        panels.push(panel(PanelKind::Inlet, vec![inlet]));
    }

    let setpoint: Vec<Series> = [c::TARGET_VALUE, c::SENSOR_VALUE]
        .iter()
        .filter_map(|name| series_for(table, name))
        .collect();
    panels.push(panel(PanelKind::Setpoint, setpoint));

    let output: Vec<Series> = series_for(table, c::OUTPUT_SIGNAL).into_iter().collect();
    panels.push(panel(PanelKind::Output, output));

    let x_range = table
        .column(c::TIME)
        .and_then(|t| AxisRange::covering(t.iter().copied()))
        .map(AxisRange::widened)
        .unwrap_or(AxisRange::new(0.0, 1.0));

    Chart {
        x_label: "time [s]",
        x_range,
        panels,
    }
}

impl Chart {
    /// For every series, the sample whose time is nearest `time`.
    pub fn values_at(&self, time: f64) -> Vec<Readout> {
        let mut out = Vec::new();
        for (panel_idx, panel) in self.panels.iter().enumerate() {
            for series in &panel.series {
                let nearest = series.points.iter().min_by(|a, b| {
                    (a[0] - time).abs().total_cmp(&(b[0] - time).abs())
                });
                if let Some(&[t, v]) = nearest {
                    out.push(Readout {
                        panel: panel_idx,
                        series: series.name.clone(),
                        time: t,
                        value: v,
                    });
                }
            }
        }
        out
    }

    pub fn point_count(&self) -> usize {
        self.panels
            .iter()
            .flat_map(|p| &p.series)
            .map(|s| s.points.len())
            .sum()
    }
}
