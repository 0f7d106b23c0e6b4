// RegPlot - ui/panels/chart.rs
//
// Stacked time-series panels, one egui_plot::Plot per ChartPanel.
//
// The plots share one x-axis link group and one cursor link group, so
// panning, zooming and the vertical cursor follow time across all of them.
// Y ranges come from the chart model and are not user-adjustable.

use crate::app::state::ViewerState;
use crate::core::chart::{ChartPanel, PanelKind, Readout};
use crate::ui::theme;
use egui::Vec2b;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Render the chart into the remaining space of `ui`.
pub fn render(ui: &mut egui::Ui, state: &mut ViewerState) {
    if state.rows == 0 {
        ui.centered_and_justified(|ui| {
            ui.label("No samples found. Is this a regulator log?");
        });
        return;
    }

    let panel_count = state.chart.panels.len().max(1);
    let header_height = ui.spacing().interact_size.y + ui.spacing().item_spacing.y;
    let plot_height = ((ui.available_height() - theme::PANEL_GAP * panel_count as f32)
        / panel_count as f32
        - header_height)
        .max(theme::MIN_PLOT_HEIGHT);

    let axis_group = ui.id().with("time_axis");
    let cursor_group = ui.id().with("time_cursor");
    let readouts = state.hover_readouts();
    let last = state.chart.panels.len().saturating_sub(1);

    let mut hovered = None;
    for (idx, panel) in state.chart.panels.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.strong(panel.kind.y_label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(readout_text(&readouts, idx));
            });
        });

        let mut plot = Plot::new(("regplot_panel", idx))
            .height(plot_height)
            .legend(Legend::default())
            .link_axis(axis_group, Vec2b::new(true, false))
            .link_cursor(cursor_group, Vec2b::new(true, false))
            .allow_zoom(Vec2b::new(true, false))
            .allow_drag(Vec2b::new(true, false))
            .allow_scroll(false)
            .set_margin_fraction(egui::vec2(0.0, 0.0))
            .include_x(state.chart.x_range.min)
            .include_x(state.chart.x_range.max)
            .include_y(panel.y_range.min)
            .include_y(panel.y_range.max)
            .y_axis_label(panel.kind.y_label());
        if idx == last {
            plot = plot.x_axis_label(state.chart.x_label);
        }

        let response = plot.show(ui, |plot_ui| {
            for line in panel_lines(panel) {
                plot_ui.line(line);
            }
            plot_ui.pointer_coordinate()
        });
        if response.response.hovered() {
            hovered = response.inner.map(|p| p.x);
        }

        ui.add_space(theme::PANEL_GAP);
    }

    state.hover_time = hovered;
}

/// One `Line` per finite run of each series; runs of a series share its
/// legend entry.
fn panel_lines(panel: &ChartPanel) -> Vec<Line> {
    let mut lines = Vec::new();
    for series in &panel.series {
        let colour = theme::series_colour(&series.name);
        for run in finite_runs(&series.points) {
            lines.push(
                Line::new(PlotPoints::from(run))
                    .name(&series.name)
                    .color(colour)
                    .width(stroke_width(panel.kind)),
            );
        }
    }
    lines
}

fn stroke_width(kind: PanelKind) -> f32 {
    match kind {
        PanelKind::Output => theme::SERIES_STROKE_WIDTH + 0.5,
        _ => theme::SERIES_STROKE_WIDTH,
    }
}

/// Split `points` wherever a coordinate is not finite.
fn finite_runs(points: &[[f64; 2]]) -> Vec<Vec<[f64; 2]>> {
    points
        .split(|[t, v]| !(t.is_finite() && v.is_finite()))
        .filter(|run| !run.is_empty())
        .map(<[[f64; 2]]>::to_vec)
        .collect()
}

/// "name = value" pairs for the readouts belonging to panel `idx`.
fn readout_text(readouts: &[Readout], idx: usize) -> String {
    readouts
        .iter()
        .filter(|r| r.panel == idx)
        .map(|r| format!("{} = {}", r.series, format_value(r.value)))
        .collect::<Vec<_>>()
        .join("   ")
}

fn format_value(v: f64) -> String {
    if v.abs() >= 1e5 || (v != 0.0 && v.abs() < 1e-3) {
        format!("{v:.3e}")
    } else {
        format!("{v:.4}")
    }
}
