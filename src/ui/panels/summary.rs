// RegPlot - ui/panels/summary.rs
//
// Table summary window: one row per extracted column with sample counts
// and value ranges. Highlights columns that skipped ticks.

use crate::app::state::ViewerState;
use crate::ui::theme;

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.4}")).unwrap_or_else(|| "-".to_string())
}

/// Render the summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut ViewerState) {
    if !state.show_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Table Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Source: {}", state.source.display()));
            ui.label(format!("Ticks: {}", state.rows));
            ui.add_space(6.0);
            ui.separator();

            egui::Grid::new("summary_columns")
                .num_columns(6)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for header in ["Column", "Samples", "Missing", "Min", "Max", "Last"] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for stats in &state.stats {
                        ui.monospace(&stats.name);
                        ui.monospace(stats.samples.to_string());
                        let missing_colour = if stats.missing > 0 {
                            theme::WARNING_COLOUR
                        } else {
                            ui.style().visuals.text_color()
                        };
                        ui.colored_label(missing_colour, stats.missing.to_string());
                        ui.monospace(fmt_opt(stats.min));
                        ui.monospace(fmt_opt(stats.max));
                        ui.monospace(fmt_opt(stats.last));
                        ui.end_row();
                    }
                });

            if state.ragged {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(
                        "Columns with missing samples are not padded: \
                         their values are shifted relative to time.",
                    )
                    .small()
                    .weak(),
                );
            }
        });

    if !open {
        state.show_summary = false;
    }
}
