// RegPlot - gui.rs
//
// Top-level eframe::App implementation for the chart window.
// Wires together the chart and summary panels around a ViewerState.

use crate::app::state::ViewerState;
use crate::ui;
use crate::util::constants;
use crate::util::error::GuiError;

/// The chart viewer application.
pub struct RegPlotApp {
    pub state: ViewerState,
}

impl RegPlotApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for RegPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    if ui.button("Table Summary").clicked() {
                        self.state.show_summary = true;
                        ui.close_menu();
                    }
                    let theme_label = if self.state.dark_mode {
                        "Light Theme"
                    } else {
                        "Dark Theme"
                    };
                    if ui.button(theme_label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ui.close_menu();
                    }
                });
                ui.separator();
                ui.label(self.state.source_name());
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.ragged {
                    ui.colored_label(ui::theme::WARNING_COLOUR, "\u{26a0}");
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{} points", self.state.chart.point_count()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::chart::render(ui, &mut self.state);
        });

        ui::panels::summary::render(ctx, &mut self.state);
    }
}

/// Open the chart window and block until it is closed.
pub fn run(state: ViewerState, width: f32, height: f32) -> Result<(), GuiError> {
    let title = format!("{} \u{2013} {}", constants::APP_NAME, state.source_name());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([width, height])
            .with_min_inner_size([constants::MIN_WINDOW_WIDTH, constants::MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(RegPlotApp::new(state)))),
    )
    .map_err(|e| GuiError {
        message: e.to_string(),
    })
}
