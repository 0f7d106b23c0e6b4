// RegPlot - ui/theme.rs
//
// Colour scheme, series colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::util::constants as c;
use egui::Color32;

/// Line colour for a series, keyed by variable name.
pub fn series_colour(name: &str) -> Color32 {
    match name {
        c::TARGET_VALUE => Color32::from_rgb(220, 38, 38), // Red 600
        c::SENSOR_VALUE => Color32::from_rgb(37, 99, 235), // Blue 600
        c::OUTPUT_SIGNAL => Color32::from_rgb(22, 163, 74), // Green 600
        c::INLET_VALUE => Color32::from_rgb(217, 119, 6),  // Amber 600
        _ => Color32::from_rgb(147, 51, 234),              // Purple 600
    }
}

/// Marker for columns that skipped ticks.
pub const WARNING_COLOUR: Color32 = Color32::from_rgb(253, 186, 116);

/// Layout constants.
pub const PANEL_GAP: f32 = 8.0;
pub const MIN_PLOT_HEIGHT: f32 = 80.0;
pub const SERIES_STROKE_WIDTH: f32 = 1.5;
