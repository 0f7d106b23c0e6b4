// RegPlot - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "RegPlot";

/// Application identifier used for config directories.
pub const APP_ID: &str = "RegPlot";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Variable names and log prefixes
// =============================================================================

/// Column holding the simulation time of each tick. Drives the alignment rule.
pub const TIME: &str = "time";
pub const SENSOR_VALUE: &str = "sensorValue";
pub const TARGET_VALUE: &str = "targetValue";
pub const ERROR: &str = "error";
pub const OUTPUT_SIGNAL: &str = "outputSignal";

/// Optional column, only present when its prefix occurs in the log.
pub const INLET_VALUE: &str = "inletValue";

pub const TIME_PREFIX: &str = "Time = ";
pub const SENSOR_VALUE_PREFIX: &str = "Regulator: sensorValue = ";
pub const TARGET_VALUE_PREFIX: &str = "Regulator: targetValue = ";
pub const ERROR_PREFIX: &str = "Regulator: error = ";
pub const OUTPUT_SIGNAL_PREFIX: &str = "Regulator: outputSignal = ";
pub const INLET_VALUE_PREFIX: &str = "Regulator: value at inlet = ";

// =============================================================================
// Export
// =============================================================================

/// Decimal places written for each CSV value unless overridden.
pub const DEFAULT_EXPORT_PRECISION: usize = 2;

/// Upper bound on the user-configurable precision.
pub const MAX_EXPORT_PRECISION: usize = 10;

/// File extension (lowercase, no dot) that selects JSON export.
pub const JSON_EXTENSION: &str = "json";

// =============================================================================
// Chart
// =============================================================================

/// Fixed y-range of the output-signal panel.
pub const OUTPUT_SIGNAL_Y_MIN: f64 = -0.1;
pub const OUTPUT_SIGNAL_Y_MAX: f64 = 1.1;

/// Fraction of the data span added above and below auto-ranged panels.
pub const AUTO_RANGE_PADDING: f64 = 0.05;

/// Half-width used when every sample in a range has the same value.
pub const DEGENERATE_RANGE_HALF_WIDTH: f64 = 0.5;

// =============================================================================
// UI defaults
// =============================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MAX_WINDOW_WIDTH: f32 = 4000.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;
pub const MAX_WINDOW_HEIGHT: f32 = 3000.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
