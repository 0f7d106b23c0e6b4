// RegPlot - platform/config.rs
//
// Configuration directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for RegPlot configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/regplot/ or %APPDATA%\RegPlot\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of the default `config.toml`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[export]` section.
    pub export: ExportSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[[variables]]` array of extra samples to extract.
    pub variables: Vec<RawVariable>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Decimal places per CSV value.
    pub precision: Option<usize>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Initial chart window width in points.
    pub window_width: Option<f32>,
    /// Initial chart window height in points.
    pub window_height: Option<f32>,
}

/// One `[[variables]]` entry.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawVariable {
    pub name: String,
    pub prefix: String,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Decimal places per CSV value.
    pub export_precision: usize,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// Extra variables, not yet checked against the built-in catalogue.
    pub extra_variables: Vec<RawVariable>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            export_precision: constants::DEFAULT_EXPORT_PRECISION,
            dark_mode: true,
            window_width: constants::DEFAULT_WINDOW_WIDTH,
            window_height: constants::DEFAULT_WINDOW_HEIGHT,
            extra_variables: Vec::new(),
        }
    }
}

/// Read and parse `path`. `Ok(None)` when the file does not exist.
fn read_raw(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Load and validate the default `config.toml`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults plus a warning.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    match read_raw(path) {
        Ok(None) => {
            tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
            (AppConfig::default(), Vec::new())
        }
        Ok(Some(raw)) => validate(raw),
        Err(e) => (AppConfig::default(), vec![format!("{e}. Using defaults.")]),
    }
}

/// Load a config file the user named explicitly.
///
/// Unlike [`load_config`], a missing, unreadable or unparseable file is an
/// error. Out-of-range values are still only warnings.
pub fn load_config_explicit(path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    match read_raw(path)? {
        Some(raw) => Ok(validate(raw)),
        None => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
        }),
    }
}

/// Validate each field against named constants, accumulating all warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Export: precision --
    if let Some(precision) = raw.export.precision {
        if precision <= constants::MAX_EXPORT_PRECISION {
            config.export_precision = precision;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[export] precision".to_string(),
                    value: precision.to_string(),
                    expected: format!(
                        "0-{}; using default ({})",
                        constants::MAX_EXPORT_PRECISION,
                        constants::DEFAULT_EXPORT_PRECISION
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: window size --
    if let Some(width) = raw.ui.window_width {
        if (constants::MIN_WINDOW_WIDTH..=constants::MAX_WINDOW_WIDTH).contains(&width) {
            config.window_width = width;
        } else {
            warnings.push(format!(
                "[ui] window_width = {width} is out of range ({}-{}). Using default ({}).",
                constants::MIN_WINDOW_WIDTH,
                constants::MAX_WINDOW_WIDTH,
                constants::DEFAULT_WINDOW_WIDTH,
            ));
        }
    }
    if let Some(height) = raw.ui.window_height {
        if (constants::MIN_WINDOW_HEIGHT..=constants::MAX_WINDOW_HEIGHT).contains(&height) {
            config.window_height = height;
        } else {
            warnings.push(format!(
                "[ui] window_height = {height} is out of range ({}-{}). Using default ({}).",
                constants::MIN_WINDOW_HEIGHT,
                constants::MAX_WINDOW_HEIGHT,
                constants::DEFAULT_WINDOW_HEIGHT,
            ));
        }
    }

    config.extra_variables = raw.variables;

    (config, warnings)
}
