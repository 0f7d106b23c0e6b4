// RegPlot - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant keeps its cause reachable through `source()`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all RegPlot operations.
#[derive(Debug)]
pub enum RegPlotError {
    /// Reading or extracting samples from the log failed.
    Parse(ParseError),

    /// Writing the sample table failed.
    Export(ExportError),

    /// An explicitly requested configuration file was unusable.
    Config(ConfigError),

    /// The chart window could not be opened.
    Gui(GuiError),
}

impl fmt::Display for RegPlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Gui(e) => write!(f, "GUI error: {e}"),
        }
    }
}

impl std::error::Error for RegPlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Gui(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors raised while reading a regulator log and extracting samples.
#[derive(Debug)]
pub enum ParseError {
    /// The log file could not be opened or read.
    Io { file: PathBuf, source: io::Error },

    /// The log file is not valid UTF-8.
    InvalidEncoding {
        file: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// A line matched a variable prefix but its value is not a number.
    Conversion {
        file: PathBuf,
        line_number: u64,
        variable: String,
        raw_value: String,
        source: std::num::ParseFloatError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { file, source } => {
                write!(f, "'{}': I/O error: {source}", file.display())
            }
            Self::InvalidEncoding { file, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", file.display())
            }
            Self::Conversion {
                file,
                line_number,
                variable,
                raw_value,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: cannot convert '{raw_value}' \
                 for variable '{variable}': {source}",
                file.display()
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Conversion { source, .. } => Some(source),
        }
    }
}

impl From<ParseError> for RegPlotError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error creating or writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for RegPlotError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Outside of an explicit `--config` file these are downgraded to warnings.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// A `[[variables]]` entry clashes with another variable or is incomplete.
    InvalidVariable { name: String, reason: String },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::InvalidVariable { name, reason } => {
                write!(f, "Config variable '{name}' skipped: {reason}")
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for RegPlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// GUI errors
// ---------------------------------------------------------------------------

/// The eframe event loop failed to start or aborted.
#[derive(Debug)]
pub struct GuiError {
    pub message: String,
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to run chart window: {}", self.message)
    }
}

impl std::error::Error for GuiError {}

impl From<GuiError> for RegPlotError {
    fn from(e: GuiError) -> Self {
        Self::Gui(e)
    }
}

/// Convenience type alias for RegPlot results.
pub type Result<T> = std::result::Result<T, RegPlotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_conversion_error_names_line_and_variable() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ParseError::Conversion {
            file: PathBuf::from("run.log"),
            line_number: 7,
            variable: "error".to_string(),
            raw_value: "abc".to_string(),
            source,
        };
        let text = err.to_string();
        assert!(text.contains("run.log"), "{text}");
        assert!(text.contains("line 7"), "{text}");
        assert!(text.contains("'error'"), "{text}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_top_level_error_preserves_chain() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: RegPlotError = ParseError::Io {
            file: PathBuf::from("absent.log"),
            source: io,
        }
        .into();
        assert!(err.to_string().starts_with("Parse error:"));
        let inner = err.source().expect("parse error source");
        assert!(inner.source().is_some(), "io cause must remain reachable");
    }
}
