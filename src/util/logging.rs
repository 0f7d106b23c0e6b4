// RegPlot - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, so exported data on stdout pipes stays clean.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    // try_init: integration tests may initialise more than once per process.
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    if result.is_ok() {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    }
}

/// Truncate `line` for inclusion in debug output.
pub fn preview(line: &str) -> &str {
    let max = super::constants::DEBUG_MAX_LINE_PREVIEW;
    match line.char_indices().nth(max) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_line_unchanged() {
        assert_eq!(preview("Time = 0.1"), "Time = 0.1");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "\u{00e9}".repeat(super::super::constants::DEBUG_MAX_LINE_PREVIEW + 10);
        let p = preview(&long);
        assert_eq!(
            p.chars().count(),
            super::super::constants::DEBUG_MAX_LINE_PREVIEW
        );
    }
}
