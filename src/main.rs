// RegPlot - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Sample extraction
// 4. CSV/JSON export, or eframe chart window launch

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use regplot::app;
pub use regplot::core;
pub use regplot::platform;
pub use regplot::ui;
pub use regplot::util;

use clap::Parser;
use std::path::PathBuf;

/// RegPlot - regulator log sample extractor.
///
/// Reads the time, sensor, target, error and output-signal samples printed
/// by a control-loop regulator and charts them, or exports them when an
/// output file is given.
#[derive(Parser, Debug)]
#[command(name = "regplot", version, about)]
struct Cli {
    /// Regulator log file to read.
    log_file: PathBuf,

    /// Export the table here instead of charting it (.json for JSON, otherwise CSV).
    output_file: Option<PathBuf>,

    /// Configuration file (defaults to config.toml in the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Decimal places for CSV values (overrides [export] precision).
    #[arg(
        short = 'p',
        long = "precision",
        value_parser = clap::value_parser!(u8).range(0..=10)
    )]
    precision: Option<u8>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "RegPlot failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> util::error::Result<()> {
    // Config is read before logging starts so its level can take effect.
    let (config, config_warnings) = match cli.config {
        Some(ref path) => platform::config::load_config_explicit(path)?,
        None => {
            let paths = platform::config::PlatformPaths::resolve();
            platform::config::load_config(&paths.config_file())
        }
    };

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "RegPlot starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let (extras, rejected) = crate::core::variables::validate_extras(
        config
            .extra_variables
            .iter()
            .map(|v| (v.name.as_str(), v.prefix.as_str())),
    );
    for err in &rejected {
        tracing::warn!(error = %err, "Extra variable ignored");
    }

    let result = app::pipeline::load_table(&cli.log_file, &extras)?;

    match cli.output_file {
        Some(ref out) => {
            let precision = cli
                .precision
                .map(usize::from)
                .unwrap_or(config.export_precision);
            app::pipeline::export_table_to_file(&result.table, out, precision)?;
        }
        None => {
            let state =
                app::state::ViewerState::new(cli.log_file, result.table, config.dark_mode);
            gui::run(state, config.window_width, config.window_height)?;
        }
    }

    Ok(())
}
