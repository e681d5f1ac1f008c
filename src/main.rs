// LogClassify - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Headless one-shot classification, or eframe GUI launch

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use logclassify::app;
pub use logclassify::core;
pub use logclassify::platform;
pub use logclassify::ui;
pub use logclassify::util;

use crate::app::classify::ClassifyManager;
use crate::app::transport::ClassifierClient;
use crate::util::constants::CLASSIFY_SOURCE;
use crate::util::error::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// LogClassify - paste log lines, classify them against a remote service.
#[derive(Parser, Debug)]
#[command(name = "LogClassify", version, about)]
struct Cli {
    /// Text file to load into the input buffer (stdin in headless mode if omitted).
    input: Option<PathBuf>,

    /// Path to an alternative config.toml (must exist).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Classify once, print the result JSON and exit.
    #[arg(long = "headless")]
    headless: bool,

    /// Write the headless result JSON to this file instead of stdout.
    #[arg(short = 'o', long = "output", requires = "headless")]
    output: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "LogClassify failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Config is read before logging so its level can seed the filter;
    // its warnings are replayed once the subscriber is up.
    let (config, warnings) = match cli.config {
        Some(ref path) => platform::config::load_config_file(path)?,
        None => platform::config::load_config(
            &platform::config::PlatformPaths::resolve().config_file,
        ),
    };

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        headless = cli.headless,
        "LogClassify starting"
    );
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let client = ClassifierClient::local()?;
    let manager = ClassifyManager::new(client, CLASSIFY_SOURCE)?;

    if cli.headless {
        run_headless(&manager, &cli)?;
        return Ok(ExitCode::SUCCESS);
    }

    run_gui(cli, config, warnings, manager)
}

/// One-shot classification: read input, submit, emit the result.
fn run_headless(manager: &ClassifyManager, cli: &Cli) -> Result<()> {
    let raw_text = app::headless::read_input(cli.input.as_deref(), std::io::stdin())?;
    let result = app::headless::classify_once(manager, &raw_text)?;
    app::headless::write_result(&result, cli.output.as_deref(), std::io::stdout().lock())
}

fn run_gui(
    cli: Cli,
    config: platform::config::AppConfig,
    warnings: Vec<String>,
    manager: ClassifyManager,
) -> Result<ExitCode> {
    let mut state =
        crate::app::state::AppState::new(manager.endpoint(), manager.source(), cli.debug);
    state.dark_mode = config.dark_mode;
    state.font_size = config.font_size;
    state.warnings = warnings;

    // Preload the buffer if a file was given on the command line.
    if let Some(ref path) = cli.input {
        match crate::app::buffer::read_input_file(path) {
            Ok(text) => state.buffer.set(text),
            Err(e) => {
                tracing::warn!(error = %e, "Cannot preload input file");
                state.status_message = format!("Cannot load file: {e}");
            }
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, state.dark_mode, state.font_size);
            Ok(Box::new(gui::ClassifierApp::new(state, manager)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogClassify GUI: {e}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
