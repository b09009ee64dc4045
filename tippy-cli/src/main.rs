//! # Tippy CLI - Interactive Tip Calculator TUI
//!
//! Enter a bill amount and the number of people, move the tip slider, and the
//! tip, total and per-person share update as you type.
//!
//! ## Usage
//! ```bash
//! # Run the interactive TUI
//! tippy-cli
//!
//! # Start with the slider at 18%
//! tippy-cli --initial-tip 18
//!
//! # One-shot calculation
//! tippy-cli calc --bill 100 --tip 15 --people 4
//!
//! # Write a sample config file
//! tippy-cli config init
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tippy::{engine, Rgba, TipConfig, TipInputs};
use tracing::warn;

mod config_loader;
mod report;
mod tui;

use config_loader::CliConfig;
use tui::{handle_events, ui, App};

/// Interactive tip calculator
#[derive(Parser, Debug)]
#[command(name = "tippy-cli")]
#[command(author = "tippy contributors")]
#[command(version)]
#[command(about = "Tip calculator with live per-person split", long_about = None)]
struct Args {
    /// Enable file logging to logs/ directory
    #[arg(long, global = true, default_value = "false")]
    log: bool,

    /// Read configuration from this TOML file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Initial tip percent (overrides config)
    #[arg(long = "initial-tip")]
    initial_tip: Option<u32>,

    /// Maximum tip percent on the slider (overrides config)
    #[arg(long)]
    slider_max: Option<u32>,

    /// Rating color at 0% tip, as #RRGGBB (overrides config)
    #[arg(long)]
    worst_color: Option<Rgba>,

    /// Rating color at the maximum tip, as #RRGGBB (overrides config)
    #[arg(long)]
    best_color: Option<Rgba>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate once and print the result
    Calc {
        /// Bill amount
        #[arg(long, default_value = "")]
        bill: String,

        /// Tip percent (defaults to the configured initial tip)
        #[arg(long)]
        tip: Option<i64>,

        /// Number of people sharing the bill
        #[arg(long, default_value = "")]
        people: String,

        /// Output results as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Also print the step-by-step calculation
        #[arg(long, default_value = "false")]
        explain: bool,

        /// Disable colored output
        #[arg(long, default_value = "false")]
        no_color: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write a sample config file with the built-in defaults
    Init,
    /// Print where the config file is read from
    Path,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    };

    // NOTE: In TUI mode, we only log to file (no console) to avoid corrupting the UI
    let is_tui_mode = args.command.is_none();
    let _file_guard = init_tracing(args.log || file_config.enable_logging.unwrap_or(false), is_tui_mode)?;

    let flag_config = CliConfig {
        initial_tip_percent: args.initial_tip,
        slider_max: args.slider_max,
        worst_tip_color: args.worst_color,
        best_tip_color: args.best_color,
        enable_logging: None,
    };
    let config = flag_config.or(file_config).to_tip_config()?;

    match args.command {
        None => run_tui(config),
        Some(Commands::Calc { bill, tip, people, json, explain, no_color }) => {
            let tip_percent = config.clamp_percent(tip.unwrap_or(i64::from(config.initial_tip_percent)));
            let result = engine::calculate(&TipInputs::new(bill, tip_percent, people), &config);

            if json {
                println!("{}", report::render_json(&result)?);
            } else {
                println!("{}", report::render_table(&result, no_color));
                if explain {
                    println!("{}", report::render_trace(&result));
                }
            }
            Ok(())
        }
        Some(Commands::Config { action: ConfigAction::Init }) => {
            let path = match &args.config {
                Some(path) => {
                    CliConfig::sample().save_to(path)?;
                    path.clone()
                }
                None => CliConfig::create_sample()?,
            };
            println!("Wrote sample configuration to {}", path.display());
            Ok(())
        }
        Some(Commands::Config { action: ConfigAction::Path }) => {
            match args.config.or_else(CliConfig::config_path) {
                Some(path) => println!("{}", path.display()),
                None => warn!("Could not determine config directory"),
            }
            Ok(())
        }
    }
}

/// Sets up tracing. File logging writes daily files under `logs/`; the
/// console layer is skipped in TUI mode.
fn init_tracing(
    log_to_file: bool,
    is_tui_mode: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    if log_to_file {
        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "tippy.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env().add_directive("tippy=debug".parse()?);
        // The file layer is built per branch: a fmt layer's type is tied to the subscriber stack it sits on.
        if is_tui_mode {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
                .init();
        }

        tracing::info!("--- Tippy Session Started [{}] ---", chrono::Utc::now());
        return Ok(Some(guard));
    }

    // In TUI mode without file logging, tracing stays disabled
    if !is_tui_mode {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive("tippy=warn".parse()?))
            .init();
    }
    Ok(None)
}

/// Run the TUI application
fn run_tui(config: TipConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();

    result
}

/// Main application loop
fn run_app(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if handle_events(app)? {
            break;
        }
    }

    Ok(())
}
