use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use calc_ui::{app, components::WindowPreferences, config::AppConfig, gui, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// A four-function desktop calculator.
///
/// Opens the calculator window, or with `--keys` replays a key script
/// headlessly and prints the resulting display.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level or filter directive; overrides the config file.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Append logs to this file; overrides the config file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Do not log to stdout.
    #[arg(long)]
    quiet: bool,

    /// Replay a key script without opening a window, e.g. `12+3<Enter>`.
    #[arg(long, value_name = "SCRIPT")]
    keys: Option<String>,

    /// With `--keys`, print every display update and notice.
    #[arg(long, requires = "keys")]
    tape: bool,

    /// With `--keys`, print the final calculator state as TOML.
    #[arg(long, requires = "keys")]
    dump_state: bool,
}

impl Cli {
    fn apply_overrides(
        &self,
        config: &mut AppConfig,
    ) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.quiet {
            config.logging.stdout = false;
        }
    }
}

// ─── headless replay ─────────────────────────────────────────────────────────

fn run_headless(
    script: &str,
    tape: bool,
    dump_state: bool,
) -> anyhow::Result<()> {
    let calculator = app::replay(script).context("replaying key script")?;
    let sink = calculator.sink();

    if tape {
        println!("{}", app::render_tape(sink.entries()));
    } else {
        println!("{}", sink.display());
    }

    if dump_state {
        print!("{}", app::dump_state(&calculator)?);
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_overrides(&mut config);

    logging::init_logging(&config.logging).context("initializing logging")?;
    debug!(?config, "configuration loaded");

    if let Some(script) = &cli.keys {
        return run_headless(script, cli.tape, cli.dump_state);
    }

    info!("Starting calculator window");
    gui::run(WindowPreferences::from(&config.window));
    Ok(())
}
