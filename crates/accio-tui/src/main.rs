//! `accio` — terminal browser for the Harry Potter API.
//!
//! Built on [ratatui](https://ratatui.rs) with view logic from
//! `accio-core`. Five tabs (characters, students, staff, houses, spells)
//! are reachable with number keys 1-5; each shows a paginated, searchable
//! view of one API collection.
//!
//! Logs are written to a file (default `/tmp/accio.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, configuration, tracing setup, panic
//! hooks, and app launch.

mod action;
mod app;
mod bridge;
mod keys;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use accio_config::Config;
use accio_core::Tab;

use crate::app::App;

/// Browse Harry Potter characters, houses and spells in the terminal.
#[derive(Parser, Debug)]
#[command(name = "accio", version, about)]
struct Cli {
    /// API root (defaults to https://hp-api.onrender.com/api)
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Tab to open on startup: characters, students, staff, houses, spells
    #[arg(short, long, value_parser = parse_tab_arg)]
    tab: Option<Tab>,

    /// Items per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Log file path (defaults to /tmp/accio.log)
    #[arg(long, default_value = "/tmp/accio.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_tab_arg(raw: &str) -> Result<Tab, String> {
    accio_config::parse_tab(raw).map_err(|e| e.to_string())
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "accio={log_level},accio_core={log_level},accio_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("accio.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Load the config file and environment, then apply command-line flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => accio_config::load_config_from(path)
            .wrap_err_with(|| format!("loading {}", path.display()))?,
        None => accio_config::load_config().wrap_err("loading configuration")?,
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

/// CLI flags > environment > config file > defaults.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(url) = &cli.base_url {
        config.api.base_url.clone_from(url);
    }
    if let Some(tab) = cli.tab {
        config.view.start_tab = tab.as_str().to_owned();
    }
    if let Some(size) = cli.page_size {
        config.view.page_size = size;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    let client_config = config.to_client_config()?;

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(
        base_url = %client_config.base_url,
        tab = %client_config.start_tab,
        page_size = client_config.page_size,
        "starting accio"
    );

    let mut app = App::new(&client_config)?;
    app.run().await?;

    Ok(())
}
