//! `folio` — a personal portfolio in the terminal.
//!
//! Four screens, reachable with the number keys: About, Journey, Skills
//! and Projects. Picking a certificate on the Skills screen narrows the
//! skill grid to what that certificate validates; cards tilt toward the
//! mouse pointer.
//!
//! Logs go to a file (default `/tmp/folio.log`) so they never corrupt the
//! terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

/// Browse a developer portfolio: profile, journey, skills, certificates, projects.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Portfolio content file (TOML); the built-in portfolio is used otherwise
    #[arg(short = 'c', long, env = "FOLIO_CONTENT")]
    content: Option<PathBuf>,

    /// Config file path (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/folio.log)
    #[arg(long, default_value = "/tmp/folio.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Keep cards flat and the globe still
    #[arg(long)]
    reduced_motion: bool,
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
            "folio={log_level},folio_core={log_level},folio_config={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("folio.log"));

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

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config_path = cli.config.clone().unwrap_or_else(folio_config::config_path);
    let mut config = folio_config::load_config_from(&config_path)?;
    if let Some(content) = cli.content.clone() {
        config.content = Some(content);
    }
    config.ui.reduced_motion |= cli.reduced_motion;

    // Content errors surface here, before the terminal is taken over
    let portfolio = folio_config::load_portfolio(&config)?;

    info!(
        config = %config_path.display(),
        content = ?config.content,
        reduced_motion = config.ui.reduced_motion,
        "starting folio"
    );

    let mut app = App::new(Arc::new(portfolio), &config);
    app.run().await
}
