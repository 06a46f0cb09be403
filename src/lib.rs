pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod request;
pub mod rules;
pub mod vehicle;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;

use crate::{cli::Cli, config::AppConfig, error::AdvisorError, request::AdviceRequest};

/// Flushes the file log on drop; lives for the rest of the process.
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

pub fn run() -> Result<()> {
    let args = Cli::parse();
    // init-config must work even when the existing file does not parse.
    let cfg = match args.command {
        cli::Commands::InitConfig { .. } => AppConfig::default(),
        _ => config::load_or_default(&args.config)?,
    };

    init_logging(&cfg, args.verbose);
    install_panic_hook();

    match args.command {
        cli::Commands::Advise { request, demo, date, compact } => {
            let req = if demo {
                AdviceRequest::demo()
            } else {
                read_request(request.as_deref())?
            };
            let today  = resolve_evaluation_date(date.as_deref(), &cfg)?;
            let inputs = req.into_inputs()?;
            let report = engine::build_report(&inputs.vehicle, &inputs.history, today);
            print_json(&report, cfg.pretty_output && !compact)
        }
        cli::Commands::Rules => print_json(&rules::catalog(), cfg.pretty_output),
        cli::Commands::InitConfig { force } => {
            let path = init_config(&args.config, force)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// One-line message for a failed run, with the full context chain.
pub fn error_message(err: &anyhow::Error) -> String {
    format!("error: {:#}", err)
}

// ---------------------------------------------------------------------------
// Logging: stderr by default, a daily rolling file when log_dir is set.
// stdout is reserved for the JSON report.
// ---------------------------------------------------------------------------

fn init_logging(cfg: &AppConfig, verbose: bool) {
    let directive = if verbose { "maintenance_advisor_lib=debug" } else { cfg.log_filter.as_str() };
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    match directive.parse::<tracing_subscriber::filter::Directive>() {
        Ok(d)  => filter = filter.add_directive(d),
        Err(e) => eprintln!("Ignoring invalid log_filter '{}': {}", directive, e),
    }

    if cfg.log_dir.as_os_str().is_empty() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return;
    }

    if let Err(e) = std::fs::create_dir_all(&cfg.log_dir) {
        eprintln!("Cannot create log dir {}: {}", cfg.log_dir.display(), e);
    }
    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, "advisor.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init();

    tracing::debug!("Logging to {}", cfg.log_dir.display());
}

/// Route panics through tracing so they reach the log file too.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        tracing::error!("PANIC at {}: {}", location, message);
        default_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Command helpers
// ---------------------------------------------------------------------------

/// Read a request from a file, or from stdin for `None` / "-".
fn read_request(path: Option<&Path>) -> Result<AdviceRequest> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Reading request {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(AdvisorError::from)?;
            buf
        }
    };
    let source = path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("-"));
    tracing::debug!("Read {} bytes of request from {}", text.len(), source.display());
    Ok(AdviceRequest::from_json(&text)?)
}

/// Evaluation date: explicit argument, then the configured reference date,
/// then the local calendar date.
pub fn resolve_evaluation_date(
    arg: Option<&str>,
    cfg: &AppConfig,
) -> Result<NaiveDate, AdvisorError> {
    if let Some(raw) = arg {
        return NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| AdvisorError::InvalidDate(raw.to_owned()));
    }
    Ok(cfg.reference_date.unwrap_or_else(|| Local::now().date_naive()))
}

/// Write a default `advisor.toml` into `config_dir`. An existing file is only
/// replaced with `force`.
fn init_config(config_dir: &Path, force: bool) -> Result<PathBuf> {
    let path = config_dir.join(config::CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists, use --force to overwrite it", path.display());
    }
    config::save(&AppConfig::default(), config_dir)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(path)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
