/*
[INPUT]:  CLI arguments, YAML configuration file, TASK_DASHBOARD__* environment
[OUTPUT]: Interactive task dashboard or a single headless request
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use task_dashboard::config::load_tasks_file;
use task_dashboard::headless;
use task_dashboard::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogWriterFactory, TuiOptions, run_tui};
use task_dashboard::{DashboardConfig, DashboardState, Dispatcher};
use task_dashboard_adapter::{DashboardClient, RequestKind, RequestMode, Task};

#[derive(Parser, Debug)]
#[command(name = "task-dashboard", version, about = "Task prioritization and automation dashboard")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Overrides logging.level from the config
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// heuristic, llm or hybrid
    #[arg(long = "mode", value_name = "MODE")]
    mode: Option<RequestMode>,
    /// YAML or JSON task list to start from
    #[arg(long = "tasks", value_name = "FILE")]
    tasks_path: Option<PathBuf>,
    /// Print markdown results as plain lines (headless only)
    #[arg(long = "markdown")]
    markdown: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Request a prioritization suggestion and print it
    Suggest,
    /// Request an automation result and print it
    Auto,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = DashboardConfig::load(args.config_path.as_deref()).context("load config")?;
    let command = args.command.unwrap_or(Command::Tui);
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());

    let mode = match args.mode {
        Some(mode) => mode,
        None => config.initial_mode()?,
    };
    let tasks = match args.tasks_path.as_deref() {
        Some(path) => load_tasks_file(path)?,
        None => Task::starter_list(),
    };
    let state = DashboardState::with_tasks(tasks, mode);

    let client = DashboardClient::with_config_and_base_url(
        config.api.client_config(),
        &config.api.base_url,
    )
    .context("build API client")?;
    let dispatcher = Dispatcher::new(Arc::new(client), config.api.send_mode);

    match command {
        Command::Tui => {
            let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
            init_tui_tracing(&log_level, LogWriterFactory::new(log_buffer.clone()))?;
            info!(base_url = %config.api.base_url, "starting task-dashboard");
            run_tui(state, dispatcher, log_buffer, TuiOptions::from_config(&config)).await
        }
        Command::Suggest | Command::Auto => {
            init_tracing(&log_level)?;
            let kind = if command == Command::Suggest {
                RequestKind::Suggest
            } else {
                RequestKind::Automate
            };
            let text = headless::run_once(&dispatcher, state, kind, args.markdown).await?;
            println!("{text}");
            Ok(())
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_tui_tracing(log_level: &str, writer: LogWriterFactory) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
