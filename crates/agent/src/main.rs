//! Joules Agent - Main Application Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use config::{ConfigLoader, OsFileSystem};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use types::LoggerLevel;

mod app;

use app::Application;

/// Energy monitoring agent
#[derive(Debug, Parser)]
#[command(name = "agent", version, about)]
struct Cli {
    /// Directory containing config.properties
    #[arg(long, env = "AGENT_ROOT", default_value = ".")]
    root: PathBuf,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", default_value = "json", value_parser = ["json", "pretty"])]
    log_format: String,

    /// Print the resolved configuration as JSON
    #[arg(long)]
    print_config: bool,

    /// Report whether a method name is filtered (repeatable)
    #[arg(long = "check-method", value_name = "NAME")]
    check_methods: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; a missing or unreadable file ends the process
    let fs = OsFileSystem::new(&cli.root);
    let (config, report) = ConfigLoader::load_with_report_or_exit(&fs);

    // Initialize logging
    init_logging(config.logger_level(), &cli.log_format)?;

    info!("Starting Joules agent v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded from: {}", cli.root.display());
    if report.has_warnings() {
        warn!("{}", report.summary());
        for issue in &report.warnings {
            warn!(field = %issue.field, "{}", issue.message);
        }
    }

    let app = Application::new(config);

    if cli.print_config {
        app.print_config().context("Failed to print configuration")?;
    }
    for method in &cli.check_methods {
        app.check_method(method);
    }

    info!("Joules agent shutdown complete");
    Ok(())
}

/// Initialize logging from the configured logger level; `RUST_LOG` wins when set
fn init_logging(level: LoggerLevel, log_format: &str) -> Result<()> {
    let level_filter = tracing::level_filters::LevelFilter::from(level);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level_filter.to_string()));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
    }

    info!("Logging initialized");
    info!("Log level: {} ({})", level, level_filter);
    info!("Log format: {}", log_format);

    if level.is_finer_than(LoggerLevel::Config) {
        warn!("Fine-grained logging enabled - may impact measurement overhead");
    }

    Ok(())
}
