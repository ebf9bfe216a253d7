//! Command-line front end for the logger.
//!
//! ```text
//! datadog-logger --config logger.toml validate
//! datadog-logger --config logger.toml emit --level warning "disk almost full"
//! datadog-logger --config logger.toml demo
//! ```
//!
//! Credentials may be left out of the file and supplied through
//! `DD_API_KEY`, `DD_APP_KEY` and `DD_SITE`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use datadog_logger::config::{read_config, validate_config, ConfigError};
use datadog_logger::{
    build_datadog_logger, log_critical, log_debug, log_error, log_info, log_warning, Level,
    LoggerConfig,
};

#[derive(Parser)]
#[command(name = "datadog-logger")]
#[command(
    about = "Validate logger configs and ship log lines to the remote intake",
    long_about = None
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "logger.toml")]
    config: PathBuf,

    /// Correlation id for this run; a random one is generated when the
    /// config has none.
    #[arg(long)]
    correlation_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the configuration, then exit
    Validate,
    /// Emit one message at the given level
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Level,
        message: String,
    },
    /// Emit one message per level
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datadog_logger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = read_config(&cli.config)?;
    assign_correlation_id(&mut config, cli.correlation_id);
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        config = %cli.config.display(),
        logger = %config.logger_name,
        remote_level = %config.remote.level,
        console_level = %config.console.level,
        "Configuration loaded"
    );

    if let Commands::Validate = cli.command {
        println!("{}: ok", cli.config.display());
        return Ok(());
    }

    let (tags, options) = config.into_parts();
    let logger = build_datadog_logger(tags, options)?;

    match cli.command {
        Commands::Validate => {}
        Commands::Emit { level, message } => {
            logger.emit(level, "main", message)?;
        }
        Commands::Demo => run_demo(&logger)?,
    }

    Ok(())
}

fn assign_correlation_id(config: &mut LoggerConfig, from_cli: Option<String>) {
    if let Some(id) = from_cli {
        config.tags.correlation_id = id;
    } else if config.tags.correlation_id.is_empty() {
        config.tags.correlation_id = Uuid::new_v4().to_string();
    }
}

fn run_demo(logger: &datadog_logger::Logger) -> Result<(), datadog_logger::DispatchError> {
    log_debug!(logger, "debug message from {}", logger.name())?;
    log_info!(logger, "info message")?;
    log_warning!(logger, "warning message")?;
    log_error!(logger, "error message")?;
    log_critical!(logger, "critical message")?;
    Ok(())
}
