//! Mergington activities server
//!
//! Loads configuration, installs logging and serves the activity registry.

use clap::Parser;
use mergington_activities::utils::logging::init_logging;
use mergington_activities::{Config, Result, server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/activities.yaml";

#[derive(Parser)]
#[command(name = "activities-server")]
#[command(version = mergington_activities::VERSION)]
#[command(about = "Mergington High School extracurricular activities API", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "ACTIVITIES_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Bind host (overrides config and environment)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config and environment)
    #[arg(short, long)]
    port: Option<u16>,
}

/// Load the config file, falling back to defaults when the default path is absent
async fn load_config(cli: &Cli) -> Result<(Config, Option<String>)> {
    if !cli.config.exists() && cli.config == PathBuf::from(DEFAULT_CONFIG_PATH) {
        let note = format!(
            "Configuration file {} not found, using defaults",
            DEFAULT_CONFIG_PATH
        );
        return Ok((Config::default(), Some(note)));
    }

    Ok((Config::from_file(&cli.config).await?, None))
}

async fn run(cli: Cli) -> Result<()> {
    let (config, note) = load_config(&cli).await?;
    let mut config = config.apply_env()?;

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    init_logging(&config.logging)?;
    if let Some(note) = note {
        warn!("{}", note);
    }

    server::builder::run_server(config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the multi-line bind hints readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
