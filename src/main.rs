//! Regimen API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from a TOML file (see `--config` and `--generate-config`)
//! with environment variable overrides:
//! - `REGIMEN_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `REGIMEN_API_PORT`: Port to listen on (default: 8090)
//! - `REGIMEN_COACH_URL`: OpenAI-compatible chat endpoint
//! - `REGIMEN_COACH_MODEL`: Chat model name (default: gpt-3.5-turbo)
//! - `REGIMEN_SPEECH_URL`: Speech synthesis endpoint
//! - `REGIMEN_LOG_LEVEL` / `REGIMEN_LOG_FORMAT`: Logging overrides
//! - `OPENAI_API_KEY`: Chat model key; without it the rule-based
//!   fallback answers all chat
//! - `RUST_LOG`: Log filter (overrides the config level)

use anyhow::Context;
use clap::Parser;
use regimen::api::{serve, ApiConfig, AppState};
use regimen::coach::CoachEngine;
use regimen::config::{generate_default_config, Config};
use regimen::speech::SpeechSynthesizer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AI Diet & Fitness Coach API server
#[derive(Parser, Debug)]
#[command(name = "regimen", version, about)]
struct Cli {
    /// Path to a TOML config file (default: standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a default config file to stdout and exit
    #[arg(long)]
    generate_config: bool,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };

    if let Some(port) = cli.port {
        config.api.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting Regimen API server v{}", env!("CARGO_PKG_VERSION"));

    let coach = Arc::new(CoachEngine::from_config(&config.coach));
    if coach.has_model() {
        tracing::info!(model = %config.coach.model, "Chat model configured");
    } else {
        tracing::info!("No chat model configured (set OPENAI_API_KEY), using rule-based fallback");
    }

    let speech = Arc::new(SpeechSynthesizer::new(config.speech.clone()));

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(coach, speech, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await.context("Server error")?;

    tracing::info!("Regimen API server stopped");
    Ok(())
}

/// Initialize tracing from the `[logging]` config section
///
/// `RUST_LOG` wins over the configured level; the format switch picks
/// pretty output for development or JSON lines for production.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("regimen={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
