//! # Playbook Web Server
//!
//! Serves the decision engine HTTP API over a directory of authored
//! decision graphs, using the in-memory session store. Durable deployments
//! swap in their own store behind the same engine.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use playbook_core::config::EngineConfig;
use playbook_core::engine::{ActionCatalog, DecisionEngine, RecommendationSynthesizer};
use playbook_core::logging::init_structured_logging;
use playbook_core::playbooks::StaticPlaybookProvider;
use playbook_core::store::InMemorySessionStore;
use playbook_core::web::{build_router, AppState};

#[derive(Parser)]
#[command(name = "playbook-web")]
#[command(about = "Serve the playbook decision engine HTTP API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Directory of decision graph JSON files, one playbook per file
    #[arg(short, long, default_value = "playbooks")]
    playbook_dir: String,

    /// Optional action catalog JSON file mapping terminal nodes to
    /// recommended actions
    #[arg(short, long)]
    catalog: Option<String>,

    /// Bind address override (otherwise PLAYBOOK_BIND_ADDRESS or default)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let cli = Cli::parse();
    let mut config = EngineConfig::from_env().context("invalid engine configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }

    let provider = StaticPlaybookProvider::from_directory(&cli.playbook_dir)
        .with_context(|| format!("failed to load playbooks from {}", cli.playbook_dir))?;
    info!(
        playbooks = provider.playbook_ids().len(),
        dir = %cli.playbook_dir,
        "Playbook catalog loaded"
    );

    let catalog = match &cli.catalog {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read action catalog {path}"))?;
            serde_json::from_str::<ActionCatalog>(&raw)
                .with_context(|| format!("invalid action catalog {path}"))?
        }
        None => ActionCatalog::default(),
    };

    let synthesizer = RecommendationSynthesizer::new(config.risk_policy.clone(), catalog);
    let engine = DecisionEngine::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(provider),
        synthesizer,
        config.clone(),
    );

    let router = build_router(AppState::new(Arc::new(engine)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    info!(bind_address = %config.bind_address, "Playbook web server listening");

    axum::serve(listener, router)
        .await
        .context("server terminated")?;

    Ok(())
}
