//! agentgate - declarative HTTP gateway for agents.
//!
//! Main entry point: loads and validates the configuration, instantiates
//! the configured agent from the built-in registry, wires the configured
//! routes into an HTTP router, and serves it.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use agentgate_api::{ApiServer, SchemaRegistry, ServerConfig, build_router};
use agentgate_config::{Config, ConfigLoader, ConfigValidator};
use agentgate_core::AgentRegistry;

/// Agentgate CLI.
#[derive(Parser)]
#[command(name = "agentgate")]
#[command(about = "Expose a configured agent's methods as a declarative HTTP API")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "config/default.toml",
        env = "AGENTGATE_CONFIG",
        global = true
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server in the foreground (default)
    Run {
        /// Bind host, overrides [server].host
        #[arg(long)]
        host: Option<String>,

        /// Bind port, overrides [server].port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate the configuration file and exit
    Check,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}

/// Build the registry of agent kinds available to the configuration.
fn builtin_registry() -> anyhow::Result<AgentRegistry> {
    let registry = AgentRegistry::new();
    agentgate_agent_echo::register(&registry)?;
    Ok(registry)
}

fn load_and_validate(path: &PathBuf) -> anyhow::Result<Config> {
    let config = ConfigLoader::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;

    let result = ConfigValidator::validate(&config)?;
    for warning in &result.warnings {
        warn!("config: {}: {}", warning.path, warning.message);
    }
    if !result.is_valid() {
        for err in &result.errors {
            error!("config: {}: {}", err.path, err.message);
        }
        bail!("configuration is invalid ({} error(s))", result.errors.len());
    }

    Ok(config)
}

async fn run_server(config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let registry = builtin_registry()?;
    let agent = registry
        .create(&config.agent.kind, &config.agent.init)
        .with_context(|| format!("failed to construct agent '{}'", config.agent.kind))?;

    let schemas = SchemaRegistry::from_documents(&config.schemas)?;
    let router = build_router(&config.routes, agent, &schemas)?;

    let server_config = ServerConfig::new(
        host.unwrap_or_else(|| config.server.host.clone()),
        port.unwrap_or(config.server.port),
    );

    info!(
        "starting {} v{} ({} route(s))",
        config.app.title,
        config.app.version,
        config.routes.len()
    );
    ApiServer::new(server_config, router)
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_and_validate(&cli.config)?;

    match cli.command.unwrap_or(Commands::Run {
        host: None,
        port: None,
    }) {
        Commands::Run { host, port } => run_server(config, host, port).await,
        Commands::Check => {
            info!("configuration OK: {}", cli.config.display());
            Ok(())
        }
    }
}
