use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{BufReader, stdin, stdout};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use travel_planner::catalog::Catalog;
use travel_planner::mcp::{ToolClient, ToolCommand, serve};
use travel_planner::planner::PlannerConfig;
use travel_planner::tools::TravelTools;
use travel_planner::web::{AppState, create_router};

#[derive(Debug, Parser)]
#[command(name = "travel-planner", version, about = "Travel planning tools over MCP")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Serve the tools over stdio (JSON-RPC, one message per line)
    Tools {
        /// Destination catalog (JSON); the bundled catalog when absent
        #[arg(long, env = "TRAVEL_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Run the HTTP bridge in front of a tool server process
    Bridge {
        #[arg(long, env = "TRAVEL_BRIDGE_ADDR", default_value = "127.0.0.1:3001")]
        addr: SocketAddr,

        /// Passed on to the spawned tool server as `--catalog <path>`, also
        /// when a custom tools command is given
        #[arg(long, env = "TRAVEL_CATALOG")]
        catalog: Option<PathBuf>,

        /// Command starting the tool server; this executable in tools mode
        /// when absent
        #[arg(
            long,
            env = "TRAVEL_TOOLS_COMMAND",
            num_args = 1..,
            value_delimiter = ' '
        )]
        tools_command: Vec<String>,
    },
}

/// Logs go to stderr; stdout carries the protocol in tools mode.
fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Catalog::builtin().context("Bundled catalog is invalid"),
    }
}

async fn run_tools(catalog: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    info!(destinations = catalog.len(), "Catalog loaded");
    let tools = TravelTools::new(Arc::new(catalog), Arc::new(PlannerConfig::default()));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, exiting");
            Ok(())
        }
        served = serve(&tools, BufReader::new(stdin()), stdout()) => {
            served.context("Tool server I/O failed")
        }
    }
}

async fn run_bridge(addr: SocketAddr, catalog: Option<&Path>, tools_command: Vec<String>) -> Result<()> {
    let command = match tools_command.split_first() {
        Some((program, args)) => args
            .iter()
            .fold(ToolCommand::new(program), |command, arg| command.arg(arg))
            .with_catalog(catalog),
        None => ToolCommand::current_exe(catalog).context("Cannot locate this executable")?,
    };

    let state = match ToolClient::spawn(&command).await {
        Ok(client) => AppState::connected(client),
        Err(e) => {
            error!(error = %e, "Failed to connect to tool server");
            warn!("Serving without a tool server; tool routes will answer 503");
            AppState::not_connected()
        }
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Bridge listening on http://{addr}");
    info!("  POST /call-tool  - Call a tool");
    info!("  GET  /tools      - List tools");
    info!("  GET  /health     - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("Bridge server failed")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_tracing();

    match cli.mode {
        Mode::Tools { catalog } => run_tools(catalog.as_deref()).await,
        Mode::Bridge {
            addr,
            catalog,
            tools_command,
        } => run_bridge(addr, catalog.as_deref(), tools_command).await,
    }
}
