//! grants-mcp - Main Entry Point
//!
//! Boots the MCP server over stdio. Startup failures exit non-zero;
//! steady-state tool errors never terminate the process.

use clap::{Parser, Subcommand};
use grants_mcp::config::ServerConfig;
use grants_mcp::observability::init_default_logging;
use grants_mcp::server::McpServer;
use grants_mcp::transport::run_stdio;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// MCP server for government grant opportunity search
#[derive(Parser)]
#[command(name = "grants-mcp")]
#[command(about = "MCP server exposing grant opportunity search over stdio")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdio (default)
    Serve,
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    // Logging goes to stderr; stdout belongs to the protocol
    init_default_logging();

    let cli = Cli::parse();

    info!("Starting grants-mcp v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }

    info!("Shutdown complete");
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(ServerConfig::load_from_file(path)?)
        }
        // Default search paths, then built-in defaults: the server must be
        // able to boot from environment alone
        None => Ok(ServerConfig::load_default()?),
    }
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let server = McpServer::new(config).await?;
    run_stdio(server).await?;
    Ok(())
}

fn handle_config_command(
    config: ServerConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
