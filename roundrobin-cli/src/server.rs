//! Server command - start the HTTP API
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to roundrobin-server crate)
//! - Level 4: configuration validation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use roundrobin_core::{EngineConfig, Strictness, WinnerPolicy};
use roundrobin_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port number to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Directory of frontend files served for non-API paths
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable, `*` for any)
    #[arg(long = "cors-origin", default_value = "*")]
    pub cors_origins: Vec<String>,

    /// Reject duplicate, unknown and ineligible names with an HTTP error
    #[arg(long)]
    pub strict: bool,

    /// Who may be credited with a win: `any` or `current-match`
    #[arg(long, default_value = "any")]
    pub winner_policy: WinnerPolicy,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting round-robin server on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    if let Some(dir) = &args.static_dir {
        validate_static_dir(dir)?;
    }

    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::Permissive
    };

    Ok(ServerConfig {
        host: args.host.clone(),
        port: args.port,
        static_dir: args
            .static_dir
            .as_ref()
            .map(|dir| dir.to_string_lossy().to_string()),
        cors_origins: args.cors_origins.clone(),
        engine: EngineConfig {
            strictness,
            winner_policy: args.winner_policy,
        },
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Validate that static directory exists
fn validate_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
