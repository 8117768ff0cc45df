//! Round-robin tracker CLI
//!
//! Commands:
//! - serve: Start the HTTP API
//! - schedule: Print the round-robin schedule for a list of players
//! - rank: Print sorted standings from name=wins pairs

mod rank_cmd;
mod schedule_cmd;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roundrobin")]
#[command(about = "Round-robin tournament tracker", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve(server::ServerArgs),
    /// Print the match schedule for a roster
    Schedule(schedule_cmd::ScheduleArgs),
    /// Print standings sorted by wins, then name
    Rank(rank_cmd::RankArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve(args) => server::run(args),
        Commands::Schedule(args) => schedule_cmd::run(args),
        Commands::Rank(args) => rank_cmd::run(args),
    }
}

/// Install the tracing subscriber, honouring RUST_LOG
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
