//! Rank command - sort `name=wins` pairs into standings

use anyhow::{Context, Result};
use clap::Args;

use roundrobin_core::{Standing, Standings};

#[derive(Args)]
pub struct RankArgs {
    /// Entries in `name=wins` form
    #[arg(required = true, num_args = 1..)]
    pub entries: Vec<String>,

    /// Output standings as a JSON object in rank order
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RankArgs) -> Result<()> {
    let standings = parse_entries(&args.entries)?;
    if let Some(leader) = standings.leader() {
        tracing::info!("{} leads with {} wins", leader.name, leader.wins);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        print_standings(&standings);
    }

    Ok(())
}

/// Parse and rank all entries, rejecting repeated names
fn parse_entries(entries: &[String]) -> Result<Standings> {
    let mut parsed: Vec<Standing> = Vec::with_capacity(entries.len());
    for entry in entries {
        let standing = parse_entry(entry)?;
        if parsed.iter().any(|s| s.name == standing.name) {
            anyhow::bail!("Player listed twice: {}", standing.name);
        }
        parsed.push(standing);
    }
    Ok(Standings::from_entries(parsed))
}

/// Parse one `name=wins` entry
fn parse_entry(entry: &str) -> Result<Standing> {
    let (name, wins) = entry
        .rsplit_once('=')
        .with_context(|| format!("Expected name=wins, got '{}'", entry))?;
    let wins: u32 = wins
        .trim()
        .parse()
        .with_context(|| format!("Invalid win count in '{}'", entry))?;

    Ok(Standing::new(name.trim(), wins))
}

fn print_standings(standings: &Standings) {
    println!("\n=== Leaderboard ===");
    let width = standings.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for (i, standing) in standings.iter().enumerate() {
        println!(
            "  {:>3}. {:<width$}  {}",
            i + 1,
            standing.name,
            standing.wins,
            width = width
        );
    }
}
