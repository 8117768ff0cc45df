//! Schedule command - print the round-robin schedule for a roster
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_tournament(), report_schedule()

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use roundrobin_core::{Outcome, Pairing, Tournament};

#[derive(Args)]
pub struct ScheduleArgs {
    /// Player names in roster order
    #[arg(required = true, num_args = 1..)]
    pub players: Vec<String>,

    /// Output the schedule as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    players: &'a [String],
    matches: &'a [Pairing],
    total: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: ScheduleArgs) -> Result<()> {
    let tournament = build_tournament(&args.players)?;

    tracing::info!(
        "{} players, {} matches",
        tournament.players().len(),
        tournament.schedule().len()
    );

    if args.json {
        print_json_schedule(&tournament)?;
    } else {
        print_text_schedule(&tournament);
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Register every player, skipping repeats
fn build_tournament(players: &[String]) -> Result<Tournament> {
    let mut tournament = Tournament::new();
    for name in players {
        if tournament.add_player(name)? == Outcome::AlreadyPresent {
            tracing::warn!("Skipping duplicate player: {}", name);
        }
    }
    Ok(tournament)
}

fn print_json_schedule(tournament: &Tournament) -> Result<()> {
    let output = ScheduleOutput {
        players: tournament.players(),
        matches: tournament.schedule().matches(),
        total: tournament.schedule().len(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_text_schedule(tournament: &Tournament) {
    let matches = tournament.schedule().matches();
    if matches.is_empty() {
        println!("Not enough players for a match.");
        return;
    }

    println!("\n=== Round-Robin Schedule ===");
    for (i, pairing) in matches.iter().enumerate() {
        println!("  {:>3}. {} vs {}", i + 1, pairing.first(), pairing.second());
    }
}
