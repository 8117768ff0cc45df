//! Round-robin tournament engine
//!
//! This crate holds all tournament state and rules:
//! - Roster of unique player names in insertion order
//! - Win-count leaderboard kept in sync with the roster
//! - Full round-robin schedule with a wrapping match cursor
//! - Winner eligibility policy and strict/permissive error reporting
//!
//! Transport layers hold one [`Tournament`] and call into it.

mod config;
mod error;
mod leaderboard;
mod policy;
mod schedule;
mod tournament;

pub use config::{EngineConfig, Strictness};
pub use error::{EngineResult, TournamentError};
pub use leaderboard::{rank, Leaderboard, Standing, Standings};
pub use policy::WinnerPolicy;
pub use schedule::{generate_round_robin_pairings, serialize_current_match, Pairing, Schedule};
pub use tournament::{Outcome, Tournament, TournamentState};
