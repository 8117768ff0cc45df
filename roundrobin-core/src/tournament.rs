//! Tournament engine - roster, leaderboard and schedule kept in sync
//!
//! Every roster mutation regenerates the full schedule and resets the cursor
//! to the first match. Recording a result credits the winner (subject to the
//! configured [`WinnerPolicy`](crate::WinnerPolicy)) and moves to the next
//! match.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{EngineResult, TournamentError};
use crate::leaderboard::{Leaderboard, Standings};
use crate::schedule::{serialize_current_match, Pairing, Schedule};

/// What an engine operation did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerAdded,
    PlayerRemoved,
    PlayerRenamed,
    /// Name already on the roster, nothing changed
    AlreadyPresent,
    /// Name not on the roster, nothing changed
    NotFound,
    /// Winner credited; carries their new total
    WinRecorded { winner: String, wins: u32 },
    /// Winner not eligible; the match still advanced
    WinSkipped { winner: String },
    /// Moved on without crediting anyone
    MatchSkipped,
    /// No matches to advance through
    ScheduleEmpty,
}

impl Outcome {
    /// Whether the operation was turned down by a precondition
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Outcome::AlreadyPresent | Outcome::NotFound | Outcome::WinSkipped { .. }
        )
    }
}

/// Snapshot of the tournament for display
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TournamentState {
    pub players: Vec<String>,
    pub leaderboard: Standings,
    #[serde(serialize_with = "serialize_current_match")]
    pub current_match: Option<Pairing>,
}

/// Round-robin tournament engine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tournament {
    config: EngineConfig,
    roster: Vec<String>,
    leaderboard: Leaderboard,
    schedule: Schedule,
}

impl Tournament {
    /// Empty tournament with the default (permissive) configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Roster in insertion order
    pub fn players(&self) -> &[String] {
        &self.roster
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roster.iter().any(|p| p == name)
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Leaderboard in display order, computed fresh
    pub fn standings(&self) -> Standings {
        self.leaderboard.standings()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn current_match(&self) -> Option<&Pairing> {
        self.schedule.current()
    }

    pub fn state(&self) -> TournamentState {
        TournamentState {
            players: self.roster.clone(),
            leaderboard: self.standings(),
            current_match: self.current_match().cloned(),
        }
    }

    // ========================================================================
    // Roster
    // ========================================================================

    /// Append a player to the roster
    pub fn add_player(&mut self, name: &str) -> EngineResult<Outcome> {
        self.check_name(name)?;
        if self.contains(name) {
            return self.reject(
                Outcome::AlreadyPresent,
                TournamentError::DuplicatePlayer(name.to_string()),
            );
        }

        self.roster.push(name.to_string());
        self.leaderboard.insert(name);
        self.reschedule();

        tracing::info!(player = name, players = self.roster.len(), "player added");
        Ok(Outcome::PlayerAdded)
    }

    /// Remove a player along with their wins
    pub fn remove_player(&mut self, name: &str) -> EngineResult<Outcome> {
        let Some(index) = self.position(name) else {
            return self.reject(
                Outcome::NotFound,
                TournamentError::UnknownPlayer(name.to_string()),
            );
        };

        self.roster.remove(index);
        self.leaderboard.remove(name);
        self.reschedule();

        tracing::info!(player = name, players = self.roster.len(), "player removed");
        Ok(Outcome::PlayerRemoved)
    }

    /// Rename a player in place, keeping their roster slot and wins
    pub fn rename_player(&mut self, old: &str, new: &str) -> EngineResult<Outcome> {
        self.check_name(new)?;
        let Some(index) = self.position(old) else {
            return self.reject(
                Outcome::NotFound,
                TournamentError::UnknownPlayer(old.to_string()),
            );
        };
        if self.contains(new) {
            return self.reject(
                Outcome::AlreadyPresent,
                TournamentError::DuplicatePlayer(new.to_string()),
            );
        }

        self.roster[index] = new.to_string();
        self.leaderboard.rename(old, new);
        self.reschedule();

        tracing::info!(from = old, to = new, "player renamed");
        Ok(Outcome::PlayerRenamed)
    }

    // ========================================================================
    // Matches
    // ========================================================================

    /// Credit `winner` and move to the next match
    pub fn record_winner(&mut self, winner: &str) -> EngineResult<Outcome> {
        self.advance(Some(winner))
    }

    /// Move to the next match without crediting anyone
    pub fn skip_match(&mut self) -> Outcome {
        let outcome = if self.schedule.is_empty() {
            Outcome::ScheduleEmpty
        } else {
            Outcome::MatchSkipped
        };
        self.move_cursor();
        outcome
    }

    /// Advance the schedule, crediting `winner` if one is given
    ///
    /// In strict mode an ineligible winner is an error and the cursor stays
    /// put. Otherwise the match advances regardless.
    pub fn advance(&mut self, winner: Option<&str>) -> EngineResult<Outcome> {
        let Some(winner) = winner else {
            return Ok(self.skip_match());
        };

        let outcome = self.credit(winner)?;
        self.move_cursor();
        Ok(outcome)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn credit(&mut self, winner: &str) -> EngineResult<Outcome> {
        let eligible = self
            .config
            .winner_policy
            .accepts(winner, &self.leaderboard, self.schedule.current());

        if eligible {
            if let Some(wins) = self.leaderboard.award(winner) {
                tracing::info!(winner, wins, "win recorded");
                return Ok(Outcome::WinRecorded {
                    winner: winner.to_string(),
                    wins,
                });
            }
        }

        let error = if self.leaderboard.contains(winner) {
            TournamentError::IneligibleWinner(winner.to_string())
        } else {
            TournamentError::UnknownPlayer(winner.to_string())
        };
        self.reject(
            Outcome::WinSkipped {
                winner: winner.to_string(),
            },
            error,
        )
    }

    fn move_cursor(&mut self) {
        let from = self.schedule.cursor();
        self.schedule.advance();
        tracing::debug!(
            ?from,
            to = ?self.schedule.cursor(),
            total = self.schedule.len(),
            "match cursor moved"
        );
    }

    fn reschedule(&mut self) {
        self.schedule = Schedule::round_robin(&self.roster);
        tracing::debug!(matches = self.schedule.len(), "schedule regenerated");
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.roster.iter().position(|p| p == name)
    }

    fn check_name(&self, name: &str) -> EngineResult<()> {
        if name.is_empty() && self.config.is_strict() {
            tracing::warn!("rejected empty player name");
            return Err(TournamentError::EmptyName);
        }
        Ok(())
    }

    fn reject(&self, outcome: Outcome, error: TournamentError) -> EngineResult<Outcome> {
        if self.config.is_strict() {
            tracing::warn!(%error, "operation rejected");
            Err(error)
        } else {
            tracing::debug!(?outcome, "operation ignored");
            Ok(outcome)
        }
    }
}
