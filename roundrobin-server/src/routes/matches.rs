//! Match endpoints
//!
//! Recording a winner or skipping moves the schedule cursor; the list
//! endpoint is read-only.

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{Path, State},
    Json,
};
use roundrobin_core::{serialize_current_match, Pairing, Standings, Tournament};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct MatchResponse {
    pub leaderboard: Standings,
    #[serde(serialize_with = "serialize_current_match")]
    pub current_match: Option<Pairing>,
}

impl From<&Tournament> for MatchResponse {
    fn from(tournament: &Tournament) -> Self {
        Self {
            leaderboard: tournament.standings(),
            current_match: tournament.current_match().cloned(),
        }
    }
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub matches: Vec<Pairing>,
    pub cursor: Option<usize>,
    pub total: usize,
}

/// Credit a winner and move to the next match
pub async fn record_winner(
    State(state): State<Arc<ServerState>>,
    Path(winner): Path<String>,
) -> Result<Json<MatchResponse>, ApiError> {
    let mut tournament = state.tournament_mut();
    let outcome = tournament.record_winner(&winner)?;
    tracing::debug!(winner = %winner, ?outcome, "record_winner");

    Ok(Json(MatchResponse::from(&*tournament)))
}

/// Move to the next match without crediting anyone
pub async fn skip_match(State(state): State<Arc<ServerState>>) -> Json<MatchResponse> {
    let mut tournament = state.tournament_mut();
    let outcome = tournament.skip_match();
    tracing::debug!(?outcome, "skip_match");

    Json(MatchResponse::from(&*tournament))
}

/// Full schedule with the cursor position
pub async fn list_matches(State(state): State<Arc<ServerState>>) -> Json<ScheduleResponse> {
    let tournament = state.tournament();
    let schedule = tournament.schedule();

    Json(ScheduleResponse {
        matches: schedule.matches().to_vec(),
        cursor: schedule.cursor(),
        total: schedule.len(),
    })
}
