//! Roster endpoints
//!
//! Add, delete and rename players. Each mutation runs under the engine's
//! write lock and the response is rendered from the same guard.

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{Path, State},
    Json,
};
use roundrobin_core::{Standings, Tournament, TournamentState};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct RosterResponse {
    pub players: Vec<String>,
    pub leaderboard: Standings,
}

impl From<&Tournament> for RosterResponse {
    fn from(tournament: &Tournament) -> Self {
        Self {
            players: tournament.players().to_vec(),
            leaderboard: tournament.standings(),
        }
    }
}

/// Add a player
pub async fn add_player(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> Result<Json<RosterResponse>, ApiError> {
    let mut tournament = state.tournament_mut();
    let outcome = tournament.add_player(&name)?;
    tracing::debug!(player = %name, ?outcome, "add_player");

    Ok(Json(RosterResponse::from(&*tournament)))
}

/// Delete a player and their wins
pub async fn delete_player(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> Result<Json<RosterResponse>, ApiError> {
    let mut tournament = state.tournament_mut();
    let outcome = tournament.remove_player(&name)?;
    tracing::debug!(player = %name, ?outcome, "delete_player");

    Ok(Json(RosterResponse::from(&*tournament)))
}

/// Rename a player, keeping their wins
pub async fn rename_player(
    State(state): State<Arc<ServerState>>,
    Path((old, new)): Path<(String, String)>,
) -> Result<Json<TournamentState>, ApiError> {
    let mut tournament = state.tournament_mut();
    let outcome = tournament.rename_player(&old, &new)?;
    tracing::debug!(from = %old, to = %new, ?outcome, "rename_player");

    Ok(Json(tournament.state()))
}
