//! Full tournament state

use crate::state::ServerState;
use axum::{extract::State, Json};
use roundrobin_core::TournamentState;
use std::sync::Arc;

/// Roster, sorted leaderboard and current match
pub async fn get_state(State(state): State<Arc<ServerState>>) -> Json<TournamentState> {
    Json(state.tournament().state())
}
