//! Server state management
//!
//! One tournament engine per process, shared across handlers.

use roundrobin_core::{EngineConfig, Tournament};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Server-wide shared state
///
/// All mutations go through [`ServerState::tournament_mut`], so a roster
/// change and its schedule regeneration are never observed half-done.
pub struct ServerState {
    tournament: RwLock<Tournament>,
}

impl ServerState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            tournament: RwLock::new(Tournament::with_config(config)),
        }
    }

    /// Shared read access to the engine
    pub fn tournament(&self) -> RwLockReadGuard<'_, Tournament> {
        // Engine operations cannot panic part-way, so a poisoned lock still
        // guards consistent state.
        self.tournament.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access to the engine
    pub fn tournament_mut(&self) -> RwLockWriteGuard<'_, Tournament> {
        self.tournament.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
