//! Engine errors, returned only in strict mode

/// Rejected tournament operation
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TournamentError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("player already registered: {0}")]
    DuplicatePlayer(String),

    #[error("player not found: {0}")]
    UnknownPlayer(String),

    #[error("{0} is not playing the current match")]
    IneligibleWinner(String),
}

pub type EngineResult<T> = Result<T, TournamentError>;
