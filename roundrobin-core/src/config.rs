//! Engine configuration
//!
//! Controls how the engine reacts to rejected operations and who may be
//! credited with a win.

use std::fmt;
use std::str::FromStr;

use crate::policy::WinnerPolicy;

/// How rejected operations are reported
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strictness {
    /// Rejections are silent no-ops reported as an `Outcome`
    Permissive,
    /// Rejections are returned as `TournamentError` and leave state untouched
    Strict,
}

impl Default for Strictness {
    fn default() -> Self {
        Strictness::Permissive
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" | "lenient" => Ok(Strictness::Permissive),
            "strict" => Ok(Strictness::Strict),
            other => Err(format!(
                "unknown strictness '{other}' (expected 'permissive' or 'strict')"
            )),
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strictness::Permissive => f.write_str("permissive"),
            Strictness::Strict => f.write_str("strict"),
        }
    }
}

/// Tournament engine configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Error reporting mode
    pub strictness: Strictness,
    /// Who may be credited with a win
    pub winner_policy: WinnerPolicy,
}

impl EngineConfig {
    /// Strict reporting with the default winner policy
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
            ..Default::default()
        }
    }

    /// Set the winner policy
    pub fn with_winner_policy(mut self, winner_policy: WinnerPolicy) -> Self {
        self.winner_policy = winner_policy;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
