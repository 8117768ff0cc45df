//! Winner eligibility

use std::fmt;
use std::str::FromStr;

use crate::leaderboard::Leaderboard;
use crate::schedule::Pairing;

/// Who may be credited with a win when a result is recorded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinnerPolicy {
    /// Any player on the leaderboard, whether or not they played the current match
    AnyKnownPlayer,
    /// Only one of the two players in the current match
    CurrentMatchOnly,
}

impl Default for WinnerPolicy {
    fn default() -> Self {
        WinnerPolicy::AnyKnownPlayer
    }
}

impl WinnerPolicy {
    /// Whether `winner` may be credited with the current match
    pub fn accepts(
        self,
        winner: &str,
        leaderboard: &Leaderboard,
        current: Option<&Pairing>,
    ) -> bool {
        if !leaderboard.contains(winner) {
            return false;
        }

        match self {
            WinnerPolicy::AnyKnownPlayer => true,
            WinnerPolicy::CurrentMatchOnly => current.is_some_and(|m| m.contains(winner)),
        }
    }
}

impl FromStr for WinnerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" | "any-known-player" => Ok(WinnerPolicy::AnyKnownPlayer),
            "current-match" | "current-match-only" => Ok(WinnerPolicy::CurrentMatchOnly),
            other => Err(format!(
                "unknown winner policy '{other}' (expected 'any' or 'current-match')"
            )),
        }
    }
}

impl fmt::Display for WinnerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinnerPolicy::AnyKnownPlayer => f.write_str("any"),
            WinnerPolicy::CurrentMatchOnly => f.write_str("current-match"),
        }
    }
}
