//! Round-robin schedule - match list and cursor
//!
//! The schedule is a fixed ring of pairings. Recording a result moves the
//! cursor forward and wraps back to the first match after the last one.

use serde::{Serialize, Serializer};

/// A single match between two players
///
/// Serializes as a two-element array `[first, second]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pairing(pub String, pub String);

impl Pairing {
    /// Create a pairing in roster order
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self(first.into(), second.into())
    }

    /// Player listed first in the roster
    pub fn first(&self) -> &str {
        &self.0
    }

    /// Player listed second in the roster
    pub fn second(&self) -> &str {
        &self.1
    }

    /// Whether the named player takes part in this match
    pub fn contains(&self, name: &str) -> bool {
        self.0 == name || self.1 == name
    }
}

/// Ordered match list with a wrapping cursor
///
/// `cursor` is `None` exactly when the match list is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    matches: Vec<Pairing>,
    cursor: Option<usize>,
}

impl Schedule {
    /// Build the full round-robin schedule for a roster
    ///
    /// Pairs are `(roster[i], roster[j])` for every `i < j`, outer index first.
    pub fn round_robin(roster: &[String]) -> Self {
        let matches: Vec<Pairing> = generate_round_robin_pairings(roster.len())
            .into_iter()
            .map(|(i, j)| Pairing::new(roster[i].as_str(), roster[j].as_str()))
            .collect();
        let cursor = if matches.is_empty() { None } else { Some(0) };

        Self { matches, cursor }
    }

    /// All matches in play order
    pub fn matches(&self) -> &[Pairing] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Index of the match in progress, `None` for an empty schedule
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Match in progress
    pub fn current(&self) -> Option<&Pairing> {
        self.cursor.and_then(|i| self.matches.get(i))
    }

    /// Move to the next match, wrapping after the last one
    ///
    /// No-op on an empty schedule.
    pub fn advance(&mut self) -> Option<&Pairing> {
        let len = self.matches.len();
        if let Some(cursor) = self.cursor.as_mut() {
            *cursor = (*cursor + 1) % len;
        }
        self.current()
    }
}

/// Generate all index pairings for a round-robin over `n` entrants
pub fn generate_round_robin_pairings(n: usize) -> Vec<(usize, usize)> {
    let mut pairings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairings.push((i, j));
        }
    }
    pairings
}

/// Serialize an optional match as `[]` or `[first, second]`
pub fn serialize_current_match<S>(
    current: &Option<Pairing>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match current {
        Some(pairing) => pairing.serialize(serializer),
        None => serializer.collect_seq(std::iter::empty::<&str>()),
    }
}
