//! Win-count leaderboard and sorted standings

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Standing of a player on the leaderboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
}

impl Standing {
    pub fn new(name: impl Into<String>, wins: u32) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// Mapping from player name to win count
///
/// Unordered. Display order comes from [`Leaderboard::standings`], which is
/// recomputed on every call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    wins: FxHashMap<String, u32>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.wins.contains_key(name)
    }

    /// Win count for a player, if listed
    pub fn wins(&self, name: &str) -> Option<u32> {
        self.wins.get(name).copied()
    }

    /// Names on the board, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.wins.keys().map(String::as_str)
    }

    /// List a player, keeping any existing count
    pub fn insert(&mut self, name: &str) -> u32 {
        *self.wins.entry(name.to_string()).or_insert(0)
    }

    /// Drop a player and their wins
    pub fn remove(&mut self, name: &str) -> Option<u32> {
        self.wins.remove(name)
    }

    /// Move a player's wins to a new name
    pub fn rename(&mut self, old: &str, new: &str) -> Option<u32> {
        let wins = self.wins.remove(old)?;
        self.wins.insert(new.to_string(), wins);
        Some(wins)
    }

    /// Add one win, returning the new count
    pub fn award(&mut self, name: &str) -> Option<u32> {
        let wins = self.wins.get_mut(name)?;
        *wins += 1;
        Some(*wins)
    }

    /// Standings sorted by wins (descending), then name (ascending)
    pub fn standings(&self) -> Standings {
        Standings::from_entries(
            self.wins
                .iter()
                .map(|(name, &wins)| Standing::new(name.as_str(), wins)),
        )
    }
}

/// Leaderboard in display order
///
/// Serializes as a JSON object whose keys follow the ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standings(Vec<Standing>);

impl Standings {
    /// Rank arbitrary entries
    pub fn from_entries(entries: impl IntoIterator<Item = Standing>) -> Self {
        let mut standings: Vec<Standing> = entries.into_iter().collect();
        rank(&mut standings);
        Self(standings)
    }

    /// Top of the table
    pub fn leader(&self) -> Option<&Standing> {
        self.0.first()
    }

    pub fn as_slice(&self) -> &[Standing] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Standing> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a Standing;
    type IntoIter = std::slice::Iter<'a, Standing>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Standings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for standing in &self.0 {
            map.serialize_entry(&standing.name, &standing.wins)?;
        }
        map.end()
    }
}

/// Sort by wins (descending), then name (ascending)
pub fn rank(standings: &mut [Standing]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
}
