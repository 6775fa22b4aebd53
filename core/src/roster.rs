//! The fixed list of Pokémon the app works with.

use serde::{Deserialize, Serialize};

/// Generation 1 size, the default roster length.
pub const GEN1_COUNT: u32 = 151;

/// One `{name, url}` pair from the PokeAPI list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub url: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Stable ID parsed from the URL, 0 when the URL carries none.
    pub fn id(&self) -> u32 {
        id_from_url(&self.url)
    }
}

/// Parse the trailing numeric path segment of a resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` → 25. Anything unparsable yields 0.
pub fn id_from_url(url: &str) -> u32 {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .unwrap_or(0)
}

/// Ordered, immutable roster fetched once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.get(id).map(|e| e.name.as_str())
    }

    /// Valid IDs in roster order (entries with ID 0 are skipped).
    pub fn ids(&self) -> Vec<u32> {
        self.entries.iter().map(RosterEntry::id).filter(|&id| id != 0).collect()
    }

    /// Largest valid ID, used as the wrap bound for detail navigation.
    pub fn max_id(&self) -> u32 {
        self.entries.iter().map(RosterEntry::id).max().unwrap_or(0)
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<I: IntoIterator<Item = RosterEntry>>(iter: I) -> Self {
        Roster::new(iter.into_iter().collect())
    }
}
