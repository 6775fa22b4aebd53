use serde::{Deserialize, Serialize};

/// Insertion-ordered set of Pokémon IDs.
///
/// Backs both the favorites and the caught lists. Serializes as a plain array so the
/// persisted record stays readable; duplicates in a loaded array are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct IdSet(Vec<u32>);

impl IdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.0.iter().position(|&x| x == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<u32>> for IdSet {
    fn from(ids: Vec<u32>) -> Self {
        let mut set = IdSet::new();
        for id in ids {
            if !set.contains(id) {
                set.0.push(id);
            }
        }
        set
    }
}

impl From<IdSet> for Vec<u32> {
    fn from(set: IdSet) -> Self {
        set.0
    }
}

impl FromIterator<u32> for IdSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        IdSet::from(iter.into_iter().collect::<Vec<_>>())
    }
}
