//! Last known positions of items that have been current.

use std::collections::HashMap;
use std::hash::Hash;

/// Remembers, for every identifier ever made current, the index it was last
/// seen at.
///
/// When an item's identifier stops matching anything in the collection (the
/// host rebuilt it), this is the fallback used to guess which item took its
/// place. Entries are never evicted; the map only ever holds identifiers the
/// user has visited in one session.
#[derive(Debug, Clone)]
pub struct PositionHistory<K> {
    /// Map from identifier to index at the time it was last current
    positions: HashMap<K, usize>,
}

impl<K: Eq + Hash> PositionHistory<K> {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }

    /// Records that `id` was current at `index`, overwriting any earlier
    /// position.
    pub fn record(&mut self, id: K, index: usize) {
        self.positions.insert(id, index);
    }

    /// Returns the last recorded index for `id`.
    pub fn get(&self, id: &K) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Number of identifiers remembered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<K: Eq + Hash> Default for PositionHistory<K> {
    fn default() -> Self {
        Self::new()
    }
}
