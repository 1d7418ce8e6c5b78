//! Count tables: grouped (value, count) pairs.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// One row of a count table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry<K> {
    pub key: K,
    pub count: u64,
}

/// Ordered sequence of (value, count) pairs.
///
/// The order is whatever the producing aggregation chose; consumers render
/// it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountTable<K> {
    entries: Vec<CountEntry<K>>,
}

impl<K> Default for CountTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> CountTable<K> {
    /// Count occurrences of each key, ordered by first appearance.
    pub fn tally<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut positions: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<CountEntry<K>> = Vec::new();

        for key in keys {
            match positions.get(&key) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    positions.insert(key.clone(), entries.len());
                    entries.push(CountEntry { key, count: 1 });
                }
            }
        }

        Self { entries }
    }
}

impl<K> CountTable<K> {
    pub fn from_entries(entries: Vec<CountEntry<K>>) -> Self {
        Self { entries }
    }

    /// Sort by key ascending.
    pub fn sorted_by_key(mut self) -> Self
    where
        K: Ord,
    {
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }

    /// Sort by count descending. Stable, so ties keep their current order.
    pub fn sorted_by_count_desc(mut self) -> Self {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self
    }

    /// Keep the first `n` entries.
    pub fn truncated(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    pub fn reversed(mut self) -> Self {
        self.entries.reverse();
        self
    }

    pub fn entries(&self) -> &[CountEntry<K>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountEntry<K>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|e| e.count)
    }

    pub fn total(&self) -> u64 {
        self.counts().sum()
    }

    pub fn get(&self, key: &K) -> Option<u64>
    where
        K: PartialEq,
    {
        self.entries.iter().find(|e| &e.key == key).map(|e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, K> IntoIterator for &'a CountTable<K> {
    type Item = &'a CountEntry<K>;
    type IntoIter = std::slice::Iter<'a, CountEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
