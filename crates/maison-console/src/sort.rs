//! Client-side multi-column sort state.
//!
//! The chain keeps insertion order (first entry is the primary sort key)
//! and encodes to the wire format the listing endpoints expect: a JSON
//! array of `{key, order}` objects.

use serde::{Deserialize, Serialize};

/// Sort direction of one column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    /// Ascending order.
    Asc,
    /// Descending order.
    #[default]
    Desc,
}

/// One column of a multi-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry<S> {
    /// The sort key.
    pub key: S,
    /// The direction.
    pub order: SortDir,
}

/// An ordered multi-column sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChain<S> {
    entries: Vec<SortEntry<S>>,
}

impl<S> Default for SortChain<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S: Copy + Eq> SortChain<S> {
    /// Creates an empty sort chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries in priority order.
    pub fn entries(&self) -> &[SortEntry<S>] {
        &self.entries
    }

    /// Returns whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the direction currently applied to `key`, if any.
    pub fn direction_of(&self, key: S) -> Option<SortDir> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.order)
    }

    /// Applies a header click to the chain.
    ///
    /// A key not yet in the chain is appended ascending; clicking an
    /// ascending key flips it to descending; clicking a descending key
    /// removes it (asc → desc → removed).
    pub fn toggle(&mut self, key: S) {
        match self.entries.iter().position(|entry| entry.key == key) {
            None => self.entries.push(SortEntry {
                key,
                order: SortDir::Asc,
            }),
            Some(index) => match self.entries[index].order {
                SortDir::Asc => self.entries[index].order = SortDir::Desc,
                SortDir::Desc => {
                    let _ = self.entries.remove(index);
                }
            },
        }
    }

    /// Clears the chain back to the default ordering.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Serialize> SortChain<S> {
    /// Encodes the chain as the `sort` query-string value.
    ///
    /// Returns `None` for an empty chain so the parameter can be
    /// omitted entirely.
    pub fn to_query_value(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        // Serializing plain data cannot fail.
        serde_json::to_string(&self.entries).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Key {
        Name,
        Price,
    }

    #[test]
    fn toggle_cycles_asc_desc_removed() {
        let mut chain = SortChain::new();

        chain.toggle(Key::Price);
        assert_eq!(chain.direction_of(Key::Price), Some(SortDir::Asc));

        chain.toggle(Key::Price);
        assert_eq!(chain.direction_of(Key::Price), Some(SortDir::Desc));

        chain.toggle(Key::Price);
        assert_eq!(chain.direction_of(Key::Price), None);
        assert!(chain.is_empty());
    }

    #[test]
    fn insertion_order_is_priority_order() {
        let mut chain = SortChain::new();
        chain.toggle(Key::Price);
        chain.toggle(Key::Name);

        let keys: Vec<Key> = chain.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![Key::Price, Key::Name]);

        // Toggling an existing key keeps its position.
        chain.toggle(Key::Price);
        let keys: Vec<Key> = chain.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![Key::Price, Key::Name]);
    }

    #[test]
    fn encodes_to_json_array() {
        let mut chain = SortChain::new();
        chain.toggle(Key::Price);
        chain.toggle(Key::Name);
        chain.toggle(Key::Name);

        assert_eq!(
            chain.to_query_value().as_deref(),
            Some(r#"[{"key":"price","order":"asc"},{"key":"name","order":"desc"}]"#),
        );
    }

    #[test]
    fn empty_chain_encodes_to_none() {
        let chain: SortChain<Key> = SortChain::new();
        assert_eq!(chain.to_query_value(), None);
    }
}
