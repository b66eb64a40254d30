//! Row selection for bulk actions.
//!
//! A cross-page "select all" cannot enumerate every matching id on the
//! client, so an unbounded selection is represented as "all matching rows
//! minus an explicit exclusion set". Every consumer matches exhaustively
//! on the three modes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which rows a bulk action applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "ids")]
pub enum Selection {
    /// Nothing selected.
    None,
    /// An explicit set of selected row ids.
    Explicit(BTreeSet<i64>),
    /// Every row matching the current filter, except these ids.
    AllExcept(BTreeSet<i64>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::None
    }
}

impl Selection {
    /// Returns whether nothing is selected.
    ///
    /// `AllExcept` counts as a live selection even with an empty
    /// exclusion set; only the count (which needs `total`) can tell
    /// whether it is effectively empty.
    pub fn is_none(&self) -> bool {
        match self {
            Selection::None => true,
            Selection::Explicit(ids) => ids.is_empty(),
            Selection::AllExcept(_) => false,
        }
    }

    /// Returns whether the given row is selected.
    pub fn is_selected(&self, id: i64) -> bool {
        match self {
            Selection::None => false,
            Selection::Explicit(ids) => ids.contains(&id),
            Selection::AllExcept(excluded) => !excluded.contains(&id),
        }
    }

    /// Returns the number of selected rows given the filtered total.
    pub fn selected_count(&self, total: i64) -> i64 {
        match self {
            Selection::None => 0,
            Selection::Explicit(ids) => ids.len() as i64,
            Selection::AllExcept(excluded) => (total - excluded.len() as i64).max(0),
        }
    }

    /// Toggles one row in or out of the selection.
    pub fn toggle(&mut self, id: i64) {
        match self {
            Selection::None => {
                *self = Selection::Explicit(BTreeSet::from([id]));
            }
            Selection::Explicit(ids) => {
                if !ids.remove(&id) {
                    ids.insert(id);
                }
                if ids.is_empty() {
                    *self = Selection::None;
                }
            }
            Selection::AllExcept(excluded) => {
                if !excluded.remove(&id) {
                    excluded.insert(id);
                }
            }
        }
    }

    /// Selects every row matching the current filter.
    pub fn select_all(&mut self) {
        *self = Selection::AllExcept(BTreeSet::new());
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        *self = Selection::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_selects_nothing() {
        let selection = Selection::None;
        assert!(selection.is_none());
        assert!(!selection.is_selected(7));
        assert_eq!(selection.selected_count(100), 0);
    }

    #[test]
    fn toggle_from_none_creates_explicit() {
        let mut selection = Selection::None;
        selection.toggle(7);
        assert_eq!(selection, Selection::Explicit(BTreeSet::from([7])));
        assert!(selection.is_selected(7));
        assert_eq!(selection.selected_count(100), 1);
    }

    #[test]
    fn explicit_collapses_to_none_when_emptied() {
        let mut selection = Selection::None;
        selection.toggle(7);
        selection.toggle(7);
        assert_eq!(selection, Selection::None);
    }

    #[test]
    fn all_except_counts_against_total() {
        let mut selection = Selection::None;
        selection.select_all();
        assert_eq!(selection.selected_count(23), 23);

        selection.toggle(5);
        assert_eq!(selection.selected_count(23), 22);
        assert!(!selection.is_selected(5));
        assert!(selection.is_selected(6));
    }

    #[test]
    fn all_except_toggle_roundtrip_restores_state() {
        let mut selection = Selection::None;
        selection.select_all();
        let before = selection.clone();

        selection.toggle(9);
        selection.toggle(9);

        assert_eq!(selection, before);
        assert_eq!(selection.selected_count(40), 40);
    }

    #[test]
    fn count_never_goes_negative() {
        let selection = Selection::AllExcept(BTreeSet::from([1, 2, 3]));
        assert_eq!(selection.selected_count(2), 0);
    }
}
