//! In-memory collection state behind an admin list screen.

use crate::domain::Resource;

/// Owns the authoritative collection for one screen.
///
/// `base` is the last unfiltered fetch; `displayed` is what the table
/// renders, either the base or the latest search result. Search results
/// replace the displayed set, never merge with it, and clearing the query
/// restores the cached base without a network round trip.
#[derive(Clone, Debug, Default)]
pub struct ListState<T> {
    base: Vec<T>,
    displayed: Vec<T>,
    filtered: bool,
}

impl<T: Resource> ListState<T> {
    pub fn new() -> Self {
        Self {
            base: Vec::new(),
            displayed: Vec::new(),
            filtered: false,
        }
    }

    /// Replaces the base collection after a fetch.
    pub fn set_base(&mut self, items: Vec<T>) {
        self.displayed = items.clone();
        self.base = items;
        self.filtered = false;
    }

    /// Replaces the displayed collection with a search result.
    pub fn set_search_results(&mut self, items: Vec<T>) {
        self.displayed = items;
        self.filtered = true;
    }

    /// Restores the cached base collection.
    pub fn clear_search(&mut self) {
        self.displayed = self.base.clone();
        self.filtered = false;
    }

    pub fn items(&self) -> &[T] {
        &self.displayed
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    /// Removes the entity with the given id from both the displayed and
    /// the base collection, preserving relative order. A deleted entity
    /// must not resurface when a search is cleared.
    pub fn remove(&mut self, id: i64) {
        self.base.retain(|item| item.id() != id);
        self.displayed.retain(|item| item.id() != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mission::Mission;

    fn mission(id: i64, titre: &str) -> Mission {
        Mission {
            id,
            titre: titre.to_string(),
            ..Mission::default()
        }
    }

    #[test]
    fn search_results_replace_and_clear_restores() {
        let mut state = ListState::new();
        state.set_base(vec![mission(1, "A"), mission(2, "B"), mission(3, "C")]);

        state.set_search_results(vec![mission(2, "B")]);
        assert!(state.is_filtered());
        assert_eq!(state.len(), 1);

        state.clear_search();
        assert!(!state.is_filtered());
        let titles: Vec<&str> = state.items().iter().map(|m| m.titre.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn remove_drops_exactly_one_keeping_order() {
        let mut state = ListState::new();
        state.set_base(vec![mission(1, "A"), mission(2, "B"), mission(3, "C")]);

        state.remove(2);

        let ids: Vec<i64> = state.items().iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn removal_survives_clearing_a_search() {
        let mut state = ListState::new();
        state.set_base(vec![mission(1, "A"), mission(2, "B")]);
        state.set_search_results(vec![mission(2, "B")]);

        state.remove(2);
        state.clear_search();

        assert_eq!(state.items().iter().map(|m| m.id).collect::<Vec<_>>(), [1]);
    }
}
