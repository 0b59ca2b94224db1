//! Clipping store

use super::entry::{Clipping, ClippingId};

/// Ordered, in-memory collection of clippings.
///
/// Display order is newest first. Adding the same text twice keeps
/// both entries.
#[derive(Debug)]
pub struct ClippingStore {
    clippings: Vec<Clipping>,
    next_id: u64,
    max_clippings: Option<usize>,
}

impl ClippingStore {
    /// Create an empty store with no size limit
    pub fn new() -> Self {
        Self {
            clippings: Vec::new(),
            next_id: 1,
            max_clippings: None,
        }
    }

    /// Create an empty store that keeps at most `max_clippings` entries.
    ///
    /// A limit of 0 means unlimited.
    pub fn with_limit(max_clippings: usize) -> Self {
        Self {
            max_clippings: (max_clippings > 0).then_some(max_clippings),
            ..Self::new()
        }
    }

    /// Capture `current_clipboard_text` as a new clipping at the front.
    ///
    /// Never fails; the empty string is a valid clipping. When a limit is
    /// set, the oldest clipping is evicted once it is exceeded.
    pub fn add_from_clipboard(&mut self, current_clipboard_text: &str) -> Clipping {
        let clipping = Clipping::new(ClippingId::new(self.next_id), current_clipboard_text);
        self.next_id += 1;

        self.clippings.insert(0, clipping.clone());

        if let Some(max) = self.max_clippings {
            self.clippings.truncate(max);
        }

        clipping
    }

    /// Remove the given clipping. No-op if it is not in the store.
    pub fn remove(&mut self, clipping: &Clipping) -> Option<Clipping> {
        self.remove_id(clipping.id())
    }

    /// Remove the clipping with `id`. No-op if it is not in the store.
    pub fn remove_id(&mut self, id: ClippingId) -> Option<Clipping> {
        let index = self.clippings.iter().position(|c| c.id() == id)?;
        Some(self.clippings.remove(index))
    }

    /// Clippings in display order
    pub fn list(&self) -> &[Clipping] {
        &self.clippings
    }

    /// Look up a clipping by id
    pub fn get(&self, id: ClippingId) -> Option<&Clipping> {
        self.clippings.iter().find(|c| c.id() == id)
    }

    /// Look up a clipping by zero-based display position
    pub fn at(&self, position: usize) -> Option<&Clipping> {
        self.clippings.get(position)
    }

    pub fn len(&self) -> usize {
        self.clippings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clippings.is_empty()
    }

    /// Configured size limit, if any
    pub fn max_clippings(&self) -> Option<usize> {
        self.max_clippings
    }
}

impl Default for ClippingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = ClippingStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list().len(), 0);
    }

    #[test]
    fn add_returns_clipping_with_text() {
        let mut store = ClippingStore::new();
        let clipping = store.add_from_clipboard("vegan ham");
        assert_eq!(clipping.text(), "vegan ham");
        assert_eq!(store.list()[0].text(), "vegan ham");
    }

    #[test]
    fn add_accepts_empty_text() {
        let mut store = ClippingStore::new();
        store.add_from_clipboard("");
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].text(), "");
    }

    #[test]
    fn newest_clipping_comes_first() {
        let mut store = ClippingStore::new();
        for text in ["one", "two", "three"] {
            store.add_from_clipboard(text);
        }
        let texts: Vec<&str> = store.list().iter().map(Clipping::text).collect();
        assert_eq!(texts, vec!["three", "two", "one"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut store = ClippingStore::new();
        let first = store.add_from_clipboard("same");
        let second = store.add_from_clipboard("same");
        assert_eq!(store.len(), 2);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn ids_increase_and_are_not_reused() {
        let mut store = ClippingStore::new();
        let first = store.add_from_clipboard("a");
        store.remove(&first);
        let second = store.add_from_clipboard("b");
        assert!(second.id() > first.id());
    }

    #[test]
    fn remove_restores_empty_state() {
        let mut store = ClippingStore::new();
        store.add_from_clipboard("x");
        let first = store.list()[0].clone();
        assert_eq!(store.remove(&first), Some(first));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_keeps_other_clippings_in_order() {
        let mut store = ClippingStore::new();
        let a = store.add_from_clipboard("a");
        let b = store.add_from_clipboard("b");
        let c = store.add_from_clipboard("c");
        store.remove(&b);
        let ids: Vec<ClippingId> = store.list().iter().map(Clipping::id).collect();
        assert_eq!(ids, vec![c.id(), a.id()]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut store = ClippingStore::new();
        store.add_from_clipboard("keep me");
        assert!(store.remove_id(ClippingId::new(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_twice_is_noop() {
        let mut store = ClippingStore::new();
        let clipping = store.add_from_clipboard("once");
        assert!(store.remove(&clipping).is_some());
        assert!(store.remove(&clipping).is_none());
    }

    #[test]
    fn list_is_stable_without_mutation() {
        let mut store = ClippingStore::new();
        store.add_from_clipboard("a");
        store.add_from_clipboard("b");
        let first = store.list().to_vec();
        let second = store.list().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn get_and_at_lookups() {
        let mut store = ClippingStore::new();
        let a = store.add_from_clipboard("a");
        let b = store.add_from_clipboard("b");
        assert_eq!(store.get(a.id()), Some(&a));
        assert_eq!(store.at(0), Some(&b));
        assert_eq!(store.at(1), Some(&a));
        assert!(store.at(2).is_none());
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut store = ClippingStore::with_limit(2);
        store.add_from_clipboard("one");
        store.add_from_clipboard("two");
        store.add_from_clipboard("three");
        let texts: Vec<&str> = store.list().iter().map(Clipping::text).collect();
        assert_eq!(texts, vec!["three", "two"]);
    }

    #[test]
    fn zero_limit_is_unlimited() {
        let mut store = ClippingStore::with_limit(0);
        assert!(store.max_clippings().is_none());
        for i in 0..50 {
            store.add_from_clipboard(&i.to_string());
        }
        assert_eq!(store.len(), 50);
    }
}
