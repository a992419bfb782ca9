use std::collections::BTreeSet;

/// Set of selection keys (`orderId-index`) chosen for a batch update.
///
/// Keys are kept as raw strings; they are parsed only when a batch runs, so a
/// malformed key fails that item instead of the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the key was already selected.
    pub fn select(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn deselect(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }

    /// Selects the key if absent, deselects it otherwise. Returns whether the
    /// key is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Drains every key, leaving the selection empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.keys).into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
