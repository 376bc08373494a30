use std::collections::HashSet;
use std::hash::Hash;

/// Rows ticked by the user; local to the page on screen
#[derive(Clone, Debug)]
pub struct RowSelection<Id> {
    selected: HashSet<Id>,
}

impl<Id> Default for RowSelection<Id> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> RowSelection<Id> {
    /// Returns whether the row is selected afterwards
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Selects every row unless all of them already are, in which case clears
    pub fn toggle_all(&mut self, ids: &[Id]) {
        if !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id)) {
            self.selected.clear();
        } else {
            self.selected.extend(ids.iter().cloned());
        }
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Drops rows that are no longer on the page
    pub fn retain(&mut self, ids: &[Id]) {
        self.selected.retain(|id| ids.contains(id));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Hidden columns by id; does not affect what is fetched
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColumnVisibility {
    hidden: HashSet<&'static str>,
}

impl ColumnVisibility {
    pub fn set_visible(&mut self, id: &'static str, visible: bool) {
        if visible {
            self.hidden.remove(id);
        } else {
            self.hidden.insert(id);
        }
    }

    /// Returns whether the column is visible afterwards
    pub fn toggle(&mut self, id: &'static str) -> bool {
        let visible = !self.is_visible(id);
        self.set_visible(id, visible);
        visible
    }

    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }
}
