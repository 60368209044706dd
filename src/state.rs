//! Transient Page State
//!
//! Pending quantity edits and checkbox selection, kept apart from the
//! rendered view so the pages can verify them independently of the DOM.

use std::collections::{HashMap, HashSet};

use crate::models::QuantityChange;

/// Unsaved quantity edits layered over the last server-confirmed values.
///
/// An item has a pending entry iff its displayed quantity differs from its
/// cached original. Adjustments clamp at zero.
#[derive(Debug, Clone, Default)]
pub struct QuantityEdits {
    originals: HashMap<u32, u32>,
    pending: HashMap<u32, u32>,
}

impl QuantityEdits {
    pub fn seed(items: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            originals: items.into_iter().collect(),
            pending: HashMap::new(),
        }
    }

    /// The quantity the page should display: pending edit if any, else the
    /// cached original.
    pub fn displayed(&self, item_id: u32) -> u32 {
        self.pending
            .get(&item_id)
            .or_else(|| self.originals.get(&item_id))
            .copied()
            .unwrap_or(0)
    }

    /// Apply a +/- adjustment and return the new displayed quantity.
    /// Unknown items are ignored.
    pub fn adjust(&mut self, item_id: u32, delta: i32) -> u32 {
        let current = self.displayed(item_id);
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as u32)
        };
        match self.originals.get(&item_id) {
            Some(&original) if original == next => {
                self.pending.remove(&item_id);
            }
            Some(_) => {
                self.pending.insert(item_id, next);
            }
            None => return current,
        }
        next
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The full pending map as a batch-update payload, ordered by item id.
    pub fn changes(&self) -> Vec<QuantityChange> {
        let mut changes: Vec<QuantityChange> = self
            .pending
            .iter()
            .map(|(&item_id, &quantity)| QuantityChange { item_id, quantity })
            .collect();
        changes.sort_by_key(|c| c.item_id);
        changes
    }

    /// Drop every pending edit and return the originals the display must
    /// revert to.
    pub fn reset(&mut self) -> Vec<(u32, u32)> {
        let restored = self
            .pending
            .keys()
            .filter_map(|id| self.originals.get(id).map(|&q| (*id, q)))
            .collect();
        self.pending.clear();
        restored
    }

    /// Adopt the pending values as the new originals after a confirmed save.
    pub fn commit(&mut self) {
        for (item_id, quantity) in self.pending.drain() {
            self.originals.insert(item_id, quantity);
        }
    }

    /// Record a server-confirmed quantity, discarding any pending edit.
    pub fn set_original(&mut self, item_id: u32, quantity: u32) {
        self.originals.insert(item_id, quantity);
        self.pending.remove(&item_id);
    }

    /// Forget an item that left the container.
    pub fn remove(&mut self, item_id: u32) {
        self.originals.remove(&item_id);
        self.pending.remove(&item_id);
    }
}

/// Item ids chosen via checkboxes for batch operations.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    chosen: HashSet<u32>,
}

impl Selection {
    pub fn toggle(&mut self, id: u32, checked: bool) {
        if checked {
            self.chosen.insert(id);
        } else {
            self.chosen.remove(&id);
        }
    }

    /// Master-checkbox behavior: everything on or everything off.
    pub fn set_all(&mut self, ids: impl IntoIterator<Item = u32>, checked: bool) {
        if checked {
            self.chosen.extend(ids);
        } else {
            self.chosen.clear();
        }
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.chosen.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.chosen.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Batch actions refuse to fire on an empty selection: `None` means
    /// alert the user and send nothing.
    pub fn batch_ids(&self) -> Option<Vec<u32>> {
        if self.chosen.is_empty() {
            None
        } else {
            Some(self.ids())
        }
    }
}

/// "0 items selected" / "1 item selected" / "N items selected".
pub fn selected_label(count: usize) -> String {
    if count == 1 {
        "1 item selected".to_string()
    } else {
        format!("{count} items selected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_never_goes_below_zero() {
        let mut edits = QuantityEdits::seed([(7, 2)]);
        for _ in 0..10 {
            edits.adjust(7, -1);
        }
        assert_eq!(edits.displayed(7), 0);
    }

    #[test]
    fn pending_entry_exists_iff_displayed_differs_from_original() {
        let mut edits = QuantityEdits::seed([(1, 5)]);
        assert!(!edits.is_dirty());

        edits.adjust(1, 1);
        assert!(edits.is_dirty());
        assert_eq!(edits.changes(), vec![QuantityChange { item_id: 1, quantity: 6 }]);

        // Back to the original removes the entry.
        edits.adjust(1, -1);
        assert!(!edits.is_dirty());
        assert!(edits.changes().is_empty());
    }

    #[test]
    fn reset_restores_originals_and_empties_the_map() {
        let mut edits = QuantityEdits::seed([(1, 5), (2, 3)]);
        edits.adjust(1, 2);
        edits.adjust(2, -3);

        let mut restored = edits.reset();
        restored.sort_unstable();
        assert_eq!(restored, vec![(1, 5), (2, 3)]);
        assert!(!edits.is_dirty());
        assert_eq!(edits.displayed(1), 5);
        assert_eq!(edits.displayed(2), 3);
    }

    #[test]
    fn commit_adopts_pending_values_as_new_originals() {
        let mut edits = QuantityEdits::seed([(1, 5)]);
        edits.adjust(1, 3);
        edits.commit();
        assert!(!edits.is_dirty());
        assert_eq!(edits.displayed(1), 8);

        // Returning to 8 is now "no change".
        edits.adjust(1, 1);
        edits.adjust(1, -1);
        assert!(!edits.is_dirty());
    }

    #[test]
    fn confirmed_edit_overrides_pending() {
        let mut edits = QuantityEdits::seed([(1, 5)]);
        edits.adjust(1, 2);
        edits.set_original(1, 9);
        assert!(!edits.is_dirty());
        assert_eq!(edits.displayed(1), 9);
    }

    #[test]
    fn adjusting_unknown_item_is_ignored() {
        let mut edits = QuantityEdits::seed([(1, 5)]);
        edits.adjust(99, 1);
        assert!(!edits.is_dirty());
        assert_eq!(edits.displayed(99), 0);
    }

    #[test]
    fn selection_mirrors_checkbox_toggles() {
        let mut selection = Selection::default();
        selection.toggle(1, true);
        selection.toggle(2, true);
        assert!(selection.contains(1));
        assert_eq!(selection.len(), 2);

        selection.toggle(1, false);
        assert!(!selection.contains(1));
        assert_eq!(selection.ids(), vec![2]);
    }

    #[test]
    fn master_toggle_sets_everything_identically() {
        let mut selection = Selection::default();
        selection.set_all([1, 2, 3], true);
        assert_eq!(selection.ids(), vec![1, 2, 3]);

        selection.set_all([1, 2, 3], false);
        assert!(selection.is_empty());
    }

    #[test]
    fn empty_selection_yields_no_batch_ids() {
        let selection = Selection::default();
        assert_eq!(selection.batch_ids(), None);

        let mut selection = Selection::default();
        selection.toggle(3, true);
        selection.toggle(1, true);
        assert_eq!(selection.batch_ids(), Some(vec![1, 3]));
    }

    #[test]
    fn selected_label_pluralizes() {
        assert_eq!(selected_label(0), "0 items selected");
        assert_eq!(selected_label(1), "1 item selected");
        assert_eq!(selected_label(2), "2 items selected");
    }
}
