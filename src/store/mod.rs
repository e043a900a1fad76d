//! In-memory expense store
//!
//! Holds every expense grouped by date label and implements the user intents:
//! add, remove, selection toggling, select-all, sum-of-selected, and bulk
//! delete. Group order is first-seen label order, entry order within a group
//! is append order; every enumeration walks groups outer, entries inner.
//!
//! The store is plain data with no caching: selection totals are computed on
//! demand, and it knows nothing about rendering or persistence.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateGroup, Expense, ExpenseId, Money};

/// In-memory collection of expenses grouped by date label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    groups: Vec<DateGroup>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already-grouped entries (used by the storage layer)
    ///
    /// The caller is responsible for the grouping invariants: unique labels
    /// and no empty groups.
    pub fn from_groups(groups: Vec<DateGroup>) -> Self {
        Self { groups }
    }

    /// Add a new expense from raw user input
    ///
    /// Validates that the title is non-empty, the price text is non-empty,
    /// and the price parses as a non-negative number. On any validation
    /// failure the store is left untouched. On success the expense is
    /// appended to the group for `date_label`, creating the group at the end
    /// of group order if absent, and its generated id is returned.
    pub fn add(&mut self, title: &str, price_text: &str, date_label: &str) -> ExpenseResult<ExpenseId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ExpenseError::Validation("Enter a title".into()));
        }

        let price_text = price_text.trim();
        if price_text.is_empty() {
            return Err(ExpenseError::Validation("Enter a price".into()));
        }

        let price = Money::parse(price_text).map_err(|_| {
            ExpenseError::Validation(format!("Price must be a number, got '{}'", price_text))
        })?;
        if price.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Price must not be negative, got '{}'",
                price_text
            )));
        }

        let expense = Expense::new(title, price);
        let id = expense.id;

        match self.groups.iter_mut().find(|g| g.label == date_label) {
            Some(group) => group.entries.push(expense),
            None => self.groups.push(DateGroup::new(date_label, expense)),
        }

        Ok(id)
    }

    /// Remove a single expense by id
    ///
    /// Drops the expense's group if it becomes empty. A missing id is a
    /// silent no-op: returns `false` and never errors, so removal is
    /// idempotent.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let mut removed = false;
        for group in &mut self.groups {
            let before = group.entries.len();
            group.entries.retain(|e| e.id != id);
            if group.entries.len() != before {
                removed = true;
                break;
            }
        }
        if removed {
            self.groups.retain(|g| !g.entries.is_empty());
        }
        removed
    }

    /// Set the selection flag of a single expense
    ///
    /// Returns `false` if the id is unknown.
    pub fn set_selected(&mut self, id: ExpenseId, value: bool) -> bool {
        match self.iter_mut().find(|e| e.id == id) {
            Some(expense) => {
                expense.selected = value;
                true
            }
            None => false,
        }
    }

    /// Select every expense, or clear every selection if all are already selected
    ///
    /// A single toggle operation so callers never observe a half-applied
    /// state. Returns the new uniform selection value.
    pub fn toggle_select_all(&mut self) -> bool {
        let new_value = !self.all_selected();
        for expense in self.iter_mut() {
            expense.selected = new_value;
        }
        new_value
    }

    /// Sum the prices of all selected expenses
    ///
    /// Errors with `NoSelection` when nothing is selected, so callers can
    /// distinguish "nothing selected" from a zero-priced selection.
    pub fn sum_selected(&self) -> ExpenseResult<Money> {
        if !self.any_selected() {
            return Err(ExpenseError::NoSelection);
        }
        Ok(self.iter().filter(|e| e.selected).map(|e| e.price).sum())
    }

    /// Remove every selected expense in one step
    ///
    /// Returns the removed expenses in iteration order so the caller can
    /// report what was deleted. Errors with `NoSelection` and performs no
    /// mutation when nothing is selected. Groups left empty are dropped.
    pub fn remove_selected(&mut self) -> ExpenseResult<Vec<Expense>> {
        if !self.any_selected() {
            return Err(ExpenseError::NoSelection);
        }

        let mut removed = Vec::new();
        for group in &mut self.groups {
            let mut kept = Vec::with_capacity(group.entries.len());
            for expense in group.entries.drain(..) {
                if expense.selected {
                    removed.push(expense);
                } else {
                    kept.push(expense);
                }
            }
            group.entries = kept;
        }
        self.groups.retain(|g| !g.entries.is_empty());

        Ok(removed)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.iter().find(|e| e.id == id)
    }

    /// Resolve an id from its full or prefix string form
    pub fn find_by_id_str(&self, s: &str) -> Option<&Expense> {
        self.iter().find(|e| e.id.matches_prefix(s))
    }

    /// Groups in first-seen order
    pub fn groups(&self) -> &[DateGroup] {
        &self.groups
    }

    /// Iterate over all expenses, group order outer, entry order inner
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Expense> {
        self.groups.iter_mut().flat_map(|g| g.entries.iter_mut())
    }

    /// Total number of expenses across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Check whether the store has no expenses
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check whether any expense is selected
    pub fn any_selected(&self) -> bool {
        self.iter().any(|e| e.selected)
    }

    /// Check whether every expense is selected (true for an empty store)
    pub fn all_selected(&self) -> bool {
        self.iter().all(|e| e.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_two_days() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add("Coffee", "3.50", "1 июня").unwrap();
        store.add("Lunch", "8.00", "1 июня").unwrap();
        store.add("Taxi", "7.00", "2 июня").unwrap();
        store
    }

    #[test]
    fn test_add_groups_by_label() {
        let store = store_with_two_days();
        assert_eq!(store.len(), 3);
        assert_eq!(store.groups().len(), 2);
        assert_eq!(store.groups()[0].label, "1 июня");
        assert_eq!(store.groups()[0].entries.len(), 2);
        assert_eq!(store.groups()[1].label, "2 июня");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let store = store_with_two_days();
        let titles: Vec<&str> = store.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Coffee", "Lunch", "Taxi"]);
    }

    #[test]
    fn test_add_empty_title_is_rejected() {
        let mut store = ExpenseStore::new();
        let err = store.add("", "5.00", "1 июня").unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());

        // Whitespace-only titles count as empty
        let err = store.add("   ", "5.00", "1 июня").unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_empty_price_is_rejected() {
        let mut store = ExpenseStore::new();
        let err = store.add("Book", "", "1 июня").unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_non_numeric_price_is_rejected() {
        let mut store = ExpenseStore::new();
        let err = store.add("Book", "abc", "1 июня").unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_negative_price_is_rejected() {
        let mut store = ExpenseStore::new();
        let err = store.add("Refund", "-5.00", "1 июня").unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_select_then_sum_returns_price() {
        let mut store = ExpenseStore::new();
        let id = store.add("Coffee", "3.50", "1 июня").unwrap();
        assert!(store.set_selected(id, true));
        assert_eq!(store.sum_selected().unwrap(), Money::from_cents(350));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = store_with_two_days();
        let id = store.iter().next().unwrap().id;

        assert!(store.remove(id));
        assert_eq!(store.len(), 2);

        // Second removal of the same id: no error, no change
        assert!(!store.remove(id));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_removing_last_entry_drops_group() {
        let mut store = store_with_two_days();
        let taxi_id = store
            .iter()
            .find(|e| e.title == "Taxi")
            .map(|e| e.id)
            .unwrap();

        store.remove(taxi_id);

        assert_eq!(store.groups().len(), 1);
        assert!(!store.groups().iter().any(|g| g.label == "2 июня"));
    }

    #[test]
    fn test_toggle_select_all_from_none() {
        let mut store = store_with_two_days();

        assert!(store.toggle_select_all());
        assert!(store.all_selected());

        // Second toggle restores the prior (all-clear) state
        assert!(!store.toggle_select_all());
        assert!(!store.any_selected());
    }

    #[test]
    fn test_toggle_select_all_from_all_selected() {
        let mut store = store_with_two_days();
        store.toggle_select_all();
        assert!(store.all_selected());

        assert!(!store.toggle_select_all());
        assert!(!store.any_selected());

        assert!(store.toggle_select_all());
        assert!(store.all_selected());
    }

    #[test]
    fn test_toggle_select_all_with_partial_selection_selects_all() {
        let mut store = store_with_two_days();
        let id = store.iter().next().unwrap().id;
        store.set_selected(id, true);

        assert!(store.toggle_select_all());
        assert!(store.all_selected());
    }

    #[test]
    fn test_sum_selected_with_nothing_selected() {
        let store = store_with_two_days();
        let err = store.sum_selected().unwrap_err();
        assert!(err.is_no_selection());
    }

    #[test]
    fn test_sum_selected_distinguishes_zero_sum() {
        let mut store = ExpenseStore::new();
        let id = store.add("Freebie", "0.00", "1 июня").unwrap();
        store.set_selected(id, true);

        // A selected zero-priced expense sums to zero, not NoSelection
        assert_eq!(store.sum_selected().unwrap(), Money::zero());
    }

    #[test]
    fn test_sum_selected_adds_across_groups() {
        let mut store = ExpenseStore::new();
        let a = store.add("Coffee", "10.00", "1 июня").unwrap();
        let b = store.add("Taxi", "5.50", "2 июня").unwrap();

        store.set_selected(a, true);
        assert_eq!(store.sum_selected().unwrap(), Money::from_cents(1000));

        store.set_selected(b, true);
        assert_eq!(store.sum_selected().unwrap(), Money::from_cents(1550));
    }

    #[test]
    fn test_remove_selected_with_nothing_selected_does_not_mutate() {
        let mut store = store_with_two_days();
        let before = store.clone();

        let err = store.remove_selected().unwrap_err();
        assert!(err.is_no_selection());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_selected_returns_removed_in_order() {
        let mut store = store_with_two_days();
        let coffee = store.iter().find(|e| e.title == "Coffee").unwrap().id;
        let taxi = store.iter().find(|e| e.title == "Taxi").unwrap().id;
        store.set_selected(taxi, true);
        store.set_selected(coffee, true);

        let removed = store.remove_selected().unwrap();
        let titles: Vec<&str> = removed.iter().map(|e| e.title.as_str()).collect();
        // Iteration order, not selection order
        assert_eq!(titles, vec!["Coffee", "Taxi"]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.groups().len(), 1);
        assert_eq!(store.groups()[0].label, "1 июня");
    }

    #[test]
    fn test_remove_selected_drops_emptied_groups() {
        let mut store = store_with_two_days();
        store.toggle_select_all();

        let removed = store.remove_selected().unwrap();
        assert_eq!(removed.len(), 3);
        assert!(store.is_empty());
        assert!(store.groups().is_empty());
    }

    #[test]
    fn test_set_selected_unknown_id() {
        let mut store = store_with_two_days();
        assert!(!store.set_selected(ExpenseId::new(), true));
        assert!(!store.any_selected());
    }

    #[test]
    fn test_find_by_id_str() {
        let mut store = ExpenseStore::new();
        let id = store.add("Coffee", "3.50", "1 июня").unwrap();

        let full = id.to_string();
        assert_eq!(store.find_by_id_str(&full).unwrap().id, id);
        assert_eq!(store.find_by_id_str(&full[..8]).unwrap().id, id);
        assert!(store.find_by_id_str("zzzz").is_none());
    }

    #[test]
    fn test_readding_label_reuses_group_position() {
        let mut store = store_with_two_days();
        store.add("Dinner", "12.00", "1 июня").unwrap();

        assert_eq!(store.groups().len(), 2);
        assert_eq!(store.groups()[0].entries.len(), 3);
        let last = store.groups()[0].entries.last().unwrap();
        assert_eq!(last.title, "Dinner");
    }
}
