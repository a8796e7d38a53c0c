//! Todo List
//!
//! The ordered collection of rows that everything on screen is derived from.
//! Index 0 is the top of the list.

use crate::config::IdPolicy;
use crate::models::{Item, Row, RowKey};

/// A user command against the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Append(String),
    Toggle(RowKey),
    Remove(RowKey),
    ToggleAll,
    ClearCompleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    rows: Vec<Row>,
    id_policy: IdPolicy,
    highest_issued: u32,
    next_key: RowKey,
}

impl TodoList {
    pub fn new(id_policy: IdPolicy) -> Self {
        Self::from_items(Vec::new(), id_policy)
    }

    /// Replace the whole list with `items`, in order
    pub fn from_items(items: Vec<Item>, id_policy: IdPolicy) -> Self {
        let mut list = Self {
            rows: Vec::with_capacity(items.len()),
            id_policy,
            highest_issued: 0,
            next_key: 0,
        };
        list.render_all(items);
        list
    }

    pub fn render_all(&mut self, items: Vec<Item>) {
        self.rows.clear();
        for item in items {
            self.highest_issued = self.highest_issued.max(item.id);
            let key = self.take_key();
            self.rows.push(Row { key, item });
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Snapshot of the items in display order
    pub fn items(&self) -> Vec<Item> {
        self.rows.iter().map(|row| row.item.clone()).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, key: RowKey) -> Option<&Item> {
        self.rows.iter().find(|row| row.key == key).map(|row| &row.item)
    }

    /// None once the id space is exhausted
    pub fn next_id(&self) -> Option<u32> {
        let base = match self.id_policy {
            IdPolicy::TopRow => self.rows.first().map_or(0, |row| row.item.id),
            IdPolicy::HighestIssued => {
                let max_listed = self.rows.iter().map(|row| row.item.id).max().unwrap_or(0);
                self.highest_issued.max(max_listed)
            }
        };
        base.checked_add(1)
    }

    /// Insert a new active item at the top. Blank titles are ignored.
    pub fn append(&mut self, title: &str) -> Option<RowKey> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let Some(id) = self.next_id() else {
            log::warn!("no id left after {}, ignoring new item", u32::MAX);
            return None;
        };
        self.highest_issued = self.highest_issued.max(id);
        let key = self.take_key();
        self.rows.insert(0, Row { key, item: Item::new(id, title) });
        Some(key)
    }

    /// Flip one row's completed flag. Returns the new flag.
    pub fn toggle(&mut self, key: RowKey) -> Option<bool> {
        let row = self.rows.iter_mut().find(|row| row.key == key)?;
        row.item.completed = !row.item.completed;
        Some(row.item.completed)
    }

    pub fn remove(&mut self, key: RowKey) -> Option<Item> {
        let index = self.rows.iter().position(|row| row.key == key)?;
        Some(self.rows.remove(index).item)
    }

    /// Uncheck everything if all rows are completed, otherwise check everything
    pub fn toggle_all(&mut self) {
        let target = !self.all_completed();
        for row in &mut self.rows {
            row.item.completed = target;
        }
    }

    /// Drop every completed row. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.item.completed);
        before - self.rows.len()
    }

    pub fn count_active(&self) -> usize {
        self.rows.iter().filter(|row| !row.item.completed).count()
    }

    /// True for an empty list
    pub fn all_completed(&self) -> bool {
        self.rows.iter().all(|row| row.item.completed)
    }

    pub fn any_completed(&self) -> bool {
        self.rows.iter().any(|row| row.item.completed)
    }

    /// Apply a command. Returns whether the list changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Append(title) => self.append(&title).is_some(),
            Action::Toggle(key) => self.toggle(key).is_some(),
            Action::Remove(key) => self.remove(key).is_some(),
            Action::ToggleAll => {
                self.toggle_all();
                !self.is_empty()
            }
            Action::ClearCompleted => self.clear_completed() > 0,
        }
    }

    fn take_key(&mut self) -> RowKey {
        let key = self.next_key;
        self.next_key += 1;
        key
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &TodoList) -> Vec<u32> {
        list.rows().iter().map(|row| row.item.id).collect()
    }

    fn key_of(list: &TodoList, id: u32) -> RowKey {
        list.rows().iter().find(|row| row.item.id == id).unwrap().key
    }

    #[test]
    fn test_append_puts_new_item_first() {
        let mut list = TodoList::default();
        list.append("buy milk");
        list.append("walk dog");

        let first = &list.rows()[0].item;
        assert_eq!(first.title, "walk dog");
        assert!(!first.completed);
        assert_eq!(ids(&list), vec![2, 1]);
    }

    #[test]
    fn test_append_blank_is_noop() {
        let mut list = TodoList::default();
        list.append("keep");
        assert_eq!(list.append(""), None);
        assert_eq!(list.append("   \t"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_append_trims_title() {
        let mut list = TodoList::default();
        list.append("  buy milk ");
        assert_eq!(list.rows()[0].item.title, "buy milk");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = TodoList::default();
        let key = list.append("a").unwrap();
        assert_eq!(list.toggle(key), Some(true));
        assert_eq!(list.toggle(key), Some(false));
        assert!(!list.get(key).unwrap().completed);
    }

    #[test]
    fn test_clear_completed_removes_only_completed() {
        let mut list = TodoList::default();
        let a = list.append("a").unwrap();
        let b = list.append("b").unwrap();
        let c = list.append("c").unwrap();
        list.toggle(a);
        list.toggle(c);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(list.len(), 1);
        assert!(list.get(b).is_some());
        assert!(list.get(a).is_none());
        assert!(list.get(c).is_none());
    }

    #[test]
    fn test_toggle_all() {
        let mut list = TodoList::default();
        let a = list.append("a").unwrap();
        list.append("b");
        list.toggle(a);

        // Mixed: everything becomes completed
        list.toggle_all();
        assert!(list.all_completed());

        // All completed: everything becomes active
        list.toggle_all();
        assert_eq!(list.count_active(), 2);
        assert!(!list.any_completed());
    }

    #[test]
    fn test_empty_list_counts_as_all_completed() {
        let list = TodoList::default();
        assert!(list.all_completed());
        assert!(!list.any_completed());
        assert_eq!(list.count_active(), 0);
    }

    #[test]
    fn test_count_active_tracks_every_command() {
        let mut list = TodoList::default();
        let actions = vec![
            Action::Append("a".into()),
            Action::Append("b".into()),
            Action::Append("c".into()),
            Action::Toggle(1),
            Action::ToggleAll,
            Action::Toggle(0),
            Action::Remove(2),
            Action::ClearCompleted,
        ];
        for action in actions {
            list.apply(action);
            let expected = list.rows().iter().filter(|row| !row.item.completed).count();
            assert_eq!(list.count_active(), expected);
        }
    }

    #[test]
    fn test_top_row_policy_reuses_ids_after_delete() {
        let mut list = TodoList::new(IdPolicy::TopRow);
        list.append("a");
        list.append("b");
        list.append("c");
        assert_eq!(ids(&list), vec![3, 2, 1]);

        list.remove(key_of(&list, 3));
        list.append("d");
        assert_eq!(ids(&list), vec![3, 2, 1]);

        list.remove(key_of(&list, 3));
        list.remove(key_of(&list, 2));
        list.append("e");
        assert_eq!(ids(&list), vec![2, 1]);
    }

    #[test]
    fn test_top_row_policy_tolerates_duplicate_ids() {
        let items = vec![Item::new(1, "x"), Item::new(5, "y"), Item::new(1, "z")];
        let mut list = TodoList::from_items(items, IdPolicy::TopRow);
        assert_eq!(list.next_id(), Some(2));

        let key = list.rows()[2].key;
        list.toggle(key);
        assert!(!list.rows()[0].item.completed);
        assert!(list.rows()[2].item.completed);
    }

    #[test]
    fn test_highest_issued_policy_never_reuses_ids() {
        let mut list = TodoList::new(IdPolicy::HighestIssued);
        list.append("a");
        list.append("b");
        list.remove(key_of(&list, 2));
        list.append("c");
        assert_eq!(ids(&list), vec![3, 1]);
    }

    #[test]
    fn test_highest_issued_policy_after_restore() {
        let items = vec![Item::new(4, "x"), Item::new(9, "y")];
        let list = TodoList::from_items(items, IdPolicy::HighestIssued);
        assert_eq!(list.next_id(), Some(10));
    }

    #[test]
    fn test_append_after_max_id_is_rejected() {
        for policy in [IdPolicy::HighestIssued, IdPolicy::TopRow] {
            let restored = vec![Item::new(u32::MAX, "restored"), Item::new(3, "older")];
            let mut list = TodoList::from_items(restored.clone(), policy);
            assert_eq!(list.next_id(), None);
            assert_eq!(list.append("next"), None);
            assert!(!list.apply(Action::Append("next".into())));
            assert_eq!(list.items(), restored);
        }
    }

    #[test]
    fn test_top_row_policy_recovers_once_max_row_is_gone() {
        let restored = vec![Item::new(u32::MAX, "restored"), Item::new(3, "older")];
        let mut list = TodoList::from_items(restored, IdPolicy::TopRow);
        let top = list.rows()[0].key;
        list.remove(top);
        assert_eq!(list.append("next"), Some(2));
        assert_eq!(list.rows()[0].item.id, 4);
    }

    #[test]
    fn test_render_all_preserves_order_and_flags() {
        let mut done = Item::new(7, "done");
        done.completed = true;
        let items = vec![Item::new(8, "open"), done];
        let list = TodoList::from_items(items.clone(), IdPolicy::HighestIssued);
        assert_eq!(list.items(), items);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut list = TodoList::default();
        assert!(!list.apply(Action::Append(" ".into())));
        assert!(!list.apply(Action::ToggleAll));
        assert!(!list.apply(Action::ClearCompleted));
        assert!(list.apply(Action::Append("a".into())));
        assert!(!list.apply(Action::Remove(99)));
    }
}
