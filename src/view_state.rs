//! Derived View State
//!
//! Everything the page shows besides the raw rows, recomputed from the list
//! and the selected filter after every command.

use crate::models::{Filter, Row};
use crate::todos::TodoList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub row: Row,
    /// Checkbox state, always equal to the completed marker
    pub checked: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Main and footer regions are shown together
    pub show_main: bool,
    pub toggle_all_checked: bool,
    pub show_clear_completed: bool,
    pub active_count: usize,
    pub filter: Filter,
    pub rows: Vec<RowView>,
}

impl ViewState {
    pub fn derive(list: &TodoList, filter: Filter) -> Self {
        let rows = list
            .rows()
            .iter()
            .map(|row| RowView {
                row: row.clone(),
                checked: row.item.completed,
                visible: filter.shows(&row.item),
            })
            .collect();

        Self {
            show_main: !list.is_empty(),
            toggle_all_checked: list.all_completed(),
            show_clear_completed: list.any_completed(),
            active_count: list.count_active(),
            filter,
            rows,
        }
    }

    #[cfg(test)]
    pub fn visible_rows(&self) -> impl Iterator<Item = &RowView> {
        self.rows.iter().filter(|view| view.visible)
    }
}

/// "1 item left", "3 items left"
pub fn items_left_label(count: usize) -> &'static str {
    if count == 1 {
        "item left"
    } else {
        "items left"
    }
}
