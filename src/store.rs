//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Item};
use crate::todos::{Action, TodoList};
use crate::view_state::ViewState;

/// Global widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows in display order
    pub todos: TodoList,
    /// Selected filter link
    pub filter: Filter,
}

impl AppState {
    pub fn new(todos: TodoList, filter: Filter) -> Self {
        Self { todos, filter }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a command to the list. Returns whether anything changed.
pub fn store_apply(store: &AppStore, action: Action) -> bool {
    store.todos().write().apply(action)
}

/// Current items in display order, without subscribing
pub fn store_snapshot(store: &AppStore) -> Vec<Item> {
    store.todos().with_untracked(|todos| todos.items())
}

pub fn store_filter(store: &AppStore) -> Filter {
    store.filter().get_untracked()
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}

/// Derived view state, recomputed whenever the list or filter changes
pub fn store_view_state(store: AppStore) -> Memo<ViewState> {
    Memo::new(move |_| {
        let filter = store.filter().get();
        store.todos().with(|todos| ViewState::derive(todos, filter))
    })
}
