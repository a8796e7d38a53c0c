//! Application Context
//!
//! Shared state provided via Leptos Context API. All user commands go
//! through `dispatch`, which applies them and persists the result.

use leptos::prelude::*;

use crate::models::Filter;
use crate::storage::{SharedBackend, TodoStore};
use crate::store::{store_apply, store_filter, store_set_filter, store_snapshot, store_view_state, AppStore};
use crate::todos::Action;
use crate::view_state::ViewState;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    persistence: StoredValue<TodoStore<SharedBackend>>,
    /// Derived state for the current list and filter
    pub view: Memo<ViewState>,
}

impl AppContext {
    pub fn new(store: AppStore, persistence: TodoStore<SharedBackend>) -> Self {
        Self {
            store,
            persistence: StoredValue::new(persistence),
            view: store_view_state(store),
        }
    }

    /// Apply a command, then save the new snapshot
    pub fn dispatch(&self, action: Action) {
        log::debug!("dispatch {:?}", action);
        if !store_apply(&self.store, action) {
            return;
        }
        let items = store_snapshot(&self.store);
        self.persistence.with_value(|persistence| {
            if let Err(e) = persistence.save(&items) {
                log::error!("failed to save {} items: {}", items.len(), e);
            }
        });
    }

    pub fn filter(&self) -> Filter {
        store_filter(&self.store)
    }

    pub fn set_filter(&self, filter: Filter) {
        store_set_filter(&self.store, filter);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
