//! Todo Widget App
//!
//! Restores the saved list, provides the context and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoInput, TodoFooter, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Filter;
use crate::storage::{LocalStore, SharedBackend, TodoStore};
use crate::store::AppState;
use crate::todos::TodoList;

fn location_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Filter after navigating to `hash`. Unknown routes keep `current`.
pub fn next_filter(current: Filter, hash: &str) -> Filter {
    Filter::from_hash(hash).unwrap_or(current)
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let backend: SharedBackend = Box::new(LocalStore);
    let persistence = TodoStore::new(backend, config.storage_key.clone());
    let items = persistence.load();
    log::info!("restored {} items from {}", items.len(), persistence.key());

    let todos = TodoList::from_items(items, config.id_policy);
    let store = Store::new(AppState::new(todos, next_filter(Filter::All, &location_hash())));

    let ctx = AppContext::new(store, persistence);
    provide_context(ctx);

    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        ctx.set_filter(next_filter(ctx.filter(), &location_hash()));
    });

    view! {
        <section class="todoapp">
            <NewTodoInput />
            <TodoListView />
            <TodoFooter />
        </section>
        <footer class="info">
            <p>"Click a checkbox to complete an item"</p>
        </footer>
    }
}
