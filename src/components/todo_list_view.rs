//! Todo List View Component
//!
//! Main region: the bulk toggle and the rows.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::todos::Action;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();
    let view = ctx.view;

    let display = move || if view.with(|v| v.show_main) { "block" } else { "none" };

    view! {
        <section class="main" style:display=display>
            <input
                id="toggle-all"
                class="toggle-all"
                type="checkbox"
                prop:checked=move || view.with(|v| v.toggle_all_checked)
                on:change=move |_| ctx.dispatch(Action::ToggleAll)
            />
            <label for="toggle-all">"Mark all as complete"</label>

            <ul class="todo-list">
                <For
                    each=move || view.get().rows
                    // Every field the row renders, so a change re-renders the row
                    key=|row| (row.row.key, row.row.item.completed, row.visible)
                    children=move |row| view! { <TodoRow view=row /> }
                />
            </ul>
        </section>
    }
}
