//! Todo Footer Component
//!
//! Remaining count, filter links and the clear-completed button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;
use crate::todos::Action;
use crate::view_state::items_left_label;

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_app_context();
    let view = ctx.view;

    let display = move || if view.with(|v| v.show_main) { "block" } else { "none" };
    let active_count = move || view.with(|v| v.active_count);
    let clear_display = move || if view.with(|v| v.show_clear_completed) { "block" } else { "none" };

    view! {
        <footer class="footer" style:display=display>
            <span class="todo-count">
                <strong>{active_count}</strong>
                " "
                {move || items_left_label(active_count())}
            </span>

            <ul class="filters">
                {Filter::ALL.iter().map(|filter| {
                    let filter = *filter;
                    let is_selected = move || view.with(|v| v.filter == filter);
                    view! {
                        <li>
                            <a
                                href=filter.href()
                                class=move || if is_selected() { "selected" } else { "" }
                                on:click=move |_| ctx.set_filter(filter)
                            >
                                {filter.label()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <button
                class="clear-completed"
                style:display=clear_display
                on:click=move |_| ctx.dispatch(Action::ClearCompleted)
            >
                "Clear completed"
            </button>
        </footer>
    }
}
