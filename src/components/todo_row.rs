//! Todo Row Component
//!
//! One `li` in the list: completed checkbox, title and delete button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::todos::Action;
use crate::view_state::RowView;

#[component]
pub fn TodoRow(view: RowView) -> impl IntoView {
    let ctx = use_app_context();

    let key = view.row.key;
    let item = view.row.item;

    view! {
        <li
            data-id=item.id.to_string()
            class=if item.completed { "completed" } else { "" }
            style:display=if view.visible { "block" } else { "none" }
        >
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    prop:checked=view.checked
                    on:change=move |_| ctx.dispatch(Action::Toggle(key))
                />
                <label>{item.title}</label>
                <button class="destroy" on:click=move |_| ctx.dispatch(Action::Remove(key))></button>
            </div>
        </li>
    }
}
