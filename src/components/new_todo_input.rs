//! New Todo Input Component
//!
//! Header text field. Enter appends the text as a new item at the top.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::todos::Action;

#[component]
pub fn NewTodoInput() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ctx.dispatch(Action::Append(new_text.get()));
        // Cleared even when the text was blank
        set_new_text.set(String::new());
    };

    view! {
        <header class="header">
            <h1>"todos"</h1>
            <input
                class="new-todo"
                placeholder="What needs to be done?"
                autofocus=true
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </header>
    }
}
