//! Delete Button Component
//!
//! Cross icon button that removes its row.

use leptos::prelude::*;

use crate::config::DELETE_BUTTON_CLASSES;

#[component]
pub fn DeleteButton(#[prop(into)] on_delete: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class=DELETE_BUTTON_CLASSES
            aria-label="Delete todo"
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            <svg
                class="h-6 w-6"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
                stroke-width="2"
            >
                <path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12" />
            </svg>
        </button>
    }
}
