//! Todo Row Component
//!
//! A single todo: clickable text and a delete button.

use leptos::prelude::*;

use crate::components::DeleteButton;
use crate::config::{row_text_classes, ACTIONS_CLASSES, ROW_CLASSES};
use crate::context::use_todo_context;
use crate::models::Todo;
use crate::state::TodoAction;

/// A single row in the list. Clicking the text toggles completion.
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();
    let id = todo.id;

    view! {
        <div class=ROW_CLASSES data-id=id.to_string()>
            <div
                class=row_text_classes(todo.completed)
                on:click=move |_| {
                    ctx.dispatch(TodoAction::Toggle(id));
                }
            >
                {todo.text}
            </div>
            <div class=ACTIONS_CLASSES>
                <DeleteButton on_delete=Callback::new(move |_: ()| {
                    ctx.dispatch(TodoAction::Delete(id));
                }) />
            </div>
        </div>
    }
}
