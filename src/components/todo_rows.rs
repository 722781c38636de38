//! Todo Rows Component
//!
//! One row per todo, in list order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::models::Todo;

#[component]
pub fn TodoRows(todos: Vec<Todo>) -> impl IntoView {
    todos
        .into_iter()
        .map(|todo| view! { <TodoRow todo=todo /> })
        .collect_view()
}
