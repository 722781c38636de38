//! Todo Context
//!
//! Reactive handle to the widget state. The form handler holds a copy and the
//! rendered components get it through the Leptos Context API.

use leptos::logging::log;
use leptos::prelude::*;

use crate::models::Todo;
use crate::state::{TodoAction, TodoList};

/// Copyable handle to the todo list signal
#[derive(Clone, Copy)]
pub struct TodoContext {
    todos: RwSignal<TodoList>,
}

impl Default for TodoContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoContext {
    pub fn new() -> Self {
        Self {
            todos: RwSignal::new(TodoList::new()),
        }
    }

    /// Apply an intent. Subscribers are only notified when the list changed.
    pub fn dispatch(&self, action: TodoAction) -> bool {
        log!("[TODO] dispatch {}", action.kind());
        let mut changed = false;
        self.todos.maybe_update(|list| {
            changed = list.apply(action);
            changed
        });
        changed
    }

    /// Current todos in display order (tracked)
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.with(|list| list.items().to_vec())
    }

    /// Whether the list is empty (tracked)
    pub fn is_empty(&self) -> bool {
        self.todos.with(TodoList::is_empty)
    }

    /// Read the list without subscribing
    pub fn with_untracked<U>(&self, f: impl FnOnce(&TodoList) -> U) -> U {
        self.todos.with_untracked(f)
    }
}

/// Get the todo context provided by the widget
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
