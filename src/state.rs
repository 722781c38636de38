//! Todo List State
//!
//! In-memory list of todos plus the id counter. Every mutation goes through
//! [`TodoList::apply`] so UI handlers only ever produce a [`TodoAction`].

use serde::{Deserialize, Serialize};

use crate::models::Todo;

/// User intent produced by the form and the row handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    Add(String),
    Toggle(u32),
    Delete(u32),
}

impl TodoAction {
    /// Name of the intent, without its payload
    pub fn kind(&self) -> &'static str {
        match self {
            TodoAction::Add(_) => "add",
            TodoAction::Toggle(_) => "toggle",
            TodoAction::Delete(_) => "delete",
        }
    }
}

/// Insertion-ordered todos and the next id to hand out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id the next added todo will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Append a todo with trimmed `text`.
    ///
    /// Returns the new id, or `None` when the text is blank or ids ran out.
    pub fn add(&mut self, text: &str) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        self.items.push(Todo::new(id, text));
        Some(id)
    }

    /// Flip completion of `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Remove `id`, keeping the order of the rest. Unknown ids are ignored.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        self.items.len() != before
    }

    /// Apply an intent, returning whether the list changed
    pub fn apply(&mut self, action: TodoAction) -> bool {
        match action {
            TodoAction::Add(text) => self.add(&text).is_some(),
            TodoAction::Toggle(id) => self.toggle(id),
            TodoAction::Delete(id) => self.delete(id),
        }
    }
}
