//! UI Components
//!
//! Leptos components that render the todos into the host page.

mod todo_renderer;
mod todo_rows;
mod todo_row;
mod delete_button;

pub use todo_renderer::TodoRenderer;
pub use todo_rows::TodoRows;
pub use todo_row::TodoRow;
pub use delete_button::DeleteButton;
