//! Widget Configuration
//!
//! Element ids of the host page mount points and the utility classes the
//! widget toggles. Styling itself lives in the stylesheet.

/// Ids of the elements the widget binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountIds {
    pub form: &'static str,
    pub input: &'static str,
    pub list_container: &'static str,
    pub empty_message: &'static str,
}

impl Default for MountIds {
    fn default() -> Self {
        Self {
            form: "todo-form",
            input: "todo-input",
            list_container: "todo-list-container",
            empty_message: "empty-message",
        }
    }
}

/// Class that hides the empty-state indicator
pub const HIDDEN_CLASS: &str = "hidden";

pub const ROW_CLASSES: &str =
    "flex justify-between items-center p-3 my-2 bg-gray-50 border-l-4 border-blue-500 rounded-lg shadow-sm";
pub const ROW_TEXT_CLASSES: &str = "flex-grow cursor-pointer select-none text-lg";
pub const COMPLETED_TEXT_CLASSES: &str = "line-through text-gray-500 italic";
pub const PENDING_TEXT_CLASSES: &str = "text-gray-800";
pub const ACTIONS_CLASSES: &str = "flex space-x-2 ml-4";
pub const DELETE_BUTTON_CLASSES: &str = "text-red-500 hover:text-red-700 p-1 rounded-full transition-colors";

/// Full class list of a row's text element
pub fn row_text_classes(completed: bool) -> String {
    let state = if completed { COMPLETED_TEXT_CLASSES } else { PENDING_TEXT_CLASSES };
    format!("{} {}", ROW_TEXT_CLASSES, state)
}
