//! Widget errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A mount point needed before any handler can be bound is missing
    #[error("Initialization Failed: could not find essential DOM element '{0}'")]
    Initialization(&'static str),
    /// A render target disappeared from the document
    #[error("render target '{0}' is missing")]
    RenderPreconditionMissing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_element() {
        let err = WidgetError::Initialization("todo-form");
        assert_eq!(
            err.to_string(),
            "Initialization Failed: could not find essential DOM element 'todo-form'"
        );
        assert!(WidgetError::RenderPreconditionMissing("empty-message")
            .to_string()
            .contains("empty-message"));
    }
}
