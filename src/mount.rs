//! Mount Points
//!
//! Lookup of the host page elements the widget reads from and writes into.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::config::{MountIds, HIDDEN_CLASS};
use crate::error::WidgetError;

/// Elements required before any handler is bound
pub struct FormMount {
    pub form: HtmlFormElement,
    pub input: HtmlInputElement,
}

impl FormMount {
    pub fn resolve(document: &Document, ids: &MountIds) -> Result<Self, WidgetError> {
        let form = find::<HtmlFormElement>(document, ids.form)
            .ok_or(WidgetError::Initialization(ids.form))?;
        let input = find::<HtmlInputElement>(document, ids.input)
            .ok_or(WidgetError::Initialization(ids.input))?;
        Ok(Self { form, input })
    }
}

/// Elements every render writes to. Looked up again on each render.
pub struct RenderTargets {
    pub list_container: HtmlElement,
    pub empty_message: HtmlElement,
}

impl RenderTargets {
    pub fn resolve(document: &Document, ids: &MountIds) -> Result<Self, WidgetError> {
        let list_container = find::<HtmlElement>(document, ids.list_container)
            .ok_or(WidgetError::RenderPreconditionMissing(ids.list_container))?;
        let empty_message = find::<HtmlElement>(document, ids.empty_message)
            .ok_or(WidgetError::RenderPreconditionMissing(ids.empty_message))?;
        Ok(Self { list_container, empty_message })
    }

    /// Show the empty-state indicator iff there are no rows
    pub fn sync_empty_state(&self, is_empty: bool) {
        let classes = self.empty_message.class_list();
        if is_empty {
            classes.remove_1(HIDDEN_CLASS).ok();
        } else {
            classes.add_1(HIDDEN_CLASS).ok();
        }
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

fn find<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}
