//! Todo Widget
//!
//! Binds the host page form to the todo state and starts the renderer once
//! the document is ready.

use leptos::logging::{error, log};
use leptos::mount::{mount_to, UnmountHandle};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

use crate::components::TodoRenderer;
use crate::config::MountIds;
use crate::context::TodoContext;
use crate::error::WidgetError;
use crate::mount::{self, FormMount};
use crate::state::TodoAction;

/// A running widget. Dropping it detaches the form handler and stops rendering.
pub struct TodoWidget {
    ctx: TodoContext,
    form: HtmlFormElement,
    on_submit: Closure<dyn FnMut(Event)>,
    _renderer: UnmountHandle<AnyViewState>,
}

impl TodoWidget {
    /// Resolve mount points, bind the form and start rendering.
    ///
    /// Fails when the form or the input is missing; in that case nothing is bound.
    /// The list container and empty-state indicator are resolved on each render.
    pub fn init(document: &Document, ids: MountIds) -> Result<Self, WidgetError> {
        let FormMount { form, input } = FormMount::resolve(document, &ids)?;
        let body = document.body().ok_or(WidgetError::Initialization("body"))?;
        let ctx = TodoContext::new();

        let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.prevent_default();
            submit_text(&ctx, &input);
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(|_| WidgetError::Initialization(ids.form))?;

        // The renderer owns no markup of its own; it only hosts the render effect
        let renderer = mount_to(body, move || {
            provide_context(ctx);
            view! { <TodoRenderer ids=ids /> }.into_any()
        });

        log!("[TODO] widget initialized");
        Ok(Self { ctx, form, on_submit, _renderer: renderer })
    }

    pub fn context(&self) -> TodoContext {
        self.ctx
    }

    /// Start the widget on document ready. The widget lives for the rest of the page.
    pub fn start_on_ready(ids: MountIds) {
        let Some(document) = mount::document() else {
            error!("[TODO] {}", WidgetError::Initialization("document"));
            return;
        };

        if document.ready_state() != "loading" {
            start(&document, ids);
            return;
        }

        let ready_doc = document.clone();
        let on_ready = Closure::once(move || start(&ready_doc, ids));
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_err()
        {
            error!("[TODO] could not listen for DOMContentLoaded");
            return;
        }
        on_ready.forget();
    }
}

impl Drop for TodoWidget {
    fn drop(&mut self) {
        self.form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref())
            .ok();
    }
}

fn start(document: &Document, ids: MountIds) {
    match TodoWidget::init(document, ids) {
        Ok(widget) => std::mem::forget(widget),
        Err(err) => error!("[TODO] {}", err),
    }
}

/// Add the input's text as a todo and clear the input. Blank text is ignored.
fn submit_text(ctx: &TodoContext, input: &HtmlInputElement) {
    let text = input.value();
    if text.trim().is_empty() {
        return;
    }
    if ctx.dispatch(TodoAction::Add(text)) {
        input.set_value("");
    }
}
