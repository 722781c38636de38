//! Todo Renderer Component
//!
//! Rebuilds the list container from the current todos whenever they change.
//! Both render targets are looked up again on every render; while either is
//! missing the render is skipped and whatever is on the page stays as is.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::mount::{mount_to, UnmountHandle};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;

use crate::components::TodoRows;
use crate::config::MountIds;
use crate::context::use_todo_context;
use crate::mount::{self, RenderTargets};

#[component]
pub fn TodoRenderer(ids: MountIds) -> impl IntoView {
    let ctx = use_todo_context();
    let rows: Rc<RefCell<Option<UnmountHandle<AnyViewState>>>> = Rc::new(RefCell::new(None));

    Effect::new(move |_| {
        let todos = ctx.todos();
        let Some(document) = mount::document() else { return };
        let Ok(targets) = RenderTargets::resolve(&document, &ids) else { return };

        // Unmount the previous rows before clearing whatever else is left
        rows.borrow_mut().take();
        targets.list_container.set_inner_html("");
        targets.sync_empty_state(todos.is_empty());
        if todos.is_empty() {
            return;
        }

        let handle = mount_to(targets.list_container, move || {
            provide_context(ctx);
            view! { <TodoRows todos=todos /> }.into_any()
        });
        *rows.borrow_mut() = Some(handle);
    });
}
