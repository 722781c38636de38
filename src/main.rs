//! Todo Widget Entry Point

mod config;
mod context;
mod error;
mod models;
mod mount;
mod state;
mod components;
mod widget;

use config::MountIds;
use widget::TodoWidget;

fn main() {
    console_error_panic_hook::set_once();
    TodoWidget::start_on_ready(MountIds::default());
}
