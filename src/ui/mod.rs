//! TUI components and widgets

pub mod dialogs;
pub mod forms;
pub mod screens;
pub mod widgets;

pub use dialogs::{render_confirm_dialog, render_error_dialog};
pub use forms::render_project_form;
pub use screens::{render_detail, render_search};
pub use widgets::{centered_rect, field_style, format_sales};
