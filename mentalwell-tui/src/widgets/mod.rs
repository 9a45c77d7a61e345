//! Reusable UI widgets: page chrome, modal dialogs, toasts.

mod chrome;
mod modal;
mod toast;

pub use chrome::{render_footer, render_header};
pub use modal::{render_message_modal, render_results_modal};
pub use toast::{Toast, ToastKind, ToastQueue};
