//! Dashboard view components. They read state through the read-only views
//! in context and report user actions through callbacks.

pub mod entry_details;
pub mod error_boundary;
pub mod header;
pub mod journal_list;
pub mod journal_modal;
pub mod reflection_panel;
pub mod sidebar_user;
pub mod toaster;
