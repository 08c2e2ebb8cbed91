//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render listing cards, modal forms and page chrome. Pages own
//! the data and pass plain records, form signals and callbacks down.

pub mod confirm_dialog;
pub mod event_card;
pub mod event_dialog;
pub mod file_card;
pub mod file_dialog;
pub mod form_dialog;
pub mod form_field;
pub mod nav_bar;
pub mod project_card;
pub mod project_dialog;
pub mod toasts;
pub mod user_dialog;
