//! Reusable UI component modules for the dashboard.

pub mod confirm_delete_modal;
pub mod user_form_modal;
pub mod user_table;
