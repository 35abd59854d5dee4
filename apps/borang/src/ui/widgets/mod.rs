//! Shared widgets.

pub mod status_bar;
pub mod step_tabs;
