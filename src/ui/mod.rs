//! UI utilities for terminal output
//!
//! Progress spinners and confirmation prompts for charge-incurring
//! operations.

mod confirm;
mod spinner;

pub use confirm::confirm_action;
pub use spinner::{create_spinner, finish_spinner};
