//! Terminal output formatting
//!
//! Display utilities for line mode and text shared with the TUI.

pub mod display;
pub mod formatters;
pub mod text;

pub use display::{print_check_result, print_grid, print_keyboard, print_outcome, print_progress};
