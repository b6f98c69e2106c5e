//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `ui::core` so the page logic can be driven
//! headlessly in tests.

pub mod crossterm;
pub mod terminal_guard;
