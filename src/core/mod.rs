//! Core types: input events, semantic commands and the view interface.
//!
//! Nothing in here depends on terminal crates; `tui::crossterm` converts
//! backend events into these types.

pub mod command;
pub mod event;
pub mod view;

pub use command::Command;
pub use event::{InputEvent, Key};
pub use view::{EventResult, View};
