//! UI layer (deep wrapper over `ratatui`).
//!
//! Widgets paint into a backend-neutral `Painter` and register hit-test nodes
//! in a `UiTree`; only `backend::terminal` knows about `ratatui`.

pub mod backend;
pub mod core;
pub mod widgets;
