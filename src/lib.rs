//! verseflow - a terminal rendition of the VerseFlow architecture proposal page.
//!
//! Module layout:
//! - catalog: the compiled-in sections and cards
//! - core: input events, commands and the view trait
//! - kernel: headless state (selection, page navigation) and its reducer
//! - ui: paint/hit-test runtime, backends and the card/overlay widgets
//! - app: the page composer, theme, keymap and settings
//! - tui: crossterm/terminal integration

pub mod app;
pub mod catalog;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
