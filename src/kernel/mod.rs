//! Headless application core (state/action/reducer).
//!
//! The page composer owns a `Store`; widgets only ever hand back `Action`
//! values, so all mutation of the selection goes through `Store::dispatch`.

pub mod action;
pub mod listeners;
pub mod state;
pub mod store;

pub use action::Action;
pub use listeners::{KeyListeners, ListenerHandle};
pub use state::{AppState, OverlayState, PageState, Selection};
pub use store::{DispatchResult, Store};
