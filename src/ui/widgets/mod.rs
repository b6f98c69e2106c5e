pub mod card;
pub mod overlay;

pub use card::{Card, CardStyles};
pub use overlay::{Overlay, OverlayLayout, OverlayStyles};
