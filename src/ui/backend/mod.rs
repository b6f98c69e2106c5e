//! Rendering backends.
//!
//! Widgets only produce `PaintCmd`s; a backend replays them onto a concrete
//! surface. The terminal backend is the only one that touches `ratatui`.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
