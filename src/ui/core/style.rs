//! Cell styles as the painter records them. Backends translate these into
//! their own types; nothing here knows about ratatui.

use std::ops::BitOr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// The terminal's own default.
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

/// Text attributes. Only the ones the page draws with exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u8);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    /// The overlay backdrop.
    pub const DIM: Self = Self(1 << 1);

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// `None` colors leave whatever is already in the cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            mods: Mod::NONE,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.mods = self.mods.union(Mod::BOLD);
        self
    }

    pub const fn dim(mut self) -> Self {
        self.mods = self.mods.union(Mod::DIM);
        self
    }

    /// Layers `over` on top: its colors win where set, attributes accumulate.
    /// `StyleRect` relies on this to dim the page without repainting it.
    pub fn patch(self, over: Style) -> Self {
        Self {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
            mods: self.mods | over.mods,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
