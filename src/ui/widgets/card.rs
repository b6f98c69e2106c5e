//! One catalog item as a summary tile with a "Learn More" button.
//!
//! The card owns no state: it paints from its inputs and binds `on_activate`
//! to the button node and `on_focus` to the rest of the tile. Whoever
//! dispatches clicks decides what those mean.

use crate::catalog::{CatalogItem, ACTIVATE_LABEL};
use crate::kernel::Action;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::{Id, IdPath};
use crate::ui::core::style::Style;
use crate::ui::core::text::{display_width, truncate, wrap};
use crate::ui::core::tree::{NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 9;
pub const CARD_MIN_WIDTH: u16 = 24;

const ROW_ICON: u16 = 0;
const ROW_TITLE: u16 = 2;
const TITLE_LINES: usize = 2;
const ROW_SUBTITLE: u16 = 4;
const ROW_BUTTON: u16 = 6;

#[derive(Clone, Copy, Debug, Default)]
pub struct CardStyles {
    pub base: Style,
    pub border: Style,
    pub border_active: Style,
    pub icon: Style,
    pub title: Style,
    pub subtitle: Style,
    pub button: Style,
    pub button_active: Style,
}

pub struct Card<'a> {
    pub id_base: IdPath,
    pub item: &'a CatalogItem,
    pub on_activate: Action,
    pub on_focus: Action,
    pub hovered: Option<Id>,
    pub focused: bool,
    pub styles: CardStyles,
}

impl Card<'_> {
    pub fn tile_id(id_base: IdPath) -> Id {
        id_base.push_str("tile").finish()
    }

    pub fn button_id(id_base: IdPath) -> Id {
        id_base.push_str("learn-more").finish()
    }

    pub fn button_label() -> String {
        format!("[ {ACTIVATE_LABEL} ]")
    }
}

impl Widget for Card<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.w < 6 || rect.h < 3 {
            return;
        }

        let tile_id = Card::tile_id(self.id_base);
        let button_id = Card::button_id(self.id_base);
        let button_hovered = self.hovered == Some(button_id);
        let active = self.focused || button_hovered || self.hovered == Some(tile_id);

        let border = if active {
            self.styles.border_active
        } else {
            self.styles.border
        };
        ui.painter.fill_rect(rect, self.styles.base);
        ui.painter.border(rect, border);

        let inner = rect.shrink(2, 1);
        if inner.is_empty() {
            return;
        }
        let width = inner.w as usize;

        ui.painter.text_clipped(
            Pos::new(inner.x, inner.y + ROW_ICON),
            self.item.icon.badge(),
            self.styles.icon,
            inner,
        );

        for (i, line) in title_lines(self.item.title, width).into_iter().enumerate() {
            ui.painter.text_clipped(
                Pos::new(inner.x, inner.y + ROW_TITLE + i as u16),
                line,
                self.styles.title,
                inner,
            );
        }

        ui.painter.text_clipped(
            Pos::new(inner.x, inner.y + ROW_SUBTITLE),
            truncate(self.item.subtitle, width),
            self.styles.subtitle,
            inner,
        );

        // Pushed before the button, so the button wins where they overlap.
        ui.sense(
            tile_id,
            rect,
            Sense::CLICK | Sense::HOVER,
            NodeKind::Trigger {
                action: self.on_focus,
            },
        );

        if inner.h <= ROW_BUTTON {
            return;
        }
        let label = truncate(&Card::button_label(), width);
        let button = Rect::new(
            inner.x,
            inner.y + ROW_BUTTON,
            display_width(&label) as u16,
            1,
        );
        let style = if button_hovered || self.focused {
            self.styles.button_active
        } else {
            self.styles.button
        };
        ui.painter
            .text_clipped(Pos::new(button.x, button.y), label, style, inner);
        ui.sense(
            button_id,
            button,
            Sense::CLICK | Sense::HOVER,
            NodeKind::Trigger {
                action: self.on_activate,
            },
        );
    }
}

fn title_lines(title: &str, width: usize) -> Vec<String> {
    let mut lines = wrap(title, width);
    if lines.len() > TITLE_LINES {
        let rest = lines[TITLE_LINES - 1..].join(" ");
        lines.truncate(TITLE_LINES - 1);
        lines.push(truncate(&rest, width));
    }
    lines
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/card.rs"]
mod tests;
