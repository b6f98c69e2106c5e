//! Page geometry in content coordinates: x is a screen column, y is a row of
//! the (scrollable) page, starting at 0 for the top of the header.

use crate::catalog::Catalog;
use crate::ui::core::geom::Rect;
use crate::ui::widgets::card::CARD_HEIGHT;

pub const MARGIN_X: u16 = 2;
pub const COLUMN_GAP: u16 = 2;
pub const ROW_GAP: u16 = 1;
const HEADER_HEIGHT: u16 = 4;
/// Heading row, rule row and one blank row above the grid.
const SECTION_HEAD: u16 = 3;
const SECTION_GAP: u16 = 2;
const FOOTER_HEIGHT: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSlot {
    /// Flat catalog index.
    pub index: usize,
    pub section: usize,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLayout {
    pub section: usize,
    pub heading: Rect,
    pub rule: Rect,
    pub cards: Vec<CardSlot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    pub columns: u16,
    pub card_width: u16,
    pub header: Rect,
    pub sections: Vec<SectionLayout>,
    pub footer: Rect,
    pub content_height: u16,
}

/// 1 to 4 columns depending on the available width.
pub fn columns_for(width: u16) -> u16 {
    match width {
        w if w >= 128 => 4,
        w if w >= 96 => 3,
        w if w >= 64 => 2,
        _ => 1,
    }
}

impl PageLayout {
    pub fn compute(catalog: &Catalog, x: u16, width: u16) -> Self {
        let margin = MARGIN_X.min(width / 2);
        let inner = Rect::new(x + margin, 0, width.saturating_sub(margin * 2), 0);
        let columns = columns_for(width);
        let card_width = inner.w.saturating_sub(COLUMN_GAP * (columns - 1)) / columns;

        let header = Rect::new(inner.x, 0, inner.w, HEADER_HEIGHT);
        let mut y = header.bottom();
        let mut index = 0usize;
        let mut sections = Vec::with_capacity(catalog.sections().len());

        for (s, section) in catalog.sections().iter().enumerate() {
            let heading = Rect::new(inner.x, y, inner.w, 1);
            let rule = Rect::new(inner.x, y + 1, inner.w, 1);
            let grid_y = y + SECTION_HEAD;

            let mut cards = Vec::with_capacity(section.items.len());
            for i in 0..section.items.len() {
                let row = (i / columns as usize) as u16;
                let col = (i % columns as usize) as u16;
                cards.push(CardSlot {
                    index,
                    section: s,
                    rect: Rect::new(
                        inner.x + col * (card_width + COLUMN_GAP),
                        grid_y + row * (CARD_HEIGHT + ROW_GAP),
                        card_width,
                        CARD_HEIGHT,
                    ),
                });
                index += 1;
            }

            let grid_bottom = cards.last().map_or(grid_y, |c| c.rect.bottom());
            y = grid_bottom + SECTION_GAP;
            sections.push(SectionLayout {
                section: s,
                heading,
                rule,
                cards,
            });
        }

        let footer = Rect::new(inner.x, y, inner.w, FOOTER_HEIGHT);
        Self {
            columns,
            card_width,
            header,
            sections,
            footer,
            content_height: footer.bottom(),
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardSlot> {
        self.sections.iter().flat_map(|s| s.cards.iter())
    }

    pub fn card(&self, index: usize) -> Option<&CardSlot> {
        self.cards().find(|c| c.index == index)
    }

    pub fn max_scroll(&self, view_height: u16) -> u16 {
        self.content_height.saturating_sub(view_height)
    }

    /// Rows to keep visible for a focused card. The first row of a section
    /// also brings its heading into view.
    pub fn reveal_range(&self, index: usize) -> Option<(u16, u16)> {
        let section = self
            .sections
            .iter()
            .find(|s| s.cards.iter().any(|c| c.index == index))?;
        let card = section.cards.iter().find(|c| c.index == index)?;
        let first_row = section.cards.first().map(|c| c.rect.y) == Some(card.rect.y);
        let top = if first_row {
            section.heading.y
        } else {
            card.rect.y
        };
        Some((top, card.rect.bottom()))
    }

    /// Nearest card in the row above or below, by horizontal distance.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let from = self.card(index)?.rect;
        let row = match direction {
            Direction::Up => self
                .cards()
                .filter(|c| c.rect.y < from.y)
                .map(|c| c.rect.y)
                .max(),
            Direction::Down => self
                .cards()
                .filter(|c| c.rect.y > from.y)
                .map(|c| c.rect.y)
                .min(),
        }?;

        self.cards()
            .filter(|c| c.rect.y == row)
            .min_by_key(|c| c.rect.x.abs_diff(from.x))
            .map(|c| c.index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/layout.rs"]
mod tests;
