//! Modal detail view of one catalog item.
//!
//! Meant for its own hit-test layer above the page. It registers three nodes:
//! a full-screen backdrop and the close button (both bound to `on_dismiss`),
//! and the surface between them, which swallows clicks so they never fall
//! through to the backdrop and takes the wheel for the description.

use crate::catalog::{CatalogItem, DETAIL_HEADING};
use crate::kernel::Action;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::{Id, IdPath};
use crate::ui::core::style::Style;
use crate::ui::core::text::{truncate, wrap};
use crate::ui::core::tree::{NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};

pub const MAX_WIDTH: u16 = 72;
const MIN_WIDTH: u16 = 24;
/// Rows taken by everything except the description: borders, title,
/// subtitle, separator and heading.
const CHROME_ROWS: u16 = 6;
pub const CLOSE_LABEL: &str = "[x]";

#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayStyles {
    /// Patched over the whole page underneath.
    pub backdrop: Style,
    pub surface: Style,
    pub border: Style,
    pub title: Style,
    pub subtitle: Style,
    pub heading: Style,
    pub body: Style,
    pub close: Style,
    pub close_active: Style,
    pub separator: Style,
    pub hint: Style,
}

/// Where everything goes for one item on one screen size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayLayout {
    pub screen: Rect,
    pub surface: Rect,
    pub close: Rect,
    pub body: Rect,
    pub lines: Vec<String>,
    pub max_scroll: u16,
}

impl OverlayLayout {
    /// Centered surface at most `MAX_WIDTH` wide and 90% of the screen high.
    pub fn compute(item: &CatalogItem, screen: Rect) -> Self {
        let width = screen
            .w
            .saturating_sub(4)
            .min(MAX_WIDTH)
            .max(MIN_WIDTH.min(screen.w));
        let text_w = width.saturating_sub(4) as usize;
        let lines = wrap(item.description, text_w);

        let max_h = (screen.h as u32 * 9 / 10) as u16;
        let wanted = CHROME_ROWS.saturating_add(lines.len().min(u16::MAX as usize) as u16);
        let height = wanted.min(max_h).max(CHROME_ROWS.min(screen.h));

        let surface = screen.centered(width, height);
        let close = if surface.w >= 8 {
            Rect::new(surface.right() - 5, surface.y + 1, 3, 1)
        } else {
            Rect::new(surface.x, surface.y, 0, 0)
        };
        let body = Rect::new(
            surface.x + 2.min(surface.w),
            surface.y + 5.min(surface.h),
            text_w as u16,
            surface.h.saturating_sub(CHROME_ROWS),
        );
        let max_scroll = (lines.len() as u16).saturating_sub(body.h);

        Self {
            screen,
            surface,
            close,
            body,
            lines,
            max_scroll,
        }
    }
}

pub struct Overlay<'a> {
    pub id_base: IdPath,
    pub item: &'a CatalogItem,
    pub layout: &'a OverlayLayout,
    pub on_dismiss: Action,
    pub scroll: u16,
    pub hovered: Option<Id>,
    pub styles: OverlayStyles,
}

impl Overlay<'_> {
    pub fn backdrop_id(id_base: IdPath) -> Id {
        id_base.push_str("backdrop").finish()
    }

    pub fn surface_id(id_base: IdPath) -> Id {
        id_base.push_str("surface").finish()
    }

    pub fn close_id(id_base: IdPath) -> Id {
        id_base.push_str("close").finish()
    }
}

impl Widget for Overlay<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let layout = self.layout;
        let screen = layout.screen;
        if screen.is_empty() {
            return;
        }

        // Backdrop first so it is always the lowest node of the layer.
        ui.painter.style_rect(screen, self.styles.backdrop);
        ui.sense(
            Overlay::backdrop_id(self.id_base),
            screen,
            Sense::CLICK | Sense::HOVER,
            NodeKind::Trigger {
                action: self.on_dismiss,
            },
        );

        let surface = layout.surface;
        if surface.w < 4 || surface.h < 3 {
            return;
        }
        ui.sense(
            Overlay::surface_id(self.id_base),
            surface,
            Sense::CLICK | Sense::HOVER | Sense::SCROLL,
            NodeKind::Surface,
        );
        ui.painter.fill_rect(surface, self.styles.surface);
        ui.painter.border(surface, self.styles.border);

        let text_x = surface.x + 2;
        let text_w = layout.body.w as usize;
        let header_w = if layout.close.is_empty() {
            text_w
        } else {
            text_w.saturating_sub(CLOSE_LABEL.len() + 1)
        };
        let inner = surface.shrink(1, 1);

        let header = [
            (1, truncate(self.item.title, header_w), self.styles.title),
            (2, truncate(self.item.subtitle, header_w), self.styles.subtitle),
        ];
        for (dy, text, style) in header {
            ui.painter
                .text_clipped(Pos::new(text_x, surface.y + dy), text, style, inner);
        }

        if !layout.close.is_empty() {
            let close_id = Overlay::close_id(self.id_base);
            let style = if self.hovered == Some(close_id) {
                self.styles.close_active
            } else {
                self.styles.close
            };
            ui.painter.text_clipped(
                Pos::new(layout.close.x, layout.close.y),
                CLOSE_LABEL,
                style,
                inner,
            );
            ui.sense(
                close_id,
                layout.close,
                Sense::CLICK | Sense::HOVER,
                NodeKind::Trigger {
                    action: self.on_dismiss,
                },
            );
        }

        if surface.h < CHROME_ROWS {
            return;
        }
        ui.painter.hline(
            Pos::new(inner.x, surface.y + 3),
            inner.w,
            '─',
            self.styles.separator,
        );
        ui.painter.text_clipped(
            Pos::new(text_x, surface.y + 4),
            truncate(DETAIL_HEADING, text_w),
            self.styles.heading,
            inner,
        );

        let scroll = self.scroll.min(layout.max_scroll) as usize;
        for (row, line) in layout
            .lines
            .iter()
            .skip(scroll)
            .take(layout.body.h as usize)
            .enumerate()
        {
            ui.painter.text_clipped(
                Pos::new(layout.body.x, layout.body.y + row as u16),
                line.as_str(),
                self.styles.body,
                layout.body,
            );
        }

        if layout.max_scroll > 0 {
            let last = (scroll + layout.body.h as usize).min(layout.lines.len());
            let hint = format!(" {}-{}/{} ", scroll + 1, last, layout.lines.len());
            let hint_w = hint.len() as u16;
            if hint_w + 4 <= surface.w {
                ui.painter.text(
                    Pos::new(surface.right() - 2 - hint_w, surface.bottom() - 1),
                    hint,
                    self.styles.hint,
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/overlay.rs"]
mod tests;
