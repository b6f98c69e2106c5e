//! Scrolling: content is painted in its own coordinate space (row 0 is the
//! top of the page) and projected into the visible viewport afterwards.

use super::geom::{Pos, Rect};
use super::painter::{PaintCmd, Painter, ROUNDED};
use super::tree::{Node, UiTree};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollView {
    pub viewport: Rect,
    /// Content row shown on the first viewport row.
    pub offset: u16,
}

impl ScrollView {
    pub fn new(viewport: Rect, offset: u16) -> Self {
        Self { viewport, offset }
    }

    /// Largest useful offset for content of `content_height` rows.
    pub fn max_offset(content_height: u16, view_height: u16) -> u16 {
        content_height.saturating_sub(view_height)
    }

    pub fn screen_y(&self, y: u16) -> Option<u16> {
        if y < self.offset || y - self.offset >= self.viewport.h {
            return None;
        }
        Some(self.viewport.y + (y - self.offset))
    }

    /// Visible part of a content rect, in screen coordinates.
    pub fn project_rect(&self, rect: Rect) -> Option<Rect> {
        if rect.is_empty() || self.viewport.is_empty() {
            return None;
        }

        let view_bottom = self.offset.saturating_add(self.viewport.h);
        let top = rect.y.max(self.offset);
        let bottom = rect.bottom().min(view_bottom);
        let left = rect.x.max(self.viewport.x);
        let right = rect.right().min(self.viewport.right());
        if bottom <= top || right <= left {
            return None;
        }

        Some(Rect::new(
            left,
            self.viewport.y + (top - self.offset),
            right - left,
            bottom - top,
        ))
    }

    pub fn project_cmds(&self, cmds: &[PaintCmd], out: &mut Painter) {
        for cmd in cmds {
            self.project_cmd(cmd, out);
        }
    }

    pub fn project_nodes(&self, nodes: &[Node], out: &mut UiTree) {
        for node in nodes {
            let Some(rect) = self.project_rect(node.rect) else {
                continue;
            };
            out.push(Node { rect, ..*node });
        }
    }

    fn project_cmd(&self, cmd: &PaintCmd, out: &mut Painter) {
        match cmd {
            PaintCmd::FillRect { rect, style } => {
                if let Some(rect) = self.project_rect(*rect) {
                    out.fill_rect(rect, *style);
                }
            }
            PaintCmd::StyleRect { rect, style } => {
                if let Some(rect) = self.project_rect(*rect) {
                    out.style_rect(rect, *style);
                }
            }
            PaintCmd::HLine { pos, len, ch, style } => {
                if let Some(rect) = self.project_rect(Rect::new(pos.x, pos.y, *len, 1)) {
                    out.hline(Pos::new(rect.x, rect.y), rect.w, *ch, *style);
                }
            }
            PaintCmd::VLine { pos, len, ch, style } => {
                if let Some(rect) = self.project_rect(Rect::new(pos.x, pos.y, 1, *len)) {
                    out.push(PaintCmd::VLine {
                        pos: Pos::new(rect.x, rect.y),
                        len: rect.h,
                        ch: *ch,
                        style: *style,
                    });
                }
            }
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => {
                let Some(y) = self.screen_y(pos.y) else {
                    return;
                };
                let row = Rect::new(self.viewport.x, y, self.viewport.w, 1);
                let clip = match clip {
                    Some(clip) => match self.project_rect(*clip) {
                        Some(clip) => clip.intersect(row),
                        None => return,
                    },
                    None => row,
                };
                if clip.is_empty() {
                    return;
                }
                out.text_clipped(Pos::new(pos.x, y), text.clone(), *style, clip);
            }
            PaintCmd::Border { rect, style } => {
                // A partially visible border cannot be clipped as a unit, so it is
                // lowered into its edges and corners first.
                if rect.w < 2 || rect.h < 2 {
                    return;
                }
                let g = ROUNDED;
                let right = rect.right() - 1;
                let bottom = rect.bottom() - 1;
                let inner_w = rect.w - 2;
                let inner_h = rect.h - 2;

                let lowered = [
                    PaintCmd::HLine {
                        pos: Pos::new(rect.x + 1, rect.y),
                        len: inner_w,
                        ch: g.horizontal,
                        style: *style,
                    },
                    PaintCmd::HLine {
                        pos: Pos::new(rect.x + 1, bottom),
                        len: inner_w,
                        ch: g.horizontal,
                        style: *style,
                    },
                    PaintCmd::VLine {
                        pos: Pos::new(rect.x, rect.y + 1),
                        len: inner_h,
                        ch: g.vertical,
                        style: *style,
                    },
                    PaintCmd::VLine {
                        pos: Pos::new(right, rect.y + 1),
                        len: inner_h,
                        ch: g.vertical,
                        style: *style,
                    },
                    corner(rect.x, rect.y, g.top_left, *style),
                    corner(right, rect.y, g.top_right, *style),
                    corner(rect.x, bottom, g.bottom_left, *style),
                    corner(right, bottom, g.bottom_right, *style),
                ];
                for cmd in &lowered {
                    self.project_cmd(cmd, out);
                }
            }
        }
    }
}

fn corner(x: u16, y: u16, ch: char, style: super::style::Style) -> PaintCmd {
    PaintCmd::Text {
        pos: Pos::new(x, y),
        text: ch.to_string(),
        style,
        clip: Some(Rect::new(x, y, 1, 1)),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/scroll.rs"]
mod tests;
