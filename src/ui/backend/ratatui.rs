use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{PaintCmd, ROUNDED};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintWidget { cmds }, area.into());
    }
}

/// Opaque terminal wrapper so the rest of the crate never names `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let area: Rect = area.into();
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => {
                    for_each_cell(rect.intersect(area), |x, y| {
                        put(buf, x, y, " ", *style);
                    });
                }
                PaintCmd::StyleRect { rect, style } => {
                    let style = to_ratatui_style(*style);
                    for_each_cell(rect.intersect(area), |x, y| {
                        // `Cell::set_style` patches, so symbols and unset colors survive.
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_style(style);
                        }
                    });
                }
                PaintCmd::HLine { pos, len, ch, style } => {
                    let rect = Rect::new(pos.x, pos.y, *len, 1).intersect(area);
                    for_each_cell(rect, |x, y| put_char(buf, x, y, *ch, *style));
                }
                PaintCmd::VLine { pos, len, ch, style } => {
                    let rect = Rect::new(pos.x, pos.y, 1, *len).intersect(area);
                    for_each_cell(rect, |x, y| put_char(buf, x, y, *ch, *style));
                }
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => {
                    let clip = clip.map_or(area, |c| c.intersect(area));
                    draw_text(buf, *pos, text, *style, clip);
                }
                PaintCmd::Border { rect, style } => {
                    draw_border(buf, rect.intersect(area), *style)
                }
            }
        }
    }
}

fn for_each_cell(rect: Rect, mut f: impl FnMut(u16, u16)) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            f(x, y);
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(to_ratatui_style(style));
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(to_ratatui_style(style));
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    const MAP: [(Mod, RModifier); 2] = [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
    ];
    MAP.iter()
        .filter(|(ours, _)| m.contains(*ours))
        .fold(RModifier::empty(), |acc, (_, theirs)| acc | *theirs)
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style, clip: Rect) {
    let y = pos.y;
    if clip.is_empty() || y < clip.y || y >= clip.bottom() {
        return;
    }

    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Wide glyphs are never drawn half.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if x >= clip.x {
            put(buf, x, y, g, style);
            for dx in 1..w {
                put(buf, x.saturating_add(dx), y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: Style) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let g = ROUNDED;
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    for x in rect.x + 1..right {
        put_char(buf, x, rect.y, g.horizontal, style);
        put_char(buf, x, bottom, g.horizontal, style);
    }
    for y in rect.y + 1..bottom {
        put_char(buf, rect.x, y, g.vertical, style);
        put_char(buf, right, y, g.vertical, style);
    }
    put_char(buf, rect.x, rect.y, g.top_left, style);
    put_char(buf, right, rect.y, g.top_right, style);
    put_char(buf, rect.x, bottom, g.bottom_left, style);
    put_char(buf, right, bottom, g.bottom_right, style);
}

// The headless replay in `test.rs` mirrors this file and carries the tests.
