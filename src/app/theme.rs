//! Named colors for the page, the cards and the overlay. Painting code never
//! picks a color itself; it asks the theme for a ready-made style set.

use crate::app::settings::ThemeSettings;
use crate::catalog::Tint;
use crate::ui::core::style::{Color, Style};
use crate::app::page::PageStyles;
use crate::ui::widgets::{CardStyles, OverlayStyles};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub text_fg: Color,
    pub muted_fg: Color,
    pub header_fg: Color,
    pub card_border: Color,
    pub card_border_active: Color,
    pub subtitle_fg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_active_fg: Color,
    pub button_active_bg: Color,
    pub overlay_bg: Color,
    pub overlay_border: Color,
    pub close_fg: Color,
    pub close_active_fg: Color,
    pub separator: Color,
    /// Indexed by `Tint::index`.
    pub tints: [Color; 12],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("VERSEFLOW_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM").unwrap_or_default();
    let term = std::env::var("TERM").unwrap_or_default();
    support_from_env(&colorterm, &term)
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

fn support_from_env(colorterm: &str, term: &str) -> TerminalColorSupport {
    let colorterm = colorterm.to_ascii_lowercase();
    let term = term.to_ascii_lowercase();
    let truecolor = ["truecolor", "24bit", "direct"];
    if truecolor
        .iter()
        .any(|t| colorterm.contains(t) || term.contains(t))
    {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            text_fg: Color::Rgb(0xF3, 0xF4, 0xF6),
            muted_fg: Color::Rgb(0x9C, 0xA3, 0xAF),
            header_fg: Color::Rgb(0x38, 0xBD, 0xF8),
            card_border: Color::Rgb(0x37, 0x41, 0x51),
            card_border_active: Color::Rgb(0x38, 0xBD, 0xF8),
            subtitle_fg: Color::Rgb(0x7D, 0xD3, 0xFC),
            button_fg: Color::Rgb(0xD1, 0xD5, 0xDB),
            button_bg: Color::Rgb(0x37, 0x41, 0x51),
            button_active_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            button_active_bg: Color::Rgb(0x0E, 0xA5, 0xE9),
            overlay_bg: Color::Rgb(0x1F, 0x29, 0x37),
            overlay_border: Color::Rgb(0x37, 0x41, 0x51),
            close_fg: Color::Rgb(0x9C, 0xA3, 0xAF),
            close_active_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            separator: Color::Rgb(0x37, 0x41, 0x51),
            tints: [
                Color::Rgb(0xF3, 0xF4, 0xF6), // white
                Color::Rgb(0x38, 0xBD, 0xF8), // sky
                Color::Rgb(0x22, 0xD3, 0xEE), // cyan
                Color::Rgb(0x34, 0xD3, 0x99), // emerald
                Color::Rgb(0xFB, 0x92, 0x3C), // orange
                Color::Rgb(0xC0, 0x84, 0xFC), // purple
                Color::Rgb(0xFA, 0xCC, 0x15), // yellow
                Color::Rgb(0x81, 0x8C, 0xF8), // indigo
                Color::Rgb(0x60, 0xA5, 0xFA), // blue
                Color::Rgb(0x2D, 0xD4, 0xBF), // teal
                Color::Rgb(0xF8, 0x71, 0x71), // red
                Color::Rgb(0x9C, 0xA3, 0xAF), // gray
            ],
        }
    }
}

impl UiTheme {
    pub fn tint(&self, tint: Tint) -> Color {
        self.tints[tint.index()]
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for slot in self.slots_mut() {
            *slot = map_color_for_support(*slot, support);
        }
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&mut self.text_fg, &settings.text_fg),
            (&mut self.muted_fg, &settings.muted_fg),
            (&mut self.header_fg, &settings.header_fg),
            (&mut self.card_border, &settings.card_border),
            (&mut self.card_border_active, &settings.card_border_active),
            (&mut self.subtitle_fg, &settings.subtitle_fg),
            (&mut self.button_fg, &settings.button_fg),
            (&mut self.button_bg, &settings.button_bg),
            (&mut self.button_active_fg, &settings.button_active_fg),
            (&mut self.button_active_bg, &settings.button_active_bg),
            (&mut self.overlay_bg, &settings.overlay_bg),
            (&mut self.overlay_border, &settings.overlay_border),
            (&mut self.close_fg, &settings.close_fg),
            (&mut self.close_active_fg, &settings.close_active_fg),
            (&mut self.separator, &settings.separator),
        ];
        for (slot, value) in overrides {
            apply_override(slot, value.as_deref());
        }

        for (name, value) in &settings.tints {
            match Tint::from_name(name) {
                Some(tint) => apply_override(&mut self.tints[tint.index()], Some(value.as_str())),
                None => tracing::warn!(tint = %name, "unknown tint in theme settings"),
            }
        }
    }

    pub fn page_styles(&self) -> PageStyles {
        PageStyles {
            product: Style::new().fg(self.header_fg).bold(),
            muted: Style::new().fg(self.muted_fg),
            section_title: Style::new().fg(self.text_fg).bold(),
            rule: Style::new().fg(self.separator),
        }
    }

    pub fn card_styles(&self, icon: Tint) -> CardStyles {
        CardStyles {
            base: Style::new(),
            border: Style::new().fg(self.card_border),
            border_active: Style::new().fg(self.card_border_active),
            icon: Style::new().fg(self.tint(icon)).bold(),
            title: Style::new().fg(self.text_fg).bold(),
            subtitle: Style::new().fg(self.subtitle_fg),
            button: Style::new().fg(self.button_fg).bg(self.button_bg),
            button_active: Style::new()
                .fg(self.button_active_fg)
                .bg(self.button_active_bg)
                .bold(),
        }
    }

    pub fn overlay_styles(&self) -> OverlayStyles {
        OverlayStyles {
            backdrop: Style::new().dim(),
            surface: Style::new().fg(self.text_fg).bg(self.overlay_bg),
            border: Style::new().fg(self.overlay_border).bg(self.overlay_bg),
            title: Style::new().fg(self.text_fg).bold(),
            subtitle: Style::new().fg(self.subtitle_fg),
            heading: Style::new().fg(self.button_fg).bold(),
            body: Style::new().fg(self.button_fg),
            close: Style::new().fg(self.close_fg),
            close_active: Style::new().fg(self.close_active_fg).bold(),
            separator: Style::new().fg(self.separator),
            hint: Style::new().fg(self.muted_fg),
        }
    }

    fn slots_mut(&mut self) -> impl Iterator<Item = &mut Color> {
        [
            &mut self.text_fg,
            &mut self.muted_fg,
            &mut self.header_fg,
            &mut self.card_border,
            &mut self.card_border_active,
            &mut self.subtitle_fg,
            &mut self.button_fg,
            &mut self.button_bg,
            &mut self.button_active_fg,
            &mut self.button_active_bg,
            &mut self.overlay_bg,
            &mut self.overlay_border,
            &mut self.close_fg,
            &mut self.close_active_fg,
            &mut self.separator,
        ]
        .into_iter()
        .chain(self.tints.iter_mut())
    }
}

fn apply_override(slot: &mut Color, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    match parse_color(value) {
        Some(color) => *slot = color,
        None => tracing::warn!(value = %value, "invalid color in theme settings"),
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (_, Color::Reset) => Color::Reset,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi256, Color::Indexed(i)) => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i <= 15 => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    nearest((0u16..=255).map(|i| ansi256_index_to_rgb(i as u8)), (r, g, b))
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    nearest(ANSI16_RGB.iter().copied(), (r, g, b))
}

/// Index of the palette entry closest to `target`; ties go to the lower index.
fn nearest(palette: impl Iterator<Item = (u8, u8, u8)>, target: (u8, u8, u8)) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;
    for (index, rgb) in palette.enumerate() {
        let distance = color_distance_sq(target, rgb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }
    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
