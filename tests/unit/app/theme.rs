use super::*;
use crate::ui::core::style::Mod;
use rustc_hash::FxHashMap;

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#38bdf8"), Some(Color::Rgb(0x38, 0xBD, 0xF8)));
    assert_eq!(parse_color(" #FFFFFF "), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_color("cyan"), Some(Color::Indexed(6)));
    assert_eq!(parse_color("White"), Some(Color::Indexed(15)));
    assert_eq!(parse_color("dark_gray"), Some(Color::Indexed(8)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn parse_color_rejects_invalid_values() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#gg0000"), None);
    assert_eq!(parse_color("#12345é"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn color_support_parsing_and_detection() {
    assert_eq!(
        parse_color_support("TrueColor"),
        Some(TerminalColorSupport::TrueColor)
    );
    assert_eq!(parse_color_support("256"), Some(TerminalColorSupport::Ansi256));
    assert_eq!(parse_color_support("basic"), Some(TerminalColorSupport::Ansi16));
    assert_eq!(parse_color_support("lots"), None);

    assert_eq!(
        support_from_env("truecolor", "xterm"),
        TerminalColorSupport::TrueColor
    );
    assert_eq!(
        support_from_env("", "xterm-256color"),
        TerminalColorSupport::Ansi256
    );
    assert_eq!(support_from_env("", "xterm"), TerminalColorSupport::Ansi16);
    assert_eq!(support_from_env("", ""), TerminalColorSupport::Ansi16);
}

#[test]
fn palette_conversions() {
    assert_eq!(ansi256_index_to_rgb(1), (205, 0, 0));
    assert_eq!(ansi256_index_to_rgb(16), (0, 0, 0));
    assert_eq!(ansi256_index_to_rgb(231), (255, 255, 255));
    assert_eq!(ansi256_index_to_rgb(232), (8, 8, 8));
    assert_eq!(ansi256_index_to_rgb(255), (238, 238, 238));

    assert_eq!(rgb_to_ansi256_index(255, 0, 0), 9);
    assert_eq!(rgb_to_ansi16_index(0, 0, 0), 0);
    assert_eq!(rgb_to_ansi16_index(250, 250, 250), 15);
}

#[test]
fn degraded_themes_only_use_supported_colors() {
    let mut ansi256 = UiTheme::default();
    ansi256.apply_color_support(TerminalColorSupport::Ansi256);
    assert!(ansi256
        .slots_mut()
        .all(|c| matches!(*c, Color::Indexed(_) | Color::Reset)));

    let mut ansi16 = UiTheme::default();
    ansi16.apply_color_support(TerminalColorSupport::Ansi16);
    assert!(ansi16
        .slots_mut()
        .all(|c| matches!(*c, Color::Indexed(i) if i <= 15) || *c == Color::Reset));

    let mut truecolor = UiTheme::default();
    truecolor.apply_color_support(TerminalColorSupport::TrueColor);
    assert_eq!(truecolor, UiTheme::default());
}

#[test]
fn settings_override_named_slots_and_tints() {
    let mut tints = FxHashMap::default();
    tints.insert("Sky".to_string(), "#010203".to_string());
    tints.insert("nope".to_string(), "red".to_string());
    let settings = ThemeSettings {
        card_border: Some("red".to_string()),
        close_fg: Some("not-a-color".to_string()),
        tints,
        ..ThemeSettings::default()
    };

    let mut theme = UiTheme::default();
    theme.apply_settings(&settings);

    assert_eq!(theme.card_border, Color::Indexed(1));
    assert_eq!(theme.close_fg, UiTheme::default().close_fg);
    assert_eq!(theme.tint(Tint::Sky), Color::Rgb(1, 2, 3));
    assert_eq!(theme.tint(Tint::Red), UiTheme::default().tint(Tint::Red));
}

#[test]
fn widget_styles_follow_theme_colors() {
    let theme = UiTheme::default();

    let card = theme.card_styles(Tint::Emerald);
    assert_eq!(card.icon.fg, Some(theme.tint(Tint::Emerald)));
    assert_eq!(card.border.fg, Some(theme.card_border));
    assert_eq!(card.border_active.fg, Some(theme.card_border_active));

    let overlay = theme.overlay_styles();
    assert!(overlay.backdrop.mods.contains(Mod::DIM));
    assert_eq!(overlay.backdrop.fg, None);
    assert_eq!(overlay.surface.bg, Some(theme.overlay_bg));
    assert!(overlay.title.mods.contains(Mod::BOLD));

    let page = theme.page_styles();
    assert_eq!(page.product.fg, Some(theme.header_fg));
    assert!(page.product.mods.contains(Mod::BOLD));
    assert_eq!(page.muted.fg, Some(theme.muted_fg));
    assert_eq!(page.rule.fg, Some(theme.separator));
}
