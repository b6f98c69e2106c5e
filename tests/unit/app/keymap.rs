use super::*;

fn rule(key: &str, command: &str) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
    }
}

#[test]
fn defaults_cover_navigation_activation_and_quit() {
    let keymap = Keymap::with_defaults();

    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Char('q'))),
        Some(Command::Quit)
    );
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Tab)),
        Some(Command::FocusNext)
    );
    assert_eq!(
        keymap.resolve(&Key::shift(KeyCode::BackTab)),
        Some(Command::FocusPrev)
    );
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Char('j'))),
        Some(Command::FocusDown)
    );
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Enter)),
        Some(Command::ActivateFocused)
    );
    assert_eq!(
        keymap.resolve(&Key::ctrl(KeyCode::Down)),
        Some(Command::ScrollDown)
    );
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::End)),
        Some(Command::ScrollBottom)
    );
}

#[test]
fn escape_is_not_a_keymap_binding() {
    // Esc belongs to the overlay's scoped listener.
    let keymap = Keymap::with_defaults();
    assert_eq!(keymap.resolve(&Key::simple(KeyCode::Esc)), None);
}

#[test]
fn rules_override_add_and_unbind() {
    let keymap = Keymap::from_rules(&[
        rule("ctrl+x", "quit"),
        rule("q", ""),
        rule("n", "focus_next"),
    ]);

    assert_eq!(
        keymap.resolve(&Key::ctrl(KeyCode::Char('x'))),
        Some(Command::Quit)
    );
    assert_eq!(keymap.resolve(&Key::simple(KeyCode::Char('q'))), None);
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Char('n'))),
        Some(Command::FocusNext)
    );
    assert_eq!(
        keymap.resolve(&Key::ctrl(KeyCode::Char('q'))),
        Some(Command::Quit)
    );
}

#[test]
fn invalid_rules_are_skipped() {
    let keymap = Keymap::from_rules(&[rule("ctrl+a+b", "quit"), rule("x", "no-such-command")]);
    let defaults = Keymap::with_defaults();

    assert_eq!(keymap.bindings().len(), defaults.bindings().len());
    assert_eq!(keymap.resolve(&Key::simple(KeyCode::Char('x'))), None);
}

#[test]
fn empty_keymap_resolves_nothing() {
    let mut keymap = Keymap::empty();
    assert_eq!(keymap.resolve(&Key::simple(KeyCode::Tab)), None);

    keymap.bind(Key::simple(KeyCode::Tab), Command::FocusNext);
    assert_eq!(
        keymap.unbind(&Key::simple(KeyCode::Tab)),
        Some(Command::FocusNext)
    );
    assert!(keymap.bindings().is_empty());
}
