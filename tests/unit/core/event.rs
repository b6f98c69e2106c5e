use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('q'));
    assert_eq!(key.code, KeyCode::Char('q'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event() {
    let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let key: Key = event.into();
    assert_eq!(key, Key::simple(KeyCode::Enter));
}

#[test]
fn test_uppercase_char_normalizes_to_shift() {
    let key: Key = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE).into();
    assert_eq!(key, Key::shift(KeyCode::Char('g')));

    let key: Key = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT).into();
    assert_eq!(key, Key::shift(KeyCode::Char('g')));
}

#[test]
fn test_release_is_not_a_press() {
    let mut event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert!(event.is_press());

    event.kind = KeyEventKind::Repeat;
    assert!(event.is_press());

    event.kind = KeyEventKind::Release;
    assert!(!event.is_press());
}

#[test]
fn test_modifier_bit_ops() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(KeyModifiers::NONE.is_empty());
}
