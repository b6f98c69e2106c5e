use super::*;
use crate::core::event::{KeyEventKind, KeyModifiers};

fn esc() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

#[test]
fn handle_drop_deregisters() {
    let listeners = KeyListeners::new();
    assert!(listeners.is_empty());

    let handle = listeners.register(KeyCode::Esc, Action::Dismiss);
    assert_eq!(listeners.len(), 1);
    assert!(handle.is_registered());
    assert_eq!(listeners.matching(&esc()), vec![Action::Dismiss]);

    drop(handle);
    assert!(listeners.is_empty());
    assert!(listeners.matching(&esc()).is_empty());
}

#[test]
fn repeated_acquire_release_never_accumulates() {
    let listeners = KeyListeners::new();
    for _ in 0..100 {
        let handle = listeners.register(KeyCode::Esc, Action::Dismiss);
        assert_eq!(listeners.count(KeyCode::Esc), 1);
        drop(handle);
        assert_eq!(listeners.count(KeyCode::Esc), 0);
    }
}

#[test]
fn dropping_one_handle_keeps_the_others() {
    let listeners = KeyListeners::new();
    let a = listeners.register(KeyCode::Esc, Action::Dismiss);
    let b = listeners.register(KeyCode::Enter, Action::ActivateFocused);
    assert_eq!(listeners.len(), 2);

    drop(a);
    assert_eq!(listeners.count(KeyCode::Esc), 0);
    assert_eq!(listeners.count(KeyCode::Enter), 1);
    assert!(b.is_registered());
}

#[test]
fn chords_and_releases_do_not_match() {
    let listeners = KeyListeners::new();
    let _handle = listeners.register(KeyCode::Esc, Action::Dismiss);

    let ctrl = KeyEvent::new(KeyCode::Esc, KeyModifiers::CONTROL);
    assert!(listeners.matching(&ctrl).is_empty());

    let mut release = esc();
    release.kind = KeyEventKind::Release;
    assert!(listeners.matching(&release).is_empty());

    let shift = KeyEvent::new(KeyCode::Esc, KeyModifiers::SHIFT);
    assert_eq!(listeners.matching(&shift), vec![Action::Dismiss]);
}

#[test]
fn handle_outliving_registry_is_harmless() {
    let listeners = KeyListeners::new();
    let handle = listeners.register(KeyCode::Esc, Action::Dismiss);
    drop(listeners);
    assert!(!handle.is_registered());
    drop(handle);
}
