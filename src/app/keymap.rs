//! Key → command bindings: the default table plus the override rules from
//! settings.

use crate::app::settings::{parse_keybinding, KeybindingRule};
use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: FxHashMap<Key, Command>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }

    pub fn empty() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    pub fn from_rules(rules: &[KeybindingRule]) -> Self {
        let mut keymap = Self::with_defaults();
        keymap.apply_rules(rules);
        keymap
    }

    /// Later rules win. Unparseable keys or commands are skipped with a warning.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid key in keybinding rule");
                continue;
            };

            if rule.command.trim().is_empty() {
                self.unbind(&key);
                continue;
            }

            match Command::from_name(&rule.command) {
                Some(command) => self.bind(key, command),
                None => {
                    tracing::warn!(command = %rule.command, "unknown command in keybinding rule")
                }
            }
        }
    }

    pub fn resolve(&self, key: &Key) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn bindings(&self) -> &FxHashMap<Key, Command> {
        &self.bindings
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

fn default_bindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();

    map.insert(Key::simple(KeyCode::Char('q')), Command::Quit);
    map.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);

    map.insert(Key::simple(KeyCode::Tab), Command::FocusNext);
    map.insert(Key::simple(KeyCode::BackTab), Command::FocusPrev);
    // Some terminals report Shift+Tab as BackTab with SHIFT set.
    map.insert(Key::shift(KeyCode::BackTab), Command::FocusPrev);
    map.insert(Key::shift(KeyCode::Tab), Command::FocusPrev);

    for (keys, command) in [
        ([KeyCode::Left, KeyCode::Char('h')], Command::FocusLeft),
        ([KeyCode::Right, KeyCode::Char('l')], Command::FocusRight),
        ([KeyCode::Up, KeyCode::Char('k')], Command::FocusUp),
        ([KeyCode::Down, KeyCode::Char('j')], Command::FocusDown),
        ([KeyCode::Enter, KeyCode::Char(' ')], Command::ActivateFocused),
    ] {
        for code in keys {
            map.insert(Key::simple(code), command);
        }
    }

    map.insert(
        Key::new(KeyCode::Up, KeyModifiers::CONTROL),
        Command::ScrollUp,
    );
    map.insert(
        Key::new(KeyCode::Down, KeyModifiers::CONTROL),
        Command::ScrollDown,
    );
    map.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    map.insert(Key::simple(KeyCode::PageDown), Command::PageDown);
    map.insert(Key::simple(KeyCode::Home), Command::ScrollTop);
    map.insert(Key::simple(KeyCode::End), Command::ScrollBottom);

    map
}

#[cfg(test)]
#[path = "../../tests/unit/app/keymap.rs"]
mod tests;
