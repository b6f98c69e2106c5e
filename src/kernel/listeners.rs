//! Global key listeners with scoped lifetimes.
//!
//! A listener lives exactly as long as its `ListenerHandle`: dropping the
//! handle deregisters it, so every exit path of the owner releases it.

use super::Action;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug)]
struct Entry {
    id: u64,
    code: KeyCode,
    action: Action,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Rc<RefCell<Registry>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, code: KeyCode, action: Action) -> ListenerHandle {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id = reg.next_id.wrapping_add(1);
        reg.entries.push(Entry { id, code, action });

        ListenerHandle {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, code: KeyCode) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.code == code)
            .count()
    }

    /// Actions of every listener bound to the event's key, in registration order.
    ///
    /// Chords with Ctrl/Alt/Super never match; releases never match.
    pub fn matching(&self, event: &KeyEvent) -> Vec<Action> {
        if !event.is_press()
            || event.modifiers.contains(KeyModifiers::CONTROL)
            || event.modifiers.contains(KeyModifiers::ALT)
            || event.modifiers.contains(KeyModifiers::SUPER)
        {
            return Vec::new();
        }

        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.code == event.code)
            .map(|e| e.action)
            .collect()
    }
}

#[derive(Debug)]
#[must_use = "dropping the handle deregisters the listener"]
pub struct ListenerHandle {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerHandle {
    pub fn is_registered(&self) -> bool {
        let Some(reg) = self.registry.upgrade() else {
            return false;
        };
        let registered = reg.borrow().entries.iter().any(|e| e.id == self.id);
        registered
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let Some(reg) = self.registry.upgrade() else {
            return;
        };
        reg.borrow_mut().entries.retain(|e| e.id != self.id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/listeners.rs"]
mod tests;
