use super::{Action, AppState, Selection};
use crate::catalog::CatalogItem;

pub struct DispatchResult {
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self { state_changed }
    }

    fn unchanged() -> Self {
        Self {
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Activate { id } => match self.state.catalog.find(id) {
                Some(item) => self.select(item),
                None => {
                    tracing::warn!(id, "activate: no such catalog item");
                    DispatchResult::unchanged()
                }
            },
            Action::ActivateFocused => {
                let focused = self
                    .state
                    .page
                    .focus
                    .and_then(|index| self.state.catalog.item_at(index));
                match focused {
                    Some(item) => self.select(item),
                    None => DispatchResult::unchanged(),
                }
            }
            Action::Dismiss => {
                let Some(prev) = self.state.selection.id() else {
                    return DispatchResult::unchanged();
                };
                self.state.selection = Selection::none();
                self.state.overlay.scroll = 0;
                tracing::debug!(id = prev, "selection cleared");
                DispatchResult::changed(true)
            }
            Action::FocusMove { delta, wrap } => {
                let len = self.state.catalog.len();
                if len == 0 {
                    return DispatchResult::unchanged();
                }
                let next = match self.state.page.focus {
                    None if delta >= 0 => 0,
                    None => len - 1,
                    Some(cur) => {
                        let target = cur as isize + delta;
                        if wrap {
                            target.rem_euclid(len as isize) as usize
                        } else {
                            target.clamp(0, len as isize - 1) as usize
                        }
                    }
                };
                let prev = self.state.page.focus.replace(next);
                DispatchResult::changed(prev != Some(next))
            }
            Action::FocusSet { index } => {
                let index = index.filter(|i| *i < self.state.catalog.len());
                let prev = std::mem::replace(&mut self.state.page.focus, index);
                DispatchResult::changed(prev != index)
            }
            Action::PageScroll { delta, max } => {
                let next = scrolled(self.state.page.scroll, delta, max);
                let prev = std::mem::replace(&mut self.state.page.scroll, next);
                DispatchResult::changed(prev != next)
            }
            Action::PageScrollTo { offset, max } => {
                let next = offset.min(max);
                let prev = std::mem::replace(&mut self.state.page.scroll, next);
                DispatchResult::changed(prev != next)
            }
            Action::PageReveal {
                top,
                bottom,
                view_height,
            } => {
                let scroll = self.state.page.scroll;
                let next = if top < scroll || bottom.saturating_sub(top) > view_height {
                    top
                } else if bottom > scroll.saturating_add(view_height) {
                    bottom.saturating_sub(view_height)
                } else {
                    scroll
                };
                self.state.page.scroll = next;
                DispatchResult::changed(next != scroll)
            }
            Action::OverlayScroll { delta, max } => {
                if self.state.selection.is_empty() {
                    return DispatchResult::unchanged();
                }
                let next = scrolled(self.state.overlay.scroll, delta, max);
                let prev = std::mem::replace(&mut self.state.overlay.scroll, next);
                DispatchResult::changed(prev != next)
            }
        }
    }

    fn select(&mut self, item: &'static CatalogItem) -> DispatchResult {
        if self.state.selection.is(item.id) {
            return DispatchResult::unchanged();
        }

        let prev = self.state.selection.id();
        self.state.selection = Selection::of(item);
        self.state.overlay.scroll = 0;
        self.state.page.focus = self.state.catalog.position(item.id);
        tracing::debug!(id = item.id, prev = ?prev, "selection set");
        DispatchResult::changed(true)
    }
}

fn scrolled(cur: u16, delta: isize, max: u16) -> u16 {
    (cur as isize + delta).clamp(0, max as isize) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
