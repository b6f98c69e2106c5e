//! Pointer state machine. Turns raw mouse events into hover and click events
//! against the hit-test tree of the last rendered frame.

use super::geom::Pos;
use super::id::Id;
use super::tree::{Sense, UiTree};
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The topmost hover-sensing node under the pointer changed.
    HoverChanged { from: Option<Id>, to: Option<Id> },
    /// Press and release landed on the same clickable node.
    Click { id: Id, button: MouseButton },
}

#[derive(Debug, Clone, Default)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    button: MouseButton,
    /// Clickable node under the pointer at press time, if any.
    target: Option<Id>,
}

#[derive(Debug, Default)]
pub struct UiRuntime {
    hovered: Option<Id>,
    pressed: Option<Press>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    /// Forgets a press in flight, so its release clicks nothing. Called
    /// whenever the tree under the pointer is about to change shape.
    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
    }

    pub fn on_input(&mut self, input: &InputEvent, tree: &UiTree) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::default();
        let InputEvent::Mouse(me) = input else {
            return out;
        };
        let pos = Pos::new(me.column, me.row);

        let hover = tree.hit_test_with_sense(pos, Sense::HOVER).map(|n| n.id);
        if hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: hover,
            });
            self.hovered = hover;
            out.needs_redraw = true;
        }

        let clickable = || tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
        match me.kind {
            MouseEventKind::Down(button) => {
                self.pressed = Some(Press {
                    button,
                    target: clickable(),
                });
            }
            MouseEventKind::Up(button) => {
                let Some(press) = self.pressed.take() else {
                    return out;
                };
                if press.button != button {
                    return out;
                }
                if let Some(id) = press.target.filter(|id| clickable() == Some(*id)) {
                    out.events.push(UiEvent::Click { id, button });
                }
            }
            _ => {}
        }

        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
