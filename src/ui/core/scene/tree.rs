//! Hit-test tree of one frame. Widgets push a node per interactive region
//! while painting; the runtime queries it until the next frame replaces it.

use super::geom::{Pos, Rect};
use super::id::Id;
use crate::kernel::Action;
use std::ops::BitOr;

/// Which pointer interactions a node takes part in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u8);

impl Sense {
    pub const HOVER: Self = Self(1 << 0);
    pub const CLICK: Self = Self(1 << 1);
    pub const SCROLL: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Sense {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// A higher layer always wins over a lower one.
pub const LAYER_PAGE: u8 = 0;
pub const LAYER_OVERLAY: u8 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Clicking the node dispatches the bound action.
    Trigger { action: Action },
    /// The overlay surface: swallows clicks so they never reach the backdrop,
    /// and takes the wheel for the description body.
    Surface,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub layer: u8,
    pub sense: Sense,
    pub kind: NodeKind,
}

/// Nodes in push order. Within a layer, a later node sits above an earlier one.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Topmost node at `p` that senses `required`.
    pub fn hit_test_with_sense(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.sense.contains(required) && n.rect.contains(p))
            .max_by_key(|(order, n)| (n.layer, *order))
            .map(|(_, n)| n)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/tree.rs"]
mod tests;
