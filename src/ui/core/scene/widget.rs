use super::geom::Rect;
use super::id::Id;
use super::painter::Painter;
use super::tree::{Node, NodeKind, Sense, UiTree};

/// What a widget paints into: its rect, the shared painter, and the hit-test
/// tree on one layer.
pub struct Ui<'a> {
    pub rect: Rect,
    pub layer: u8,
    pub painter: &'a mut Painter,
    pub tree: &'a mut UiTree,
}

impl<'a> Ui<'a> {
    pub fn new(rect: Rect, layer: u8, painter: &'a mut Painter, tree: &'a mut UiTree) -> Self {
        Self {
            rect,
            layer,
            painter,
            tree,
        }
    }

    /// Registers a hit-test node on this layer, above everything pushed
    /// before it.
    pub fn sense(&mut self, id: Id, rect: Rect, sense: Sense, kind: NodeKind) {
        self.tree.push(Node {
            id,
            rect,
            layer: self.layer,
            sense,
            kind,
        });
    }
}

pub trait Widget {
    fn ui(&mut self, ui: &mut Ui);
}
