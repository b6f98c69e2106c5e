use super::*;
use crate::ui::core::id::Id;
use crate::ui::core::style::Style;
use crate::ui::core::tree::{NodeKind, Sense, LAYER_PAGE};

fn view() -> ScrollView {
    // 20x5 viewport at screen row 2, showing content rows 10..15.
    ScrollView::new(Rect::new(0, 2, 20, 5), 10)
}

#[test]
fn max_offset_saturates() {
    assert_eq!(ScrollView::max_offset(100, 30), 70);
    assert_eq!(ScrollView::max_offset(10, 30), 0);
}

#[test]
fn screen_y_maps_visible_rows_only() {
    let v = view();
    assert_eq!(v.screen_y(9), None);
    assert_eq!(v.screen_y(10), Some(2));
    assert_eq!(v.screen_y(14), Some(6));
    assert_eq!(v.screen_y(15), None);
}

#[test]
fn project_rect_clips_to_viewport() {
    let v = view();
    assert_eq!(
        v.project_rect(Rect::new(2, 8, 5, 4)),
        Some(Rect::new(2, 2, 5, 2))
    );
    assert_eq!(
        v.project_rect(Rect::new(15, 12, 10, 10)),
        Some(Rect::new(15, 4, 5, 3))
    );
    assert_eq!(v.project_rect(Rect::new(0, 0, 20, 10)), None);
    assert_eq!(v.project_rect(Rect::new(0, 15, 20, 3)), None);
}

#[test]
fn text_outside_viewport_is_dropped_and_inside_is_clipped_to_row() {
    let v = view();
    let mut src = Painter::new();
    src.text(Pos::new(1, 3), "hidden", Style::default());
    src.text(Pos::new(1, 11), "shown", Style::default());

    let mut out = Painter::new();
    v.project_cmds(src.cmds(), &mut out);

    assert_eq!(
        out.cmds(),
        &[PaintCmd::Text {
            pos: Pos::new(1, 3),
            text: "shown".to_string(),
            style: Style::default(),
            clip: Some(Rect::new(0, 3, 20, 1)),
        }]
    );
}

#[test]
fn partially_visible_border_is_lowered_to_edges() {
    let v = view();
    let mut src = Painter::new();
    // Rows 8..13: top edge scrolled away, bottom edge visible at row 12.
    src.border(Rect::new(2, 8, 6, 5), Style::default());

    let mut out = Painter::new();
    v.project_cmds(src.cmds(), &mut out);

    assert!(!out
        .cmds()
        .iter()
        .any(|cmd| matches!(cmd, PaintCmd::Border { .. })));
    assert!(out.cmds().contains(&PaintCmd::HLine {
        pos: Pos::new(3, 4),
        len: 4,
        ch: '─',
        style: Style::default(),
    }));
    assert!(out.cmds().iter().any(|cmd| matches!(
        cmd,
        PaintCmd::Text { pos, text, .. } if *pos == Pos::new(2, 4) && text == "╰"
    )));
    assert!(!out.cmds().iter().any(|cmd| matches!(
        cmd,
        PaintCmd::Text { text, .. } if text == "╭"
    )));
}

#[test]
fn project_nodes_drops_hidden_nodes() {
    let v = view();
    let node = |id: u64, y: u16| Node {
        id: Id::raw(id),
        rect: Rect::new(0, y, 4, 1),
        layer: LAYER_PAGE,
        sense: Sense::CLICK,
        kind: NodeKind::Surface,
    };

    let mut out = UiTree::new();
    v.project_nodes(&[node(1, 2), node(2, 12)], &mut out);

    assert_eq!(out.nodes().len(), 1);
    assert_eq!(out.nodes()[0].id, Id::raw(2));
    assert_eq!(out.nodes()[0].rect, Rect::new(0, 4, 4, 1));
}
