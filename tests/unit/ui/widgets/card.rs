use super::*;
use crate::catalog::Catalog;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;
use crate::ui::core::tree::{UiTree, LAYER_PAGE};

fn styles() -> CardStyles {
    CardStyles {
        border: Style::default().fg(Color::Indexed(1)),
        border_active: Style::default().fg(Color::Indexed(2)),
        button: Style::default().fg(Color::Indexed(3)),
        button_active: Style::default().fg(Color::Indexed(4)),
        ..CardStyles::default()
    }
}

fn paint(card: &mut Card<'_>, rect: Rect) -> (Painter, UiTree) {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    {
        let mut ui = Ui::new(rect, LAYER_PAGE, &mut painter, &mut tree);
        card.ui(&mut ui);
    }
    (painter, tree)
}

fn core_api() -> &'static CatalogItem {
    Catalog::builtin().find("core-api").unwrap()
}

fn card(hovered: Option<Id>, focused: bool) -> Card<'static> {
    Card {
        id_base: IdPath::root("test").push_str("core-api"),
        item: core_api(),
        on_activate: Action::Activate { id: "core-api" },
        on_focus: Action::FocusSet { index: Some(2) },
        hovered,
        focused,
        styles: styles(),
    }
}

#[test]
fn card_paints_item_fields_and_button() {
    let rect = Rect::new(0, 0, 30, CARD_HEIGHT);
    let (painter, _) = paint(&mut card(None, false), rect);

    let mut backend = TestBackend::new(30, CARD_HEIGHT);
    backend.draw(rect, painter.cmds());
    let buf = backend.buffer();

    assert_eq!(buf.find("Core API & User Services"), Some(Pos::new(2, 3)));
    assert_eq!(buf.find("Go (Golang)"), Some(Pos::new(2, 5)));
    assert_eq!(buf.find("[ Learn More ]"), Some(Pos::new(2, 7)));
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "╭");
    assert_eq!(buf.cell(0, 0).unwrap().style.fg, Some(Color::Indexed(1)));
}

#[test]
fn card_binds_activation_to_button_and_focus_to_tile() {
    let rect = Rect::new(0, 0, 30, CARD_HEIGHT);
    let id_base = IdPath::root("test").push_str("core-api");
    let (_, tree) = paint(&mut card(None, false), rect);

    let tile = tree.node(Card::tile_id(id_base)).unwrap();
    assert_eq!(tile.rect, rect);
    assert_eq!(
        tile.kind,
        NodeKind::Trigger {
            action: Action::FocusSet { index: Some(2) }
        }
    );
    assert_eq!(tile.layer, LAYER_PAGE);

    let button = tree.node(Card::button_id(id_base)).unwrap();
    assert_eq!(button.rect, Rect::new(2, 7, 14, 1));
    assert!(button.sense.contains(Sense::CLICK));
    assert_eq!(
        button.kind,
        NodeKind::Trigger {
            action: Action::Activate { id: "core-api" }
        }
    );

    let triggers = tree
        .nodes()
        .iter()
        .filter(|n| n.kind == NodeKind::Trigger { action: Action::Activate { id: "core-api" } })
        .count();
    assert_eq!(triggers, 1);

    // The button sits on top of the tile.
    let hit = tree.hit_test_with_sense(Pos::new(3, 7), Sense::CLICK).unwrap();
    assert_eq!(hit.id, Card::button_id(id_base));
    let hit = tree.hit_test_with_sense(Pos::new(3, 2), Sense::CLICK).unwrap();
    assert_eq!(hit.id, Card::tile_id(id_base));
}

#[test]
fn hover_and_focus_highlight_the_border() {
    let rect = Rect::new(0, 0, 30, CARD_HEIGHT);
    let id_base = IdPath::root("test").push_str("core-api");

    for (hovered, focused) in [
        (Some(Card::tile_id(id_base)), false),
        (Some(Card::button_id(id_base)), false),
        (None, true),
    ] {
        let (painter, _) = paint(&mut card(hovered, focused), rect);
        let mut backend = TestBackend::new(30, CARD_HEIGHT);
        backend.draw(rect, painter.cmds());
        assert_eq!(
            backend.buffer().cell(0, 0).unwrap().style.fg,
            Some(Color::Indexed(2))
        );
    }

    let (painter, _) = paint(&mut card(Some(Card::button_id(id_base)), false), rect);
    let mut backend = TestBackend::new(30, CARD_HEIGHT);
    backend.draw(rect, painter.cmds());
    assert_eq!(
        backend.buffer().cell(2, 7).unwrap().style.fg,
        Some(Color::Indexed(4))
    );
}

#[test]
fn tiny_rect_paints_nothing() {
    let (painter, tree) = paint(&mut card(None, false), Rect::new(0, 0, 5, 2));
    assert!(painter.cmds().is_empty());
    assert!(tree.nodes().is_empty());
}

#[test]
fn long_titles_are_capped_at_two_lines() {
    let lines = title_lines("Real-time Collaboration & Messaging", 20);
    assert_eq!(lines, vec!["Real-time", "Collaboration & Mes…"]);

    let short = title_lines("Cloud Provider", 20);
    assert_eq!(short, vec!["Cloud Provider"]);
}
