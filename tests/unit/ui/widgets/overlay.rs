use super::*;
use crate::catalog::Catalog;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Mod;
use crate::ui::core::tree::{UiTree, LAYER_OVERLAY};

fn item(id: &str) -> &'static CatalogItem {
    Catalog::builtin().find(id).unwrap()
}

fn styles() -> OverlayStyles {
    OverlayStyles {
        backdrop: Style::default().dim(),
        ..OverlayStyles::default()
    }
}

fn paint(item: &CatalogItem, layout: &OverlayLayout, scroll: u16) -> (Painter, UiTree) {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    {
        let mut ui = Ui::new(layout.screen, LAYER_OVERLAY, &mut painter, &mut tree);
        Overlay {
            id_base: IdPath::root("overlay"),
            item,
            layout,
            on_dismiss: Action::Dismiss,
            scroll,
            hovered: None,
            styles: styles(),
        }
        .ui(&mut ui);
    }
    (painter, tree)
}

fn draw(screen: Rect, painter: &Painter) -> TestBackend {
    let mut backend = TestBackend::new(screen.w, screen.h);
    backend.draw(screen, painter.cmds());
    backend
}

#[test]
fn layout_centers_a_capped_surface() {
    let screen = Rect::new(0, 0, 80, 24);
    let layout = OverlayLayout::compute(item("core-api"), screen);

    assert_eq!(layout.surface.w, MAX_WIDTH);
    assert_eq!(layout.surface.x, 4);
    assert_eq!(
        layout.surface.h as usize,
        CHROME_ROWS as usize + layout.lines.len()
    );
    assert_eq!(layout.max_scroll, 0);
    assert_eq!(
        layout.close,
        Rect::new(layout.surface.right() - 5, layout.surface.y + 1, 3, 1)
    );
    assert_eq!(layout.body.w, MAX_WIDTH - 4);
}

#[test]
fn layout_on_small_screen_scrolls_the_body() {
    let screen = Rect::new(0, 0, 30, 10);
    let layout = OverlayLayout::compute(item("core-api"), screen);

    assert_eq!(layout.surface, Rect::new(2, 0, 26, 9));
    assert_eq!(layout.body, Rect::new(4, 5, 22, 3));
    assert_eq!(layout.max_scroll as usize, layout.lines.len() - 3);
}

#[test]
fn overlay_shows_item_text_heading_and_close() {
    let screen = Rect::new(0, 0, 80, 24);
    let layout = OverlayLayout::compute(item("core-api"), screen);
    let (painter, _) = paint(item("core-api"), &layout, 0);
    let backend = draw(screen, &painter);
    let buf = backend.buffer();

    let s = layout.surface;
    assert_eq!(
        buf.find("Core API & User Services"),
        Some(Pos::new(s.x + 2, s.y + 1))
    );
    assert_eq!(buf.find("Go (Golang)"), Some(Pos::new(s.x + 2, s.y + 2)));
    assert_eq!(buf.find(DETAIL_HEADING), Some(Pos::new(s.x + 2, s.y + 4)));
    assert_eq!(buf.find(CLOSE_LABEL), Some(Pos::new(layout.close.x, layout.close.y)));
    assert_eq!(buf.find("Go is designed"), Some(Pos::new(s.x + 2, s.y + 5)));
}

#[test]
fn backdrop_and_close_dismiss_but_surface_absorbs() {
    let screen = Rect::new(0, 0, 80, 24);
    let layout = OverlayLayout::compute(item("db-cache"), screen);
    let (_, tree) = paint(item("db-cache"), &layout, 0);

    let backdrop = tree.hit_test_with_sense(Pos::new(0, 0), Sense::CLICK).unwrap();
    assert_eq!(backdrop.id, Overlay::backdrop_id(IdPath::root("overlay")));
    assert_eq!(backdrop.kind, NodeKind::Trigger { action: Action::Dismiss });
    assert_eq!(backdrop.rect, screen);

    let inside = Pos::new(layout.surface.x + 3, layout.surface.y + 5);
    let surface = tree.hit_test_with_sense(inside, Sense::CLICK).unwrap();
    assert_eq!(surface.kind, NodeKind::Surface);

    // Only the surface takes the wheel; the backdrop does not.
    let wheel = tree.hit_test_with_sense(inside, Sense::SCROLL).unwrap();
    assert_eq!(wheel.kind, NodeKind::Surface);
    assert!(tree.hit_test_with_sense(Pos::new(0, 0), Sense::SCROLL).is_none());

    let close = Pos::new(layout.close.x + 1, layout.close.y);
    let close = tree.hit_test_with_sense(close, Sense::CLICK).unwrap();
    assert_eq!(close.id, Overlay::close_id(IdPath::root("overlay")));
    assert_eq!(close.kind, NodeKind::Trigger { action: Action::Dismiss });

    assert!(tree.nodes().iter().all(|n| n.layer == LAYER_OVERLAY));
}

#[test]
fn backdrop_dims_page_without_erasing_it() {
    let screen = Rect::new(0, 0, 80, 24);
    let layout = OverlayLayout::compute(item("db-cache"), screen);
    let (overlay, _) = paint(item("db-cache"), &layout, 0);

    let mut page = Painter::new();
    page.text(Pos::new(0, 0), "page", Style::default());
    let mut backend = TestBackend::new(80, 24);
    backend.draw(screen, page.cmds());
    backend.draw(screen, overlay.cmds());

    let cell = backend.buffer().cell(0, 0).unwrap();
    assert_eq!(cell.symbol, "p");
    assert!(cell.style.mods.contains(Mod::DIM));
}

#[test]
fn scrolled_body_shows_position_hint() {
    let screen = Rect::new(0, 0, 30, 10);
    let layout = OverlayLayout::compute(item("core-api"), screen);
    let total = layout.lines.len();

    let (painter, _) = paint(item("core-api"), &layout, 0);
    let backend = draw(screen, &painter);
    assert!(backend.buffer().find(&format!("1-3/{total}")).is_some());
    assert_eq!(backend.buffer().find(&layout.lines[0]), Some(Pos::new(4, 5)));

    let (painter, _) = paint(item("core-api"), &layout, 2);
    let backend = draw(screen, &painter);
    assert!(backend.buffer().find(&format!("3-5/{total}")).is_some());
    assert_eq!(backend.buffer().find(&layout.lines[2]), Some(Pos::new(4, 5)));

    // Offsets past the end clamp to the last page.
    let (painter, _) = paint(item("core-api"), &layout, u16::MAX);
    let backend = draw(screen, &painter);
    let first = layout.max_scroll as usize + 1;
    assert!(backend
        .buffer()
        .find(&format!("{first}-{total}/{total}"))
        .is_some());
}

#[test]
fn short_description_has_no_hint() {
    let screen = Rect::new(0, 0, 80, 24);
    let layout = OverlayLayout::compute(item("db-cache"), screen);
    let (painter, _) = paint(item("db-cache"), &layout, 0);
    let backend = draw(screen, &painter);

    assert!(backend.buffer().find("1-").is_none());
}
