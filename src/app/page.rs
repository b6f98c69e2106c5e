//! The page composer: owns the `Store`, lays the catalog out, and mounts the
//! detail overlay while something is selected.
//!
//! Rendering goes in two passes. The page is painted in content coordinates
//! and projected through the scroll offset; the overlay is then painted
//! straight onto the screen on its own hit-test layer.

use crate::app::keymap::Keymap;
use crate::app::layout::{Direction, PageLayout};
use crate::app::theme::UiTheme;
use crate::catalog::{Catalog, FOOTER, PRODUCT_NAME, TAGLINE};
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::{Command, EventResult, View};
use crate::kernel::{Action, AppState, KeyListeners, ListenerHandle, Store};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::{UiEvent, UiRuntime};
use crate::ui::core::scroll::ScrollView;
use crate::ui::core::style::Style;
use crate::ui::core::text::{display_width, truncate};
use crate::ui::core::tree::{NodeKind, Sense, UiTree, LAYER_OVERLAY, LAYER_PAGE};
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::{Card, Overlay, OverlayLayout};

const WHEEL_STEP: isize = 3;

/// The overlay is mounted exactly while this exists. Dropping it releases the
/// Escape listener, whichever path drops it.
#[derive(Debug)]
struct MountedOverlay {
    item: &'static str,
    _escape: ListenerHandle,
}

/// Styles for the parts of the page outside cards and the overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageStyles {
    pub product: Style,
    /// Tagline and footer.
    pub muted: Style,
    pub section_title: Style,
    pub rule: Style,
}

pub struct Page {
    store: Store,
    theme: UiTheme,
    keymap: Keymap,
    listeners: KeyListeners,
    overlay: Option<MountedOverlay>,
    ui_runtime: UiRuntime,
    tree: UiTree,
    painter: Painter,
    layout: Option<PageLayout>,
    overlay_layout: Option<OverlayLayout>,
    area: Rect,
}

impl Page {
    pub fn new(catalog: Catalog, theme: UiTheme, keymap: Keymap) -> Self {
        Self {
            store: Store::new(AppState::new(catalog)),
            theme,
            keymap,
            listeners: KeyListeners::new(),
            overlay: None,
            ui_runtime: UiRuntime::new(),
            tree: UiTree::new(),
            painter: Painter::new(),
            layout: None,
            overlay_layout: None,
            area: Rect::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn listeners(&self) -> &KeyListeners {
        &self.listeners
    }

    pub fn overlay_mounted(&self) -> bool {
        self.overlay.is_some()
    }

    /// Hit-test tree of the last frame, in screen coordinates.
    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.layout.as_ref()
    }

    pub fn overlay_layout(&self) -> Option<&OverlayLayout> {
        self.overlay_layout.as_ref()
    }

    /// Runs `action` through the store and brings the overlay in line with
    /// the new selection. Returns whether anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        self.sync_overlay();
        result.state_changed
    }

    /// Drops all interactive state, as if the page had just been created.
    pub fn reset(&mut self) {
        let catalog = self.store.state().catalog;
        self.store = Store::new(AppState::new(catalog));
        self.ui_runtime = UiRuntime::new();
        self.sync_overlay();
    }

    fn sync_overlay(&mut self) {
        let Some(id) = self.store.state().selection.id() else {
            if let Some(mounted) = self.overlay.take() {
                tracing::debug!(id = mounted.item, "overlay unmounted, escape listener released");
                self.overlay_layout = None;
                // A press that started on the backdrop must not complete on the page.
                self.ui_runtime.reset_pointer_state();
            }
            return;
        };

        if let Some(mounted) = self.overlay.as_mut() {
            if mounted.item != id {
                tracing::debug!(from = mounted.item, to = id, "overlay item replaced");
                mounted.item = id;
            }
            return;
        }

        let escape = self.listeners.register(KeyCode::Esc, Action::Dismiss);
        tracing::debug!(id, "overlay mounted, escape listener acquired");
        self.overlay = Some(MountedOverlay {
            item: id,
            _escape: escape,
        });
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if !key.is_press() {
            return EventResult::Ignored;
        }

        let actions = self.listeners.matching(key);
        if !actions.is_empty() {
            let mut changed = false;
            for action in actions {
                changed |= self.dispatch(action);
            }
            return redraw_if(changed);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return EventResult::Quit;
        }

        let Some(command) = self.keymap.resolve(&Key::from(*key)) else {
            return EventResult::Ignored;
        };
        if self.overlay.is_some() {
            self.overlay_command(command)
        } else {
            self.page_command(command)
        }
    }

    fn overlay_command(&mut self, command: Command) -> EventResult {
        let (max, page) = self
            .overlay_layout
            .as_ref()
            .map_or((0, 1), |l| (l.max_scroll, l.body.h.max(1)));
        let delta = match command {
            Command::FocusUp | Command::ScrollUp => -1,
            Command::FocusDown | Command::ScrollDown => 1,
            Command::PageUp => -(page as isize),
            Command::PageDown => page as isize,
            Command::ScrollTop => -(max as isize),
            Command::ScrollBottom => max as isize,
            _ => return EventResult::Ignored,
        };
        redraw_if(self.dispatch(Action::OverlayScroll { delta, max }))
    }

    fn page_command(&mut self, command: Command) -> EventResult {
        let view_height = self.area.h;
        let max = self
            .layout
            .as_ref()
            .map_or(0, |l| l.max_scroll(view_height));
        let page = view_height.saturating_sub(2).max(1) as isize;

        let action = match command {
            Command::Quit => return EventResult::Quit,
            Command::FocusNext => Action::FocusMove {
                delta: 1,
                wrap: true,
            },
            Command::FocusPrev => Action::FocusMove {
                delta: -1,
                wrap: true,
            },
            Command::FocusLeft => Action::FocusMove {
                delta: -1,
                wrap: false,
            },
            Command::FocusRight => Action::FocusMove {
                delta: 1,
                wrap: false,
            },
            Command::FocusUp => self.vertical_focus(Direction::Up),
            Command::FocusDown => self.vertical_focus(Direction::Down),
            Command::ActivateFocused => Action::ActivateFocused,
            Command::ScrollUp => Action::PageScroll { delta: -1, max },
            Command::ScrollDown => Action::PageScroll { delta: 1, max },
            Command::PageUp => Action::PageScroll { delta: -page, max },
            Command::PageDown => Action::PageScroll { delta: page, max },
            Command::ScrollTop => Action::PageScrollTo { offset: 0, max },
            Command::ScrollBottom => Action::PageScrollTo { offset: max, max },
        };

        let focus_before = self.store.state().page.focus;
        let mut changed = self.dispatch(action);
        let focus_after = self.store.state().page.focus;
        if focus_after != focus_before && self.overlay.is_none() {
            changed |= self.reveal_focus();
        }
        redraw_if(changed)
    }

    fn vertical_focus(&self, direction: Direction) -> Action {
        let delta = match direction {
            Direction::Up => -1,
            Direction::Down => 1,
        };
        let Some(current) = self.store.state().page.focus else {
            return Action::FocusMove { delta, wrap: false };
        };
        match self
            .layout
            .as_ref()
            .and_then(|l| l.neighbor(current, direction))
        {
            Some(index) => Action::FocusSet { index: Some(index) },
            None => Action::FocusMove { delta: 0, wrap: false },
        }
    }

    fn reveal_focus(&mut self) -> bool {
        let Some(focus) = self.store.state().page.focus else {
            return false;
        };
        let Some((top, bottom)) = self.layout.as_ref().and_then(|l| l.reveal_range(focus)) else {
            return false;
        };
        self.dispatch(Action::PageReveal {
            top,
            bottom,
            view_height: self.area.h,
        })
    }

    /// Recomputes both layouts for a new screen size and pulls the scroll
    /// offsets back inside the new content.
    fn relayout(&mut self, area: Rect) {
        self.area = area;
        let layout = PageLayout::compute(&self.store.state().catalog, area.x, area.w);
        let max = layout.max_scroll(area.h);
        if self.store.state().page.scroll > max {
            self.dispatch(Action::PageScrollTo { offset: max, max });
        }
        self.layout = Some(layout);

        self.overlay_layout = self
            .store
            .state()
            .selection
            .item()
            .map(|item| OverlayLayout::compute(item, area));
        if let Some(max) = self.overlay_layout.as_ref().map(|l| l.max_scroll) {
            if self.store.state().overlay.scroll > max {
                self.dispatch(Action::OverlayScroll { delta: 0, max });
            }
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let out = self
            .ui_runtime
            .on_input(&InputEvent::Mouse(*event), &self.tree);
        let mut changed = out.needs_redraw;

        for ui_event in out.events {
            let UiEvent::Click {
                id,
                button: MouseButton::Left,
                ..
            } = ui_event
            else {
                continue;
            };
            if let Some(NodeKind::Trigger { action }) = self.tree.node(id).map(|n| n.kind) {
                changed |= self.dispatch(action);
            }
        }

        let wheel = match event.kind {
            MouseEventKind::ScrollUp => -WHEEL_STEP,
            MouseEventKind::ScrollDown => WHEEL_STEP,
            _ => 0,
        };
        if wheel != 0 {
            changed |= self.scroll_wheel(Pos::new(event.column, event.row), wheel);
        }

        redraw_if(changed)
    }

    /// The wheel goes to whatever scrollable node is under the pointer. The
    /// page itself scrolls only while no overlay covers it.
    fn scroll_wheel(&mut self, pos: Pos, delta: isize) -> bool {
        let target = self
            .tree
            .hit_test_with_sense(pos, Sense::SCROLL)
            .map(|n| n.kind);
        match target {
            Some(NodeKind::Surface) => {
                let max = self.overlay_layout.as_ref().map_or(0, |l| l.max_scroll);
                self.dispatch(Action::OverlayScroll { delta, max })
            }
            None if self.overlay.is_none() => {
                let max = self
                    .layout
                    .as_ref()
                    .map_or(0, |l| l.max_scroll(self.area.h));
                self.dispatch(Action::PageScroll { delta, max })
            }
            _ => false,
        }
    }

    fn paint_page(&self, layout: &PageLayout, painter: &mut Painter, tree: &mut UiTree) {
        let state = self.store.state();
        let theme = &self.theme;
        let styles = theme.page_styles();
        // Under the overlay the cards are inert: no hover, no focus ring.
        let (hovered, focus) = if self.overlay.is_some() {
            (None, None)
        } else {
            (self.ui_runtime.hovered(), state.page.focus)
        };

        let header = layout.header;
        centered_text(painter, header.row(1), PRODUCT_NAME, styles.product);
        centered_text(painter, header.row(2), TAGLINE, styles.muted);

        let sections = state.catalog.sections();
        for section_layout in &layout.sections {
            let Some(section) = sections.get(section_layout.section) else {
                continue;
            };
            let accent = theme.tint(section.accent);
            let heading = section_layout.heading;
            painter.text_clipped(
                Pos::new(heading.x, heading.y),
                "▍",
                Style::new().fg(accent),
                heading,
            );
            painter.text_clipped(
                Pos::new(heading.x + 2, heading.y),
                truncate(section.title, heading.w.saturating_sub(2) as usize),
                styles.section_title,
                heading,
            );
            let rule = section_layout.rule;
            painter.hline(Pos::new(rule.x, rule.y), rule.w, '─', styles.rule);

            for (slot, item) in section_layout.cards.iter().zip(section.items.iter()) {
                let id_base = IdPath::root("page").push_str("card").push_str(item.id);
                let mut ui = Ui::new(slot.rect, LAYER_PAGE, painter, tree);
                Card {
                    id_base,
                    item,
                    on_activate: Action::Activate { id: item.id },
                    on_focus: Action::FocusSet {
                        index: Some(slot.index),
                    },
                    hovered,
                    focused: focus == Some(slot.index),
                    styles: theme.card_styles(item.icon.tint()),
                }
                .ui(&mut ui);
            }
        }

        let footer = layout.footer;
        painter.hline(Pos::new(footer.x, footer.y), footer.w, '─', styles.rule);
        centered_text(painter, footer.row(1), FOOTER, styles.muted);
    }
}

impl View for Page {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(w, h) => {
                self.ui_runtime.reset_pointer_state();
                self.relayout(Rect::new(self.area.x, self.area.y, *w, *h));
                EventResult::Consumed
            }
            InputEvent::FocusLost => {
                self.ui_runtime.reset_pointer_state();
                EventResult::Ignored
            }
            InputEvent::FocusGained | InputEvent::Paste(_) => EventResult::Ignored,
        }
    }

    /// Reads the store and never writes it. Offsets a resize left past the
    /// end are clamped by `relayout`; until then they are shown clamped.
    fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        self.area = area;
        let layout = PageLayout::compute(&self.store.state().catalog, area.x, area.w);
        let overlay_layout = self
            .store
            .state()
            .selection
            .item()
            .map(|item| OverlayLayout::compute(item, area));

        let mut content = Painter::new();
        let mut content_tree = UiTree::new();
        self.paint_page(&layout, &mut content, &mut content_tree);

        self.painter.clear();
        self.tree.clear();
        let scroll = self.store.state().page.scroll.min(layout.max_scroll(area.h));
        let view = ScrollView::new(area, scroll);
        view.project_cmds(content.cmds(), &mut self.painter);
        view.project_nodes(content_tree.nodes(), &mut self.tree);

        let selection = self.store.state().selection.item();
        if let (Some(item), Some(ol)) = (selection, &overlay_layout) {
            let mut ui = Ui::new(area, LAYER_OVERLAY, &mut self.painter, &mut self.tree);
            Overlay {
                id_base: IdPath::root("overlay"),
                item,
                layout: ol,
                on_dismiss: Action::Dismiss,
                scroll: self.store.state().overlay.scroll,
                hovered: self.ui_runtime.hovered(),
                styles: self.theme.overlay_styles(),
            }
            .ui(&mut ui);
        }

        backend.draw(area, self.painter.cmds());
        self.layout = Some(layout);
        self.overlay_layout = overlay_layout;
    }
}

fn centered_text(painter: &mut Painter, row: Rect, text: &str, style: Style) {
    if row.is_empty() {
        return;
    }
    let text = truncate(text, row.w as usize);
    let at = row.centered(display_width(&text) as u16, 1);
    painter.text_clipped(Pos::new(at.x, at.y), text, style, row);
}

fn redraw_if(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/page.rs"]
mod tests;
