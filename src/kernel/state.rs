use crate::catalog::{Catalog, CatalogItem};

/// Which card, if any, is shown in the detail overlay.
///
/// Holds a `'static` reference into the catalog, so a non-empty selection can
/// never dangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<&'static CatalogItem>);

impl Selection {
    pub const fn none() -> Self {
        Self(None)
    }

    pub const fn of(item: &'static CatalogItem) -> Self {
        Self(Some(item))
    }

    pub fn item(&self) -> Option<&'static CatalogItem> {
        self.0
    }

    pub fn id(&self) -> Option<&'static str> {
        self.0.map(|item| item.id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn is(&self, id: &str) -> bool {
        self.id() == Some(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// First content row shown at the top of the viewport.
    pub scroll: u16,
    /// Keyboard focus as a flat catalog index.
    pub focus: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    /// First description line shown in the overlay body.
    pub scroll: u16,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub selection: Selection,
    pub page: PageState,
    pub overlay: OverlayState,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::none(),
            page: PageState::default(),
            overlay: OverlayState::default(),
        }
    }
}
