//! Static content catalog: the ordered sections and cards shown on the page.
//!
//! Everything here is `'static` and compiled in; there is no load path and no
//! way to mutate the dataset at runtime.

mod data;
pub mod icon;

pub use icon::{IconId, Tint};

/// Page copy that surrounds the catalog.
pub const PRODUCT_NAME: &str = "VerseFlow";
pub const TAGLINE: &str = "A Modern Software Architecture Proposal";
pub const FOOTER: &str = "Built with Rust, ratatui and crossterm. All rights reserved.";
pub const ACTIVATE_LABEL: &str = "Learn More";
pub const DETAIL_HEADING: &str = "Paradigm & Rationale";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: IconId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSection {
    pub title: &'static str,
    pub accent: Tint,
    pub items: &'static [CatalogItem],
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    sections: &'static [CatalogSection],
}

impl Catalog {
    pub const fn new(sections: &'static [CatalogSection]) -> Self {
        Self { sections }
    }

    pub fn builtin() -> Self {
        Self::new(data::SECTIONS)
    }

    pub fn sections(&self) -> &'static [CatalogSection] {
        self.sections
    }

    /// All items in display order (section by section).
    pub fn items(&self) -> impl Iterator<Item = &'static CatalogItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: &str) -> Option<&'static CatalogItem> {
        self.items().find(|item| item.id == id)
    }

    /// Flat display index of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items().position(|item| item.id == id)
    }

    pub fn item_at(&self, index: usize) -> Option<&'static CatalogItem> {
        self.items().nth(index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/mod.rs"]
mod tests;
